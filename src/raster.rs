use std::cmp;

use image::{GrayImage, Luma};

use crate::error::Error;

pub mod reader;

/// An 8-bit single channel raster, stored row by row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Image {
    width: u32,
    height: u32,
    samples: Vec<u8>,
}

impl Image {
    pub fn new(width: u32, height: u32, samples: Vec<u8>) -> crate::Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::EmptyImage(width, height));
        }
        let expected_number_of_samples = width as usize * height as usize;
        if samples.len() != expected_number_of_samples {
            return Err(Error::MismatchOfSizeBetweenDimensionsAndSamples(
                expected_number_of_samples,
                samples.len(),
            ));
        }
        Ok(Self {
            width,
            height,
            samples,
        })
    }

    pub fn from_fn<F>(width: u32, height: u32, mut sample_at: F) -> crate::Result<Self>
    where
        F: FnMut(u32, u32) -> u8,
    {
        let mut samples = Vec::with_capacity(width as usize * height as usize);
        for row_index in 0..height {
            for column_index in 0..width {
                samples.push(sample_at(column_index, row_index));
            }
        }
        Self::new(width, height, samples)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn samples(&self) -> &[u8] {
        &self.samples
    }

    pub fn sample(&self, column_index: u32, row_index: u32) -> u8 {
        let index = column_index as usize + row_index as usize * self.width as usize;
        self.samples[index]
    }

    /// Applies `f` to every sample and returns the result as a new image of
    /// the same size.
    pub fn map_samples<F>(&self, f: F) -> Self
    where
        F: Fn(u8) -> u8,
    {
        Self {
            width: self.width,
            height: self.height,
            samples: self.samples.iter().map(|sample| f(*sample)).collect(),
        }
    }

    /// Sum and count of the samples inside the given rectangle. The rectangle
    /// is clipped to the image extent, so border blocks only count what they
    /// actually cover.
    pub(crate) fn rect_sum(
        &self,
        column_index: u32,
        row_index: u32,
        width: u32,
        height: u32,
    ) -> (u64, u64) {
        let last_column = cmp::min(self.width, column_index.saturating_add(width));
        let last_row = cmp::min(self.height, row_index.saturating_add(height));
        let mut sum = 0_u64;
        let mut count = 0_u64;
        for current_row in row_index..last_row {
            let row_start = current_row as usize * self.width as usize;
            let row =
                &self.samples[row_start + column_index as usize..row_start + last_column as usize];
            sum += row.iter().map(|sample| *sample as u64).sum::<u64>();
            count += row.len() as u64;
        }
        (sum, count)
    }

    pub fn to_gray_image(&self) -> GrayImage {
        GrayImage::from_fn(self.width, self.height, |column_index, row_index| {
            Luma([self.sample(column_index, row_index)])
        })
    }
}

impl TryFrom<GrayImage> for Image {
    type Error = Error;

    fn try_from(value: GrayImage) -> crate::Result<Self> {
        let (width, height) = value.dimensions();
        Self::new(width, height, value.into_raw())
    }
}

#[cfg(test)]
mod tests {
    use image::GrayImage;

    use super::Image;
    use crate::error::ErrorKind;

    #[rustfmt::skip]
    const TEST_SAMPLES: &[u8] = &[
         1,  2,  3,  4,
         5,  6,  7,  8,
         9, 10, 11, 12,
        13, 14, 15, 16,
    ];

    fn create_test_image() -> Image {
        Image::new(4, 4, Vec::from(TEST_SAMPLES)).expect("test image must be valid")
    }

    #[test]
    fn sample_is_read_row_major() {
        let image = create_test_image();
        assert_eq!(image.sample(2, 1), 7);
        assert_eq!(image.sample(0, 3), 13);
    }

    #[test]
    fn empty_image_is_invalid_input() {
        let error = Image::new(0, 4, Vec::new()).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::InvalidInput);
    }

    #[test]
    fn sample_count_mismatch_is_invalid_input() {
        let error = Image::new(4, 4, vec![0; 15]).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::InvalidInput);
    }

    #[test]
    fn rect_sum_inside_image() {
        let image = create_test_image();
        assert_eq!(image.rect_sum(1, 1, 2, 2), (6 + 7 + 10 + 11, 4));
    }

    #[test]
    fn rect_sum_is_clipped_at_border() {
        let image = create_test_image();
        assert_eq!(image.rect_sum(3, 3, 2, 2), (16, 1));
    }

    #[test]
    fn map_samples_keeps_source_untouched() {
        let image = create_test_image();
        let inverted = image.map_samples(|sample| 255 - sample);
        assert_eq!(inverted.sample(0, 0), 254);
        assert_eq!(image.sample(0, 0), 1);
    }

    #[test]
    fn convert_from_and_to_gray_image() {
        let image = create_test_image();
        let gray_image = image.to_gray_image();
        assert_eq!(gray_image.dimensions(), (4, 4));
        assert_eq!(Image::try_from(gray_image).unwrap(), image);
    }

    #[test]
    fn empty_gray_image_is_rejected() {
        assert!(Image::try_from(GrayImage::new(0, 0)).is_err());
    }
}

use crate::{error::Error, raster::Image};

/// Downsampling ratio applied to both axes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReductionFactor(u32);

impl ReductionFactor {
    pub fn new(factor: i64) -> crate::Result<Self> {
        match u32::try_from(factor) {
            Ok(factor) if factor >= 1 => Ok(Self(factor)),
            _ => Err(Error::InvalidReductionFactor(factor)),
        }
    }

    pub fn get(&self) -> u32 {
        self.0
    }
}

/// Area-averaging reduction of `image` by `factor`. The result has
/// `height / factor` rows and `width / factor` columns, trailing source rows
/// and columns that do not fill a whole block are dropped. Each output sample
/// is the mean of its block, rounded half up.
pub fn reduce_resolution(image: &Image, factor: ReductionFactor) -> crate::Result<Image> {
    let rate = factor.get();
    let reduced_width = image.width() / rate;
    let reduced_height = image.height() / rate;
    if reduced_width == 0 || reduced_height == 0 {
        return Err(Error::ReductionFactorExceedsImage(
            rate,
            image.width(),
            image.height(),
        ));
    }
    if rate == 1 {
        return Ok(image.clone());
    }
    Image::from_fn(reduced_width, reduced_height, |column_index, row_index| {
        let (sum, count) = image.rect_sum(column_index * rate, row_index * rate, rate, rate);
        rounded_average(sum, count)
    })
}

fn rounded_average(sum: u64, count: u64) -> u8 {
    ((sum + count / 2) / count) as u8
}

#[cfg(test)]
mod tests {
    use super::{reduce_resolution, rounded_average, ReductionFactor};
    use crate::error::ErrorKind;
    use crate::raster::Image;

    fn create_gradient_image(width: u32, height: u32) -> Image {
        Image::from_fn(width, height, |x, y| (x + y * width) as u8).unwrap()
    }

    #[test]
    fn reduce_gradient_by_two() {
        let image = create_gradient_image(8, 8);
        let reduced = reduce_resolution(&image, ReductionFactor::new(2).unwrap()).unwrap();
        assert_eq!((reduced.width(), reduced.height()), (4, 4));
        for row_index in 0..4 {
            for column_index in 0..4 {
                // block mean is 16 * row + 2 * column + 4.5
                let expected = 16 * row_index + 2 * column_index + 5;
                assert_eq!(reduced.sample(column_index, row_index), expected as u8);
            }
        }
    }

    #[test]
    fn partial_blocks_are_dropped() {
        let image = create_gradient_image(5, 3);
        let reduced = reduce_resolution(&image, ReductionFactor::new(2).unwrap()).unwrap();
        assert_eq!((reduced.width(), reduced.height()), (2, 1));
        // (0 + 1 + 5 + 6) / 4 = 3, (2 + 3 + 7 + 8) / 4 = 5
        assert_eq!(reduced.samples(), &[3, 5]);
    }

    #[test]
    fn factor_one_is_identity() {
        let image = create_gradient_image(7, 5);
        let reduced = reduce_resolution(&image, ReductionFactor::new(1).unwrap()).unwrap();
        assert_eq!(reduced, image);
    }

    #[test]
    fn invalid_factor_is_invalid_argument() {
        for factor in [0, -2] {
            let error = ReductionFactor::new(factor).unwrap_err();
            assert_eq!(error.kind(), ErrorKind::InvalidArgument);
        }
    }

    #[test]
    fn factor_larger_than_image_is_invalid_argument() {
        let image = create_gradient_image(4, 8);
        let error = reduce_resolution(&image, ReductionFactor::new(5).unwrap()).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::InvalidArgument);
    }

    #[test]
    fn average_rounds_half_up() {
        assert_eq!(rounded_average(2, 4), 1);
        assert_eq!(rounded_average(1, 4), 0);
        assert_eq!(rounded_average(255 * 64, 64), 255);
    }
}

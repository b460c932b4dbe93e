use crate::{error::Error, raster::Image};

const NUMBER_OF_INTENSITY_VALUES: u16 = 256;

/// Number of bits kept per sample, between 1 and 8.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BitDepth(u8);

impl BitDepth {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 8;

    pub fn new(bit_depth: i64) -> crate::Result<Self> {
        if bit_depth < Self::MIN as i64 || bit_depth > Self::MAX as i64 {
            return Err(Error::InvalidBitDepth(bit_depth));
        }
        Ok(Self(bit_depth as u8))
    }

    pub fn levels(&self) -> u16 {
        1 << self.0
    }

    /// Width of a single quantization bin. Always a power of two.
    pub fn step(&self) -> u8 {
        (NUMBER_OF_INTENSITY_VALUES / self.levels()) as u8
    }
}

/// Maps every sample onto the lower bound of its quantization bin.
pub fn quantize(image: &Image, bit_depth: BitDepth) -> Image {
    let step = bit_depth.step();
    image.map_samples(|sample| (sample / step) * step)
}

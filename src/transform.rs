use clap::{builder::PossibleValue, ValueEnum};

use crate::{
    quantizer::{quantize, BitDepth},
    raster::Image,
    spatial::{reduce_resolution, ReductionFactor},
    timing::{QUANTIZATION_REPETITIONS, SPATIAL_REDUCTION_REPETITIONS},
};

const DEFAULT_BIT_DEPTHS: &[i64] = &[1, 2, 4, 6];
const DEFAULT_REDUCTION_FACTORS: &[i64] = &[2, 4, 8];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransformKind {
    Quantization,
    SpatialReduction,
}

impl ValueEnum for TransformKind {
    fn value_variants<'a>() -> &'a [Self] {
        &[Self::Quantization, Self::SpatialReduction]
    }

    fn to_possible_value(&self) -> Option<PossibleValue> {
        match self {
            Self::Quantization => Some(PossibleValue::new("quantization")),
            Self::SpatialReduction => Some(PossibleValue::new("spatial")),
        }
    }
}

impl TransformKind {
    /// Validates `parameter` for this transform and applies it to `image`.
    pub fn apply(&self, image: &Image, parameter: i64) -> crate::Result<Image> {
        match self {
            TransformKind::Quantization => Ok(quantize(image, BitDepth::new(parameter)?)),
            TransformKind::SpatialReduction => {
                reduce_resolution(image, ReductionFactor::new(parameter)?)
            }
        }
    }

    pub fn default_parameters(&self) -> &'static [i64] {
        match self {
            TransformKind::Quantization => DEFAULT_BIT_DEPTHS,
            TransformKind::SpatialReduction => DEFAULT_REDUCTION_FACTORS,
        }
    }

    /// Spatial reduction costs more per call, so it gets fewer repetitions to
    /// keep both sweeps in a similar wall-clock budget.
    pub fn default_repetitions(&self) -> u32 {
        match self {
            TransformKind::Quantization => QUANTIZATION_REPETITIONS,
            TransformKind::SpatialReduction => SPATIAL_REDUCTION_REPETITIONS,
        }
    }

    pub fn results_directory(&self) -> &'static str {
        match self {
            TransformKind::Quantization => "results_quantization",
            TransformKind::SpatialReduction => "results_spatial",
        }
    }

    pub fn comparison_suffix(&self) -> &'static str {
        match self {
            TransformKind::Quantization => "quantization_results",
            TransformKind::SpatialReduction => "spatial_results",
        }
    }

    pub fn parameter_label(&self) -> &'static str {
        match self {
            TransformKind::Quantization => "Bit Depth",
            TransformKind::SpatialReduction => "Reduction Factor",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::TransformKind;
    use crate::error::ErrorKind;
    use crate::raster::Image;

    #[test]
    fn apply_quantization() {
        let image = Image::new(2, 2, vec![200; 4]).unwrap();
        let output = TransformKind::Quantization.apply(&image, 2).unwrap();
        assert_eq!(output.samples(), &[192; 4]);
    }

    #[test]
    fn apply_spatial_reduction() {
        let image = Image::new(2, 2, vec![10, 20, 30, 40]).unwrap();
        let output = TransformKind::SpatialReduction.apply(&image, 2).unwrap();
        assert_eq!(output.samples(), &[25]);
    }

    #[test]
    fn apply_rejects_invalid_parameters() {
        let image = Image::new(2, 2, vec![0; 4]).unwrap();
        for (kind, parameter) in [
            (TransformKind::Quantization, 0),
            (TransformKind::Quantization, 9),
            (TransformKind::SpatialReduction, 0),
            (TransformKind::SpatialReduction, -4),
        ] {
            let error = kind.apply(&image, parameter).unwrap_err();
            assert_eq!(error.kind(), ErrorKind::InvalidArgument);
        }
    }

    #[test]
    fn defaults_per_kind() {
        assert_eq!(TransformKind::Quantization.default_parameters(), &[1, 2, 4, 6]);
        assert_eq!(TransformKind::Quantization.default_repetitions(), 1000);
        assert_eq!(TransformKind::SpatialReduction.default_parameters(), &[2, 4, 8]);
        assert_eq!(TransformKind::SpatialReduction.default_repetitions(), 100);
    }
}

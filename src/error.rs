use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// the image is missing, unreadable or empty
    InvalidInput,
    /// a parameter lies outside of its valid range
    InvalidArgument,
    /// writing results or reading from the terminal failed
    Io,
}

#[derive(Debug)]
pub enum Error {
    EmptyImage(u32, u32),
    MismatchOfSizeBetweenDimensionsAndSamples(usize, usize),
    InputFileNotFound(String),
    UnableToDecodeInputImage(String, image::ImageError),
    InvalidBitDepth(i64),
    InvalidReductionFactor(i64),
    ReductionFactorExceedsImage(u32, u32, u32),
    InvalidRepetitionCount,
    UnableToCreateResultsDirectory(String, std::io::Error),
    UnableToWriteOutputImage(String, image::ImageError),
    UnableToReadFromStdin(std::io::Error),
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::EmptyImage(..)
            | Self::MismatchOfSizeBetweenDimensionsAndSamples(..)
            | Self::InputFileNotFound(_)
            | Self::UnableToDecodeInputImage(..) => ErrorKind::InvalidInput,
            Self::InvalidBitDepth(_)
            | Self::InvalidReductionFactor(_)
            | Self::ReductionFactorExceedsImage(..)
            | Self::InvalidRepetitionCount => ErrorKind::InvalidArgument,
            Self::UnableToCreateResultsDirectory(..)
            | Self::UnableToWriteOutputImage(..)
            | Self::UnableToReadFromStdin(_) => ErrorKind::Io,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyImage(width, height) => {
                write!(
                    f,
                    "Image of size {}x{} contains no samples",
                    width, height
                )
            }
            Self::MismatchOfSizeBetweenDimensionsAndSamples(expected, actual) => {
                write!(
                    f,
                    "Number of samples does not match the image size. Expected {}, but got {}.",
                    expected, actual
                )
            }
            Self::InputFileNotFound(path) => {
                write!(f, "Image file '{}' not found", path)
            }
            Self::UnableToDecodeInputImage(path, error) => {
                write!(f, "Unable to load image from '{}': {}", path, error)
            }
            Self::InvalidBitDepth(bit_depth) => {
                write!(
                    f,
                    "Bit depth must be between 1 and 8, but was {}",
                    bit_depth
                )
            }
            Self::InvalidReductionFactor(factor) => {
                write!(f, "Reduction factor must be >= 1, but was {}", factor)
            }
            Self::ReductionFactorExceedsImage(factor, width, height) => {
                write!(
                    f,
                    "Reduction factor {} leaves nothing of a {}x{} image",
                    factor, width, height
                )
            }
            Self::InvalidRepetitionCount => {
                write!(f, "Number of repetitions must be at least 1")
            }
            Self::UnableToCreateResultsDirectory(path, error) => {
                write!(
                    f,
                    "Unable to create results directory '{}': {}",
                    path, error
                )
            }
            Self::UnableToWriteOutputImage(path, error) => {
                write!(f, "Unable to write output image '{}': {}", path, error)
            }
            Self::UnableToReadFromStdin(error) => {
                write!(f, "Unable to read image filename from stdin: {}", error)
            }
        }
    }
}

impl std::error::Error for Error {}

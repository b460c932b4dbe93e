use std::path::Path;

use image::{ImageError, ImageReader};

use super::Image;
use crate::error::Error;

/// Loads the image at `file_path` as 8-bit grayscale. Color sources are
/// converted to luma on the way in.
pub fn read_grayscale_image(file_path: &Path) -> crate::Result<Image> {
    let path_name = file_path.display().to_string();
    if !file_path.is_file() {
        return Err(Error::InputFileNotFound(path_name));
    }
    let decoded = ImageReader::open(file_path)
        .and_then(|reader| reader.with_guessed_format())
        .map_err(ImageError::IoError)
        .and_then(|reader| reader.decode())
        .map_err(|e| Error::UnableToDecodeInputImage(path_name.clone(), e))?;
    log::debug!(
        "Decoded '{}' ({}x{}, {:?})",
        path_name,
        decoded.width(),
        decoded.height(),
        decoded.color()
    );
    Image::try_from(decoded.to_luma8())
}

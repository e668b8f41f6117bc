//! Normalizes caller images into the inline form the Gemini API accepts.

use std::path::Path;

use base64::Engine;
use serde::{Deserialize, Serialize};

use crate::error::PlantError;

/// Mime type assumed when the input does not carry one.
pub const DEFAULT_MIME_TYPE: &str = "image/jpeg";

/// Base64 image payload with its mime type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InlineImage {
    /// Mime type, e.g. `image/png`.
    pub mime_type: String,
    /// Base64 image data, without any data-URI prefix.
    pub data: String,
}

impl InlineImage {
    /// Normalize raw base64 or a `data:<mime>;base64,<data>` URI.
    ///
    /// Input that is not a well-formed data URI is passed through untouched
    /// with the default mime type; base64 correctness is not checked.
    #[must_use]
    pub fn normalize(input: &str) -> Self {
        if let Some((mime_type, data)) = split_data_uri(input) {
            return Self { mime_type: mime_type.to_string(), data: data.to_string() };
        }
        Self { mime_type: DEFAULT_MIME_TYPE.to_string(), data: input.to_string() }
    }
}

/// Locate a `data:<mime>;base64,<data>` URI anywhere in the input.
fn split_data_uri(input: &str) -> Option<(&str, &str)> {
    let start = input.find("data:")?;
    let rest = &input[start + "data:".len()..];
    let (mime_type, rest) = rest.split_once(';')?;
    let data = rest.strip_prefix("base64,")?;
    if mime_type.is_empty() || data.is_empty() {
        return None;
    }
    Some((mime_type, data))
}

/// Read an image file and encode it as a data URI.
///
/// The mime type is sniffed from the file contents, then from the file
/// extension, and finally defaults to `image/jpeg`.
///
/// # Errors
///
/// Returns an error if the file cannot be read.
pub fn load_data_uri(path: &Path) -> Result<String, PlantError> {
    let bytes = std::fs::read(path)?;
    let mime_type = sniff_mime_type(&bytes, path);
    let data = base64::engine::general_purpose::STANDARD.encode(&bytes);
    Ok(format!("data:{mime_type};base64,{data}"))
}

fn sniff_mime_type(bytes: &[u8], path: &Path) -> &'static str {
    let format = image::guess_format(bytes).ok().or_else(|| image::ImageFormat::from_path(path).ok());
    match format {
        Some(image::ImageFormat::Png) => "image/png",
        Some(image::ImageFormat::WebP) => "image/webp",
        Some(image::ImageFormat::Gif) => "image/gif",
        Some(image::ImageFormat::Bmp) => "image/bmp",
        Some(image::ImageFormat::Tiff) => "image/tiff",
        _ => DEFAULT_MIME_TYPE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_base64_defaults_to_jpeg() {
        let image = InlineImage::normalize("/9j/4AAQSkZJRg==");
        assert_eq!(image.mime_type, "image/jpeg");
        assert_eq!(image.data, "/9j/4AAQSkZJRg==");
    }

    #[test]
    fn data_uri_keeps_embedded_mime() {
        let image = InlineImage::normalize("data:image/png;base64,iVBORw0KGgo=");
        assert_eq!(image.mime_type, "image/png");
        assert_eq!(image.data, "iVBORw0KGgo=");
    }

    #[test]
    fn malformed_data_uri_passes_through() {
        let input = "data:image/png,notbase64";
        let image = InlineImage::normalize(input);
        assert_eq!(image.mime_type, "image/jpeg");
        assert_eq!(image.data, input);
    }

    #[test]
    fn load_png_file_as_data_uri() {
        let dir = std::env::temp_dir().join("plantus_inline_image_test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("leaf.bin");
        image::DynamicImage::new_rgb8(1, 1).save_with_format(&path, image::ImageFormat::Png).unwrap();

        let uri = load_data_uri(&path).unwrap();
        assert!(uri.starts_with("data:image/png;base64,"));
        assert_eq!(InlineImage::normalize(&uri).mime_type, "image/png");

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn unknown_file_defaults_to_jpeg() {
        let dir = std::env::temp_dir().join("plantus_inline_image_unknown_test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("photo");
        std::fs::write(&path, b"not an image").unwrap();

        let uri = load_data_uri(&path).unwrap();
        assert!(uri.starts_with("data:image/jpeg;base64,"));

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn load_missing_file_fails() {
        assert!(load_data_uri(Path::new("/nonexistent/leaf.jpg")).is_err());
    }
}

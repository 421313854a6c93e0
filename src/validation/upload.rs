use std::path::Path;

use crate::error::{ApiError, Result};

/// MIME types the dashboard accepts for upload.
const ALLOWED_MIME_TYPES: [&str; 4] = ["image/jpeg", "image/png", "image/gif", "image/webp"];

/// Checks an upload candidate before any network call is made.
///
/// The content type is sniffed from the bytes, never trusted from the file
/// name.
///
/// # Arguments
///
/// * `bytes` - The file content.
/// * `max_bytes` - The configured upload size cap.
///
/// # Returns
///
/// A `Result` containing the sniffed MIME type.
pub fn validate_image(bytes: &[u8], max_bytes: u64) -> Result<&'static str> {
    if bytes.is_empty() {
        return Err(ApiError::Validation("No file content provided".to_string()));
    }

    if bytes.len() as u64 > max_bytes {
        return Err(ApiError::Validation(format!(
            "File exceeds the maximum upload size of {} MB",
            max_bytes / (1024 * 1024)
        )));
    }

    let kind = infer::get(bytes).ok_or_else(|| {
        ApiError::Validation("Unrecognized file content; expected an image".to_string())
    })?;

    let mime = kind.mime_type();
    if !ALLOWED_MIME_TYPES.contains(&mime) {
        return Err(ApiError::Validation(format!(
            "Unsupported file type {}; allowed: JPEG, PNG, GIF, WebP",
            mime
        )));
    }

    Ok(mime)
}

/// A locally validated image, ready to be sent as a multipart part.
#[derive(Debug, Clone)]
pub struct ImageUpload {
    /// The file name reported to the backend.
    pub filename: String,
    /// The raw file content.
    pub bytes: Vec<u8>,
    /// The sniffed MIME type.
    pub mime: &'static str,
}

impl ImageUpload {
    /// Validates in-memory content as an upload candidate.
    pub fn from_bytes(filename: impl Into<String>, bytes: Vec<u8>, max_bytes: u64) -> Result<Self> {
        let mime = validate_image(&bytes, max_bytes)?;
        Ok(Self {
            filename: filename.into(),
            bytes,
            mime,
        })
    }

    /// Reads and validates a file on disk as an upload candidate.
    pub async fn from_path(path: impl AsRef<Path>, max_bytes: u64) -> Result<Self> {
        let path = path.as_ref();
        let filename = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .ok_or_else(|| ApiError::Validation("Path has no file name".to_string()))?;

        let bytes = tokio::fs::read(path).await?;
        Self::from_bytes(filename, bytes, max_bytes)
    }

    /// Builds the multipart part for the `file` form field.
    pub fn to_part(&self) -> Result<reqwest::multipart::Part> {
        reqwest::multipart::Part::bytes(self.bytes.clone())
            .file_name(self.filename.clone())
            .mime_str(self.mime)
            .map_err(|e| ApiError::Internal(format!("Invalid MIME type: {}", e)))
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    const MAX: u64 = 10 * 1024 * 1024;

    /// A minimal valid PNG header followed by padding bytes.
    pub(crate) fn png_bytes(len: usize) -> Vec<u8> {
        let mut bytes = vec![0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];
        bytes.resize(len.max(bytes.len()), 0);
        bytes
    }

    #[test]
    fn png_content_is_accepted() {
        assert_eq!(validate_image(&png_bytes(64), MAX).unwrap(), "image/png");
    }

    #[test]
    fn jpeg_content_is_accepted() {
        let mut bytes = vec![0xFF, 0xD8, 0xFF, 0xE0];
        bytes.resize(32, 0);
        assert_eq!(validate_image(&bytes, MAX).unwrap(), "image/jpeg");
    }

    #[test]
    fn empty_file_is_rejected() {
        assert!(matches!(
            validate_image(&[], MAX),
            Err(ApiError::Validation(_))
        ));
    }

    #[test]
    fn oversize_file_is_rejected() {
        let err = validate_image(&png_bytes(64), 16).unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));
        assert!(err.to_string().contains("maximum upload size"));
    }

    #[test]
    fn disallowed_type_is_rejected() {
        // A PDF magic number sniffs as application/pdf.
        let mut bytes = b"%PDF-1.4".to_vec();
        bytes.resize(32, 0);
        assert!(matches!(
            validate_image(&bytes, MAX),
            Err(ApiError::Validation(_))
        ));
    }

    #[test]
    fn extension_spoofing_does_not_help() {
        let mut bytes = b"%PDF-1.4".to_vec();
        bytes.resize(32, 0);
        let result = ImageUpload::from_bytes("innocent.png", bytes, MAX);
        assert!(matches!(result, Err(ApiError::Validation(_))));
    }
}

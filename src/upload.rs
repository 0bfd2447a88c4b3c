//! Client-side validation of a room photo before upload.
//!
//! Both checks run before any network traffic: a rejected file produces no
//! request at all. The MIME allow-list matches the backend's own extension
//! allow-list (JPG/PNG/GIF).

#[cfg(test)]
#[path = "upload_test.rs"]
mod upload_test;

use thiserror::Error;

use crate::consts::{ALLOWED_UPLOAD_TYPES, MAX_UPLOAD_BYTES};

/// Why a candidate file was rejected before upload.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UploadError {
    /// The file's MIME type is not an accepted image format.
    #[error("unsupported file type \"{0}\"; upload a JPG, PNG, or GIF image")]
    UnsupportedType(String),

    /// The file exceeds the upload size limit.
    #[error("file is {0} bytes; the limit is {MAX_UPLOAD_BYTES} (16 MiB)")]
    TooLarge(u64),
}

/// Validate a candidate room photo. A file of exactly
/// [`MAX_UPLOAD_BYTES`] passes; one byte more is rejected.
///
/// # Errors
///
/// [`UploadError::UnsupportedType`] or [`UploadError::TooLarge`] with the
/// offending value.
pub fn validate(mime: &str, size_bytes: u64) -> Result<(), UploadError> {
    if !ALLOWED_UPLOAD_TYPES.contains(&mime) {
        return Err(UploadError::UnsupportedType(mime.to_owned()));
    }
    if size_bytes > MAX_UPLOAD_BYTES {
        return Err(UploadError::TooLarge(size_bytes));
    }
    Ok(())
}

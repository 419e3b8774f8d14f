//! Upload pre-flight validation rules.
//!
//! The actual byte transfer happens directly between the client and
//! the storage service; this module only decides whether a prospective
//! upload is acceptable.

use thiserror::Error;

/// MIME types accepted for recipe images.
pub const ALLOWED_IMAGE_TYPES: [&str; 5] = [
    "image/jpeg",
    "image/jpg",
    "image/png",
    "image/gif",
    "image/webp",
];

/// Upload size ceiling: 5 MiB.
pub const MAX_UPLOAD_BYTES: u64 = 5 * 1024 * 1024;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum UploadError {
    #[error("Invalid file type. Only JPEG, PNG, GIF, and WebP are allowed.")]
    InvalidType,

    #[error("File size too large. Maximum size is 5MB.")]
    TooLarge,
}

/// Check a prospective upload against the type allow-list and the size
/// ceiling. `size` is the exact byte count of the file field. The type
/// check runs first, matching the documented error precedence.
pub fn validate_upload(content_type: &str, size: u64) -> Result<(), UploadError> {
    if !ALLOWED_IMAGE_TYPES.contains(&content_type) {
        return Err(UploadError::InvalidType);
    }
    if size > MAX_UPLOAD_BYTES {
        return Err(UploadError::TooLarge);
    }
    Ok(())
}

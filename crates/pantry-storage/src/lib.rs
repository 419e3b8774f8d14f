//! Pantry Storage — pure rules for the external object-storage service.
//!
//! This crate holds no I/O: the URI translator maps `gs://` references
//! to public download URLs, and the upload module defines the
//! pre-flight validation rules (type allow-list, size ceiling).

pub mod translate;
pub mod upload;

pub use translate::translate_storage_uri;
pub use upload::{ALLOWED_IMAGE_TYPES, MAX_UPLOAD_BYTES, UploadError, validate_upload};

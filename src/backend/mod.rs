//! Client side of the dataset-preparation backend.
//!
//! [`DatasetBackend`] is the seam the workflow talks through; [`HttpBackend`]
//! is the real implementation. Every call checks the response status before
//! parsing the body.

mod client;
mod error;
mod multipart;
mod types;

use std::io::Write;
use std::path::{Component, Path};

pub use client::HttpBackend;
pub use error::BackendError;
pub use types::{
    BinaryGenerate, DetailsRequest, DetailsResponse, FileUpload, GenerateRequest,
    GenerateResponse, HealthSnapshot, StandardGenerate, UploadResponse,
};

/// The operations the backend exposes.
pub trait DatasetBackend: Send + Sync {
    /// `POST /common/uploadfile/` with the CSV as multipart field `file`.
    fn upload_file(&self, upload: &FileUpload) -> Result<UploadResponse, BackendError>;
    /// `GET /health`.
    fn health(&self) -> Result<HealthSnapshot, BackendError>;
    /// `POST /common/details` with form fields.
    fn set_details(&self, request: &DetailsRequest) -> Result<DetailsResponse, BackendError>;
    /// `POST` to the generate endpoint matching the request variant.
    fn generate_files(&self, request: &GenerateRequest) -> Result<GenerateResponse, BackendError>;
    /// `GET /classification/download/{filename}`, streamed into `sink`.
    ///
    /// Returns the number of bytes written.
    fn download_file(&self, filename: &str, sink: &mut dyn Write) -> Result<u64, BackendError>;
}

/// Reject names that could escape a directory or a URL path segment.
///
/// A name is accepted only when it is a single plain path component on every
/// platform, so drive prefixes such as `C:name.csv` are refused as well.
pub fn validate_filename(filename: &str) -> Result<(), BackendError> {
    let mut components = Path::new(filename).components();
    let single_normal = matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    );
    let invalid = !single_normal || filename.contains(['/', '\\', ':', '\0']);
    if invalid {
        return Err(BackendError::InvalidFilename(filename.to_string()));
    }
    Ok(())
}

//! The backend-facing half of each workflow step.
//!
//! These run on worker threads; the controller applies their results to
//! [`WorkflowState`](super::WorkflowState) on the UI thread.

use std::path::Path;

use tracing::info;

use crate::backend::{
    DatasetBackend, DetailsRequest, DetailsResponse, FileUpload, GenerateRequest, HealthSnapshot,
    UploadResponse,
};

use super::{GeneratedFiles, SelectedFile, WorkflowError};

/// A file the backend accepted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UploadOutcome {
    pub file: SelectedFile,
    pub response: UploadResponse,
}

/// Read `path` and send it as the upload.
pub fn upload(backend: &dyn DatasetBackend, path: &Path) -> Result<UploadOutcome, WorkflowError> {
    let (file, payload) = read_upload(path)?;
    info!(file = %file.name, bytes = payload.bytes.len(), "Uploading dataset");
    let response = backend.upload_file(&payload)?;
    info!(
        rows = response.rows(),
        columns = response.column_count(),
        encoding = response.encoding.as_deref().unwrap_or("unknown"),
        "Upload accepted"
    );
    Ok(UploadOutcome { file, response })
}

pub fn set_details(
    backend: &dyn DatasetBackend,
    request: &DetailsRequest,
) -> Result<DetailsResponse, WorkflowError> {
    info!(target_column = %request.target, test_size = request.test_size, "Setting details");
    let response = backend.set_details(request)?;
    info!(
        train = response.train_samples,
        test = response.test_samples,
        "Details accepted"
    );
    Ok(response)
}

pub fn generate(
    backend: &dyn DatasetBackend,
    request: &GenerateRequest,
) -> Result<GeneratedFiles, WorkflowError> {
    info!(binary = request.is_binary(), "Generating files");
    let response = backend.generate_files(request)?;
    info!(message = %response.message, files = response.files.len(), "Generation finished");
    Ok(response.into())
}

pub fn refresh_health(backend: &dyn DatasetBackend) -> Result<HealthSnapshot, WorkflowError> {
    Ok(backend.health()?)
}

fn read_upload(path: &Path) -> Result<(SelectedFile, FileUpload), WorkflowError> {
    let bytes = std::fs::read(path).map_err(|source| WorkflowError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;
    let name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "upload.csv".to_string());
    let file = SelectedFile {
        path: path.to_path_buf(),
        name: name.clone(),
    };
    Ok((
        file,
        FileUpload {
            file_name: name,
            bytes,
        },
    ))
}

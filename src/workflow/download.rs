//! Saving generated files into the download folder.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::backend::{DatasetBackend, validate_filename};

use super::WorkflowError;

const PARTIAL_PREFIX: &str = ".splitprep-";
const PARTIAL_SUFFIX: &str = ".part";

/// A file written to disk by [`download_to_dir`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SavedDownload {
    pub filename: String,
    pub path: PathBuf,
    pub bytes: u64,
}

/// Fetch `filename` and store it as `dir/filename`.
///
/// The body is streamed into a temporary file in `dir` that is renamed into
/// place on success and removed on any failure, so a partial download never
/// shows up under the real name.
pub fn download_to_dir(
    backend: &dyn DatasetBackend,
    filename: &str,
    dir: &Path,
) -> Result<SavedDownload, WorkflowError> {
    validate_filename(filename)?;
    std::fs::create_dir_all(dir).map_err(|source| WorkflowError::DownloadDir {
        path: dir.to_path_buf(),
        source,
    })?;
    let mut partial = tempfile::Builder::new()
        .prefix(PARTIAL_PREFIX)
        .suffix(PARTIAL_SUFFIX)
        .tempfile_in(dir)
        .map_err(|source| WorkflowError::DownloadDir {
            path: dir.to_path_buf(),
            source,
        })?;
    let bytes = backend.download_file(filename, partial.as_file_mut())?;
    let destination = dir.join(filename);
    partial
        .persist(&destination)
        .map_err(|err| WorkflowError::SaveFile {
            path: destination.clone(),
            source: err.error,
        })?;
    info!(file = filename, bytes, path = %destination.display(), "Download saved");
    Ok(SavedDownload {
        filename: filename.to_string(),
        path: destination,
        bytes,
    })
}

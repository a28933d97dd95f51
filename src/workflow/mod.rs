//! Dataset-preparation workflow: state, form intent, and the steps that talk
//! to the backend.

mod download;
mod error;
mod intent;
mod operations;
mod state;

pub use download::{SavedDownload, download_to_dir};
pub use error::WorkflowError;
pub use intent::{
    ConfigurationIntent, DEFAULT_TEST_FRACTION, MAX_TEST_FRACTION, MIN_TEST_FRACTION,
    TEST_FRACTION_STEP, snap_test_fraction,
};
pub use operations::{UploadOutcome, generate, refresh_health, set_details, upload};
pub use state::{GeneratedFiles, SelectedFile, Stage, WorkflowState};

#[cfg(test)]
pub(crate) use state::fixtures;

//! Owns the workflow state and bridges worker threads to the egui UI.

mod background_jobs;
mod download_folder;
mod jobs;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use rfd::FileDialog;
use tracing::warn;

use crate::backend::{BackendError, DatasetBackend, HttpBackend};
use crate::config::AppConfig;
use crate::egui_app::state::UiState;
use crate::egui_app::ui::style::StatusTone;
use crate::egui_app::view_model::{self, WorkflowView};
use crate::workflow::WorkflowState;

use jobs::ControllerJobs;

const HEALTH_ERROR: &str = "Failed to fetch health status. Please try again.";

/// Maintains app state and bridges the workflow to the egui UI.
pub struct EguiController {
    pub ui: UiState,
    workflow: WorkflowState,
    backend: Arc<dyn DatasetBackend>,
    config: AppConfig,
    jobs: ControllerJobs,
    /// Sequence number of the newest health reply applied so far.
    applied_health_seq: u64,
}

impl EguiController {
    pub fn new(backend: Arc<dyn DatasetBackend>, config: AppConfig) -> Self {
        let mut ui = UiState::default();
        match config.downloads.resolve_directory() {
            Ok(dir) => ui.downloads.directory = Some(dir),
            Err(err) => warn!("No download folder available: {err}"),
        }
        Self {
            ui,
            workflow: WorkflowState::new(),
            backend,
            config,
            jobs: ControllerJobs::new(),
            applied_health_seq: 0,
        }
    }

    /// Build a controller talking to the configured HTTP backend.
    pub fn from_config(config: AppConfig) -> Result<Self, BackendError> {
        let backend = HttpBackend::new(&config.backend)?;
        Ok(Self::new(Arc::new(backend), config))
    }

    /// Kick off the initial health fetch.
    pub fn start(&mut self) {
        self.refresh_health();
    }

    pub fn workflow(&self) -> &WorkflowState {
        &self.workflow
    }

    pub fn view(&self) -> WorkflowView {
        view_model::workflow_view(&self.workflow, &self.ui)
    }

    pub fn is_loading(&self) -> bool {
        self.ui.loading
    }

    /// True while a worker is running or results are waiting to be applied.
    pub fn has_pending_work(&self) -> bool {
        self.ui.loading
            || !self.ui.downloads.in_progress.is_empty()
            || self.jobs.has_pending_messages()
    }

    pub fn error_message(&self) -> Option<&str> {
        self.ui.error.as_deref()
    }

    pub fn dismiss_error(&mut self) {
        self.ui.error = None;
    }

    /// Pick a CSV with the native dialog and upload it.
    pub fn upload_via_dialog(&mut self) {
        let Some(path) = FileDialog::new()
            .add_filter("CSV", &["csv"])
            .set_title("Choose a dataset")
            .pick_file()
        else {
            return;
        };
        self.upload_file(path);
    }

    /// Upload a picked or dropped file.
    pub fn upload_file(&mut self, path: PathBuf) {
        if self.ui.loading {
            return;
        }
        self.begin_loading(format!("Uploading {}", display_name(&path)));
        self.jobs.begin_upload(Arc::clone(&self.backend), path);
    }

    /// Submit the configuration form's target and split settings.
    pub fn submit_details(&mut self) {
        if self.ui.loading {
            return;
        }
        let request = match self.ui.form.details_request() {
            Ok(request) => request,
            Err(err) => {
                self.show_error(err.to_string());
                return;
            }
        };
        self.begin_loading(format!("Setting target column {}", request.target));
        self.jobs.begin_set_details(Arc::clone(&self.backend), request);
    }

    pub fn generate_files(&mut self) {
        if self.ui.loading {
            return;
        }
        let request = match self.ui.form.generate_request() {
            Ok(request) => request,
            Err(err) => {
                self.show_error(err.to_string());
                return;
            }
        };
        self.begin_loading("Generating files");
        self.jobs.begin_generate(Arc::clone(&self.backend), request);
    }

    /// Save `filename` into the download folder.
    pub fn download(&mut self, filename: &str) {
        if self.ui.downloads.in_progress.contains(filename) {
            return;
        }
        let Some(directory) = self.ui.downloads.directory.clone() else {
            warn!(file = filename, "Download requested without a download folder");
            self.show_error(download_error(filename));
            return;
        };
        self.ui.downloads.in_progress.insert(filename.to_string());
        self.ui
            .status
            .set(format!("Downloading {filename}"), StatusTone::Busy);
        self.jobs.begin_download(
            Arc::clone(&self.backend),
            filename.to_string(),
            directory,
        );
    }

    pub fn refresh_health(&mut self) {
        self.jobs.begin_health_refresh(Arc::clone(&self.backend));
    }

    /// Put a column name into the target field.
    pub fn pick_target_column(&mut self, column: &str) {
        self.ui.form.target_column = column.to_string();
    }

    fn begin_loading(&mut self, status: impl Into<String>) {
        self.ui.error = None;
        self.ui.loading = true;
        self.ui.status.set(status, StatusTone::Busy);
    }

    fn show_error(&mut self, message: String) {
        self.ui.status.set(message.clone(), StatusTone::Error);
        self.ui.error = Some(message);
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

pub(crate) fn download_error(filename: &str) -> String {
    format!("Failed to download {filename}. Please try again.")
}

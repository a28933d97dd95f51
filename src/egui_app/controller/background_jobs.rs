use std::sync::mpsc::TryRecvError;

use tracing::{debug, warn};

use super::jobs::JobMessage;
use super::*;
use crate::backend::{DetailsResponse, HealthSnapshot};
use crate::workflow::{GeneratedFiles, SavedDownload, UploadOutcome, WorkflowError};

impl EguiController {
    /// Apply every result the workers have sent since the last frame.
    pub fn poll_background_jobs(&mut self) {
        loop {
            let message = match self.jobs.try_recv_message() {
                Ok(message) => message,
                Err(TryRecvError::Empty | TryRecvError::Disconnected) => break,
            };
            match message {
                JobMessage::Uploaded(result) => self.finish_upload(result),
                JobMessage::DetailsSet(result) => self.finish_details(result),
                JobMessage::FilesGenerated(result) => self.finish_generate(result),
                JobMessage::Downloaded { filename, result } => {
                    self.finish_download(filename, result)
                }
                JobMessage::HealthRefreshed { seq, result } => self.finish_health(seq, result),
            }
        }
    }

    fn finish_upload(&mut self, result: Result<UploadOutcome, WorkflowError>) {
        self.ui.loading = false;
        match result {
            Ok(outcome) => {
                let status = format!(
                    "Uploaded {} ({} rows, {} columns)",
                    outcome.file.name,
                    outcome.response.rows(),
                    outcome.response.column_count()
                );
                self.workflow = std::mem::take(&mut self.workflow)
                    .uploaded(outcome.file, outcome.response);
                self.ui.status.set(status, StatusTone::Info);
            }
            Err(err) => {
                warn!("Upload failed: {err}");
                self.show_error(format!("Failed to upload file. Please try again. {err}"));
            }
        }
    }

    fn finish_details(&mut self, result: Result<DetailsResponse, WorkflowError>) {
        self.ui.loading = false;
        match result {
            Ok(details) => {
                let status = format!(
                    "Split {} into {} train / {} test samples",
                    details.target_column, details.train_samples, details.test_samples
                );
                self.workflow = std::mem::take(&mut self.workflow).detailed(details);
                self.ui.status.set(status, StatusTone::Info);
            }
            Err(err) => {
                warn!("Setting details failed: {err}");
                self.show_error(err.to_string());
            }
        }
    }

    fn finish_generate(&mut self, result: Result<GeneratedFiles, WorkflowError>) {
        self.ui.loading = false;
        match result {
            Ok(generated) => {
                let status = if generated.files.is_empty() {
                    format!("{} (no files listed)", generated.message)
                } else {
                    format!("{}: {}", generated.message, generated.files.join(", "))
                };
                self.workflow = std::mem::take(&mut self.workflow).generated(generated);
                self.ui.status.set(status, StatusTone::Info);
            }
            Err(err) => {
                warn!("Generating files failed: {err}");
                self.show_error(format!("Failed to generate files. Please try again. {err}"));
            }
        }
    }

    fn finish_download(&mut self, filename: String, result: Result<SavedDownload, WorkflowError>) {
        self.ui.downloads.in_progress.remove(&filename);
        match result {
            Ok(saved) => {
                self.ui.status.set(
                    format!("Saved {} to {}", saved.filename, saved.path.display()),
                    StatusTone::Info,
                );
                self.ui.downloads.record_saved(saved);
            }
            Err(err) => {
                warn!(file = %filename, "Download failed: {err}");
                self.show_error(download_error(&filename));
            }
        }
    }

    /// Replies older than one already applied are dropped.
    fn finish_health(&mut self, seq: u64, result: Result<HealthSnapshot, WorkflowError>) {
        if seq <= self.applied_health_seq {
            debug!(seq, latest = self.applied_health_seq, "Dropping stale health reply");
            return;
        }
        self.applied_health_seq = seq;
        match result {
            Ok(snapshot) => {
                self.workflow = std::mem::take(&mut self.workflow).with_health(snapshot);
            }
            Err(err) => {
                warn!("Health refresh failed: {err}");
                if self.ui.error.is_none() {
                    self.ui.error = Some(HEALTH_ERROR.to_string());
                }
            }
        }
    }
}

//! Immutable workflow state advanced by named transitions.

use std::path::PathBuf;

use crate::backend::{DetailsResponse, GenerateResponse, HealthSnapshot, UploadResponse};

/// The CSV the user picked.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectedFile {
    pub path: PathBuf,
    pub name: String,
}

/// Outcome of a successful generate call.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GeneratedFiles {
    pub message: String,
    pub files: Vec<String>,
}

impl From<GenerateResponse> for GeneratedFiles {
    fn from(response: GenerateResponse) -> Self {
        Self {
            message: response.message,
            files: response.files,
        }
    }
}

/// How far the workflow has progressed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Stage {
    Empty,
    Uploaded,
    Detailed,
    Generated,
}

/// Everything the workflow has learned from the backend so far.
///
/// Transitions consume the state and return the next one; each replaces only
/// its own result, so a later step never erases an earlier one.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct WorkflowState {
    selected_file: Option<SelectedFile>,
    upload: Option<UploadResponse>,
    details: Option<DetailsResponse>,
    generated: Option<GeneratedFiles>,
    health: Option<HealthSnapshot>,
}

impl WorkflowState {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn uploaded(self, file: SelectedFile, response: UploadResponse) -> Self {
        Self {
            selected_file: Some(file),
            upload: Some(response),
            ..self
        }
    }

    #[must_use]
    pub fn detailed(self, response: DetailsResponse) -> Self {
        Self {
            details: Some(response),
            ..self
        }
    }

    #[must_use]
    pub fn generated(self, files: GeneratedFiles) -> Self {
        Self {
            generated: Some(files),
            ..self
        }
    }

    #[must_use]
    pub fn with_health(self, snapshot: HealthSnapshot) -> Self {
        Self {
            health: Some(snapshot),
            ..self
        }
    }

    pub fn stage(&self) -> Stage {
        if self.generated.is_some() {
            Stage::Generated
        } else if self.details.is_some() {
            Stage::Detailed
        } else if self.upload.is_some() {
            Stage::Uploaded
        } else {
            Stage::Empty
        }
    }

    pub fn selected_file(&self) -> Option<&SelectedFile> {
        self.selected_file.as_ref()
    }

    pub fn upload(&self) -> Option<&UploadResponse> {
        self.upload.as_ref()
    }

    pub fn details(&self) -> Option<&DetailsResponse> {
        self.details.as_ref()
    }

    pub fn generated_files(&self) -> Option<&GeneratedFiles> {
        self.generated.as_ref()
    }

    pub fn health(&self) -> Option<&HealthSnapshot> {
        self.health.as_ref()
    }

    /// Filenames offered for download; empty until generation lists some.
    pub fn downloadable_files(&self) -> &[String] {
        self.generated
            .as_ref()
            .map(|generated| generated.files.as_slice())
            .unwrap_or(&[])
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use std::collections::BTreeMap;

    use super::*;

    pub(crate) fn selected(name: &str) -> SelectedFile {
        SelectedFile {
            path: PathBuf::from(format!("/data/{name}")),
            name: name.to_string(),
        }
    }

    pub(crate) fn upload_response(columns: &[&str], rows: u64) -> UploadResponse {
        UploadResponse {
            info: "File uploaded successfully".into(),
            encoding: Some("utf-8".into()),
            columns: columns.iter().map(|c| c.to_string()).collect(),
            shape: [rows, columns.len() as u64],
        }
    }

    pub(crate) fn details_response(train: u64, test: u64) -> DetailsResponse {
        DetailsResponse {
            target_column: "label".into(),
            target_data: BTreeMap::from([("yes".to_string(), 6), ("no".to_string(), 4)]),
            total_samples: train + test,
            train_samples: train,
            test_samples: test,
            note: "+-1 sample due to rounding".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use super::*;

    #[test]
    fn stages_advance_with_results() {
        let state = WorkflowState::new();
        assert_eq!(state.stage(), Stage::Empty);
        let state = state.uploaded(selected("a.csv"), upload_response(&["x", "label"], 10));
        assert_eq!(state.stage(), Stage::Uploaded);
        let state = state.detailed(details_response(8, 2));
        assert_eq!(state.stage(), Stage::Detailed);
        let state = state.generated(GeneratedFiles::default());
        assert_eq!(state.stage(), Stage::Generated);
    }

    #[test]
    fn reupload_keeps_later_results() {
        let state = WorkflowState::new()
            .uploaded(selected("a.csv"), upload_response(&["x"], 10))
            .detailed(details_response(8, 2))
            .uploaded(selected("b.csv"), upload_response(&["y"], 3));
        assert_eq!(state.selected_file().unwrap().name, "b.csv");
        assert_eq!(state.details().unwrap().train_samples, 8);
        assert_eq!(state.stage(), Stage::Detailed);
    }

    #[test]
    fn health_does_not_change_stage() {
        let state = WorkflowState::new().with_health(HealthSnapshot::default());
        assert_eq!(state.stage(), Stage::Empty);
        assert!(state.health().is_some());
    }

    #[test]
    fn downloadable_files_follow_generation() {
        let state = WorkflowState::new();
        assert!(state.downloadable_files().is_empty());
        let state = state.generated(GeneratedFiles {
            message: "Files generated successfully".into(),
            files: vec!["train.csv".into(), "test.csv".into()],
        });
        assert_eq!(state.downloadable_files(), ["train.csv", "test.csv"]);
    }
}

//! Helpers to convert workflow data into egui-facing view structs.
//!
//! A panel's view is `Some` only when the result it depends on exists, so the
//! renderer never has to reason about stages itself.

use std::path::PathBuf;

use crate::backend::{DetailsResponse, HealthSnapshot, UploadResponse};
use crate::egui_app::state::UiState;
use crate::workflow::{SelectedFile, WorkflowState};

/// Everything the window renders for one frame.
#[derive(Clone, Debug, PartialEq)]
pub struct WorkflowView {
    pub error: Option<String>,
    pub loading: bool,
    pub upload: Option<UploadSummary>,
    pub health: Option<Vec<HealthRow>>,
    pub configuration: Option<ConfigurationView>,
    pub generate: Option<GenerateView>,
    pub downloads: Option<DownloadView>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UploadSummary {
    pub file_name: String,
    pub info: String,
    pub encoding: String,
    pub columns: String,
    pub shape: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HealthRow {
    pub label: &'static str,
    pub value: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConfigurationView {
    pub columns: Vec<String>,
    /// Set when the typed target is not one of the uploaded columns.
    pub unknown_target: bool,
    pub test_size_label: String,
    pub submit_label: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenerateView {
    pub target_column: String,
    pub train_samples: u64,
    pub test_samples: u64,
    pub total_samples: u64,
    pub note: String,
    pub value_counts: Vec<(String, u64)>,
    pub submit_label: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DownloadView {
    pub folder: Option<PathBuf>,
    pub rows: Vec<DownloadRow>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DownloadRow {
    pub filename: String,
    pub in_progress: bool,
    pub saved_to: Option<PathBuf>,
}

pub fn workflow_view(workflow: &WorkflowState, ui: &UiState) -> WorkflowView {
    WorkflowView {
        error: ui.error.clone(),
        loading: ui.loading,
        upload: workflow
            .upload()
            .map(|upload| upload_summary(upload, workflow.selected_file())),
        health: workflow.health().map(health_rows),
        configuration: workflow.upload().map(|upload| configuration_view(upload, ui)),
        generate: workflow
            .details()
            .map(|details| generate_view(details, ui.loading)),
        downloads: download_view(workflow, ui),
    }
}

pub fn upload_summary(upload: &UploadResponse, file: Option<&SelectedFile>) -> UploadSummary {
    UploadSummary {
        file_name: file.map(|file| file.name.clone()).unwrap_or_default(),
        info: upload.info.clone(),
        encoding: upload
            .encoding
            .clone()
            .unwrap_or_else(|| "unknown".to_string()),
        columns: upload.columns.join(", "),
        shape: format!("{} rows × {} columns", upload.rows(), upload.column_count()),
    }
}

pub fn health_rows(health: &HealthSnapshot) -> Vec<HealthRow> {
    vec![
        HealthRow {
            label: "Uploaded DataFrame",
            value: yes_no(health.uploaded_df).to_string(),
        },
        HealthRow {
            label: "Target Column",
            value: health
                .target_column
                .clone()
                .unwrap_or_else(|| NOT_SET.to_string()),
        },
        HealthRow {
            label: "Test Size",
            value: optional_number(health.test_size),
        },
        HealthRow {
            label: "Public Leaderboard",
            value: optional_number(health.public_leaderboard),
        },
    ]
}

pub fn configuration_view(upload: &UploadResponse, ui: &UiState) -> ConfigurationView {
    let target = ui.form.target_column.trim();
    ConfigurationView {
        columns: upload.columns.clone(),
        unknown_target: !target.is_empty() && !ui.form.target_among(&upload.columns),
        test_size_label: percent_label(ui.form.test_fraction),
        submit_label: if ui.loading {
            "Processing..."
        } else {
            "Set Details"
        },
    }
}

pub fn generate_view(details: &DetailsResponse, loading: bool) -> GenerateView {
    GenerateView {
        target_column: details.target_column.clone(),
        train_samples: details.train_samples,
        test_samples: details.test_samples,
        total_samples: details.total_samples,
        note: details.note.clone(),
        value_counts: details
            .value_counts_by_frequency()
            .into_iter()
            .map(|(value, count)| (value.to_string(), count))
            .collect(),
        submit_label: if loading {
            "Generating..."
        } else {
            "Generate Files"
        },
    }
}

/// Download rows, or `None` while there is nothing to download.
pub fn download_view(workflow: &WorkflowState, ui: &UiState) -> Option<DownloadView> {
    let files = workflow.downloadable_files();
    if files.is_empty() {
        return None;
    }
    Some(DownloadView {
        folder: ui.downloads.directory.clone(),
        rows: files
            .iter()
            .map(|filename| DownloadRow {
                filename: filename.clone(),
                in_progress: ui.downloads.in_progress.contains(filename),
                saved_to: ui
                    .downloads
                    .saved_for(filename)
                    .map(|saved| saved.path.clone()),
            })
            .collect(),
    })
}

/// `0.2` → `Test Size: 20%`.
pub fn percent_label(fraction: f64) -> String {
    format!("Test Size: {:.0}%", fraction * 100.0)
}

const NOT_SET: &str = "Not set";

fn yes_no(value: bool) -> &'static str {
    if value { "Yes" } else { "No" }
}

fn optional_number(value: Option<f64>) -> String {
    value
        .map(|value| value.to_string())
        .unwrap_or_else(|| NOT_SET.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflow::{GeneratedFiles, fixtures};

    #[test]
    fn configuration_requires_upload() {
        let ui = UiState::default();
        let state = WorkflowState::new().with_health(HealthSnapshot::default());
        let view = workflow_view(&state, &ui);
        assert!(view.configuration.is_none());
        assert!(view.generate.is_none());
        assert!(view.downloads.is_none());
        assert!(view.health.is_some());

        let state = state.uploaded(
            fixtures::selected("a.csv"),
            fixtures::upload_response(&["id", "label"], 4),
        );
        let view = workflow_view(&state, &ui);
        assert!(view.configuration.is_some());
        assert!(view.generate.is_none());
    }

    #[test]
    fn generate_shows_server_counts() {
        let state = WorkflowState::new().detailed(fixtures::details_response(7, 3));
        let view = workflow_view(&state, &UiState::default());
        let generate = view.generate.unwrap();
        assert_eq!(generate.train_samples, 7);
        assert_eq!(generate.test_samples, 3);
        assert_eq!(generate.total_samples, 10);
        assert_eq!(
            generate.value_counts,
            vec![("yes".to_string(), 6), ("no".to_string(), 4)]
        );
        assert_eq!(generate.submit_label, "Generate Files");
    }

    #[test]
    fn empty_file_list_hides_downloads() {
        let ui = UiState::default();
        let state = WorkflowState::new().generated(GeneratedFiles {
            message: "done".into(),
            files: Vec::new(),
        });
        assert!(download_view(&state, &ui).is_none());
        let state = state.generated(GeneratedFiles {
            message: "done".into(),
            files: vec!["train.csv".into()],
        });
        let view = download_view(&state, &ui).unwrap();
        assert_eq!(view.rows.len(), 1);
        assert!(!view.rows[0].in_progress);
    }

    #[test]
    fn health_rows_show_not_set() {
        let rows = health_rows(&HealthSnapshot {
            uploaded_df: true,
            target_column: None,
            test_size: Some(0.2),
            public_leaderboard: None,
        });
        let values: Vec<&str> = rows.iter().map(|row| row.value.as_str()).collect();
        assert_eq!(values, vec!["Yes", "Not set", "0.2", "Not set"]);
    }

    #[test]
    fn unknown_target_is_flagged() {
        let upload = fixtures::upload_response(&["id", "label"], 4);
        let mut ui = UiState::default();
        assert!(!configuration_view(&upload, &ui).unknown_target);
        ui.form.target_column = "lable".into();
        assert!(configuration_view(&upload, &ui).unknown_target);
        ui.form.target_column = "label".into();
        assert!(!configuration_view(&upload, &ui).unknown_target);
        ui.loading = true;
        assert_eq!(configuration_view(&upload, &ui).submit_label, "Processing...");
    }

    #[test]
    fn percent_label_rounds() {
        assert_eq!(percent_label(0.2), "Test Size: 20%");
        assert_eq!(percent_label(0.30000000000000004), "Test Size: 30%");
    }
}

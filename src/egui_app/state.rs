//! Shared state types for the egui UI.

use std::collections::BTreeSet;
use std::path::PathBuf;

use egui::Color32;

use crate::egui_app::ui::style;
use crate::workflow::{ConfigurationIntent, SavedDownload};

/// Top-level UI model consumed by the egui renderer.
#[derive(Clone, Debug)]
pub struct UiState {
    pub status: StatusBarState,
    /// Values typed into the configuration panel.
    pub form: ConfigurationIntent,
    /// Message shown in the dismissible error banner.
    pub error: Option<String>,
    /// Set while an upload, details, or generate request is in flight.
    pub loading: bool,
    pub downloads: DownloadPanelState,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            status: StatusBarState::idle(),
            form: ConfigurationIntent::default(),
            error: None,
            loading: false,
            downloads: DownloadPanelState::default(),
        }
    }
}

/// Download folder and transfer bookkeeping.
#[derive(Clone, Debug, Default)]
pub struct DownloadPanelState {
    pub directory: Option<PathBuf>,
    pub in_progress: BTreeSet<String>,
    /// Most recent save per filename, newest last.
    pub saved: Vec<SavedDownload>,
}

impl DownloadPanelState {
    pub fn record_saved(&mut self, saved: SavedDownload) {
        self.saved.retain(|entry| entry.filename != saved.filename);
        self.saved.push(saved);
    }

    pub fn saved_for(&self, filename: &str) -> Option<&SavedDownload> {
        self.saved.iter().find(|entry| entry.filename == filename)
    }
}

/// Status badge + text shown in the footer.
#[derive(Clone, Debug, PartialEq)]
pub struct StatusBarState {
    pub text: String,
    pub badge_label: String,
    pub badge_color: Color32,
}

impl StatusBarState {
    pub fn idle() -> Self {
        Self {
            text: "Upload a CSV file to get started".into(),
            badge_label: "Idle".into(),
            badge_color: style::status_badge_color(style::StatusTone::Idle),
        }
    }

    pub fn set(&mut self, text: impl Into<String>, tone: style::StatusTone) {
        self.text = text.into();
        self.badge_label = match tone {
            style::StatusTone::Idle => "Idle",
            style::StatusTone::Busy => "Working",
            style::StatusTone::Info => "Ready",
            style::StatusTone::Error => "Error",
        }
        .into();
        self.badge_color = style::status_badge_color(tone);
    }
}

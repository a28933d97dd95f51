use std::path::PathBuf;

use rfd::FileDialog;
use tracing::{info, warn};

use super::*;
use crate::config;

impl EguiController {
    /// Pick a new download folder with the native dialog.
    pub fn choose_download_folder(&mut self) {
        let mut dialog = FileDialog::new().set_title("Choose download folder");
        if let Some(current) = self.ui.downloads.directory.as_deref() {
            dialog = dialog.set_directory(current);
        }
        if let Some(dir) = dialog.pick_folder() {
            self.set_download_folder(dir);
        }
    }

    /// Use `dir` for future downloads and remember it in the config file.
    pub fn set_download_folder(&mut self, dir: PathBuf) {
        info!(path = %dir.display(), "Download folder changed");
        self.config.downloads.directory = Some(dir.clone());
        self.ui.downloads.directory = Some(dir);
        match config::save(&self.config) {
            Ok(()) => self
                .ui
                .status
                .set("Download folder saved", StatusTone::Info),
            Err(err) => {
                warn!("Failed to persist download folder: {err}");
                self.show_error(format!("Failed to save settings: {err}"));
            }
        }
    }

    /// Reveal the download folder in the system file manager.
    pub fn open_download_folder(&mut self) {
        let Some(dir) = self.ui.downloads.directory.clone() else {
            return;
        };
        if let Err(err) = std::fs::create_dir_all(&dir) {
            self.show_error(format!("Failed to open {}: {err}", dir.display()));
            return;
        }
        if let Err(err) = open::that(&dir) {
            warn!(path = %dir.display(), "Failed to open download folder: {err}");
            self.show_error(format!("Failed to open {}: {err}", dir.display()));
        }
    }
}

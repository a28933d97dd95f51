//! Library exports for the splitprep client and its integration tests.
/// Application directory resolution.
pub mod app_dirs;
/// Typed client for the dataset-preparation backend.
pub mod backend;
/// Persisted user settings.
pub mod config;
/// Shared egui UI modules.
pub mod egui_app;
pub(crate) mod http_client;
/// Tracing setup and log file rotation.
pub mod logging;
/// Upload, configure, generate and download steps.
pub mod workflow;

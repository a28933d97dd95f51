//! The configuration form's values and how they become requests.

use crate::backend::{BinaryGenerate, DetailsRequest, GenerateRequest, StandardGenerate};

use super::WorkflowError;

pub const MIN_TEST_FRACTION: f64 = 0.1;
pub const MAX_TEST_FRACTION: f64 = 0.5;
pub const TEST_FRACTION_STEP: f64 = 0.1;
pub const DEFAULT_TEST_FRACTION: f64 = 0.2;

/// What the user has typed or toggled in the configuration panel.
#[derive(Clone, Debug, PartialEq)]
pub struct ConfigurationIntent {
    pub target_column: String,
    pub test_fraction: f64,
    pub public_leaderboard_enabled: bool,
    pub public_leaderboard: f64,
    pub binary: bool,
    pub positive_label: String,
    pub negative_label: String,
    /// Empty means "no replacement".
    pub replace_label: String,
}

impl Default for ConfigurationIntent {
    fn default() -> Self {
        Self {
            target_column: String::new(),
            test_fraction: DEFAULT_TEST_FRACTION,
            public_leaderboard_enabled: false,
            public_leaderboard: 0.0,
            binary: false,
            positive_label: String::new(),
            negative_label: String::new(),
            replace_label: String::new(),
        }
    }
}

impl ConfigurationIntent {
    /// Build the set-details request, rejecting an empty target.
    pub fn details_request(&self) -> Result<DetailsRequest, WorkflowError> {
        let target = self.target_column.trim();
        if target.is_empty() {
            return Err(WorkflowError::MissingTarget);
        }
        Ok(DetailsRequest {
            target: target.to_string(),
            test_size: snap_test_fraction(self.test_fraction),
            public_leaderboard: self.leaderboard_value()?,
        })
    }

    /// Build the generate request for the selected mode.
    pub fn generate_request(&self) -> Result<GenerateRequest, WorkflowError> {
        let public_leaderboard = self.leaderboard_value()?;
        if !self.binary {
            return Ok(GenerateRequest::Standard(StandardGenerate {
                public_leaderboard,
            }));
        }
        let positive = self.positive_label.trim();
        let negative = self.negative_label.trim();
        if positive.is_empty() || negative.is_empty() {
            return Err(WorkflowError::MissingBinaryLabels);
        }
        let replace = self.replace_label.trim();
        Ok(GenerateRequest::Binary(BinaryGenerate {
            positive_label: positive.to_string(),
            negative_label: negative.to_string(),
            replace_label: (!replace.is_empty()).then(|| replace.to_string()),
            public_leaderboard,
        }))
    }

    /// Whether the typed target matches one of the uploaded columns.
    pub fn target_among<S: AsRef<str>>(&self, columns: &[S]) -> bool {
        let target = self.target_column.trim();
        columns.iter().any(|column| column.as_ref() == target)
    }

    /// The leaderboard fraction to send; `0` while the option is off.
    fn leaderboard_value(&self) -> Result<f64, WorkflowError> {
        if !self.public_leaderboard_enabled {
            return Ok(0.0);
        }
        let value = self.public_leaderboard;
        if !value.is_finite() || !(0.0..=1.0).contains(&value) {
            return Err(WorkflowError::LeaderboardOutOfRange(value));
        }
        Ok(value)
    }
}

/// Clamp to the slider range and snap to its 0.1 grid.
pub fn snap_test_fraction(value: f64) -> f64 {
    if !value.is_finite() {
        return DEFAULT_TEST_FRACTION;
    }
    let clamped = value.clamp(MIN_TEST_FRACTION, MAX_TEST_FRACTION);
    (clamped / TEST_FRACTION_STEP).round() / 10.0
}

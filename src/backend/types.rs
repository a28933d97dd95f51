//! Request and response shapes, one per endpoint.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A CSV read into memory, ready to be sent as the `file` multipart field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileUpload {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// Body of `POST /common/uploadfile/`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct UploadResponse {
    #[serde(default)]
    pub info: String,
    /// Detected encoding; the backend reports `null` when detection fails.
    #[serde(default)]
    pub encoding: Option<String>,
    pub columns: Vec<String>,
    /// `[rows, columns]`.
    pub shape: [u64; 2],
}

impl UploadResponse {
    pub fn rows(&self) -> u64 {
        self.shape[0]
    }

    pub fn column_count(&self) -> u64 {
        self.shape[1]
    }
}

/// Body of `GET /health`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct HealthSnapshot {
    #[serde(default)]
    pub uploaded_df: bool,
    #[serde(default)]
    pub target_column: Option<String>,
    #[serde(default)]
    pub test_size: Option<f64>,
    #[serde(default)]
    pub public_leaderboard: Option<f64>,
}

/// Form fields for `POST /common/details`.
#[derive(Clone, Debug, PartialEq)]
pub struct DetailsRequest {
    pub target: String,
    pub test_size: f64,
    pub public_leaderboard: f64,
}

impl DetailsRequest {
    /// Field names and values in the order the backend declares them.
    pub fn form_fields(&self) -> [(&'static str, String); 3] {
        [
            ("target", self.target.clone()),
            ("test_size_value", self.test_size.to_string()),
            ("public_leaderboard_value", self.public_leaderboard.to_string()),
        ]
    }
}

/// Body of `POST /common/details`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct DetailsResponse {
    pub target_column: String,
    /// Value counts of the target column keyed by the value's string form.
    #[serde(default)]
    pub target_data: BTreeMap<String, u64>,
    pub total_samples: u64,
    pub train_samples: u64,
    pub test_samples: u64,
    #[serde(default)]
    pub note: String,
}

impl DetailsResponse {
    /// Value counts ordered by descending count, ties broken by value.
    pub fn value_counts_by_frequency(&self) -> Vec<(&str, u64)> {
        let mut counts: Vec<(&str, u64)> = self
            .target_data
            .iter()
            .map(|(value, count)| (value.as_str(), *count))
            .collect();
        counts.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        counts
    }
}

/// JSON body for the non-binary generate endpoint.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct StandardGenerate {
    pub public_leaderboard: f64,
}

/// JSON body for the binary-classification generate endpoint.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BinaryGenerate {
    pub positive_label: String,
    pub negative_label: String,
    /// Sent as `null` when absent.
    pub replace_label: Option<String>,
    pub public_leaderboard: f64,
}

/// A split-and-generate request; the variant picks the endpoint.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum GenerateRequest {
    Standard(StandardGenerate),
    Binary(BinaryGenerate),
}

impl GenerateRequest {
    /// Path segments below the base URL.
    pub fn endpoint(&self) -> [&'static str; 2] {
        match self {
            Self::Standard(_) => ["classification", "split_and_generate"],
            Self::Binary(_) => ["classification", "split_and_generate_classification"],
        }
    }

    pub fn is_binary(&self) -> bool {
        matches!(self, Self::Binary(_))
    }
}

/// Body of either generate endpoint.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct GenerateResponse {
    #[serde(default)]
    pub message: String,
    /// Generated filenames; empty when the backend does not list them.
    #[serde(default)]
    pub files: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn upload_response_accepts_null_encoding() {
        let parsed: UploadResponse = serde_json::from_str(
            r#"{"status_code":200,"info":"File a.csv uploaded successfully","columns":["x","y"],"shape":[120,2],"encoding":null}"#,
        )
        .unwrap();
        assert_eq!(parsed.encoding, None);
        assert_eq!(parsed.rows(), 120);
        assert_eq!(parsed.column_count(), 2);
    }

    #[test]
    fn health_defaults_when_fields_missing() {
        let parsed: HealthSnapshot = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed, HealthSnapshot::default());
    }

    #[test]
    fn details_form_fields_use_backend_names() {
        let request = DetailsRequest {
            target: "label".into(),
            test_size: 0.2,
            public_leaderboard: 0.0,
        };
        let fields = request.form_fields();
        assert_eq!(fields[0], ("target", "label".to_string()));
        assert_eq!(fields[1], ("test_size_value", "0.2".to_string()));
        assert_eq!(fields[2], ("public_leaderboard_value", "0".to_string()));
    }

    #[test]
    fn value_counts_sorted_by_frequency() {
        let parsed: DetailsResponse = serde_json::from_value(json!({
            "target_column": "label",
            "target_data": {"cat": 3, "dog": 10, "ant": 3},
            "total_samples": 16,
            "train_samples": 12,
            "test_samples": 3,
            "note": "+-1 sample due to rounding"
        }))
        .unwrap();
        assert_eq!(
            parsed.value_counts_by_frequency(),
            vec![("dog", 10), ("ant", 3), ("cat", 3)]
        );
    }

    #[test]
    fn standard_request_only_carries_leaderboard() {
        let request = GenerateRequest::Standard(StandardGenerate {
            public_leaderboard: 0.3,
        });
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({"public_leaderboard": 0.3})
        );
        assert_eq!(request.endpoint()[1], "split_and_generate");
    }

    #[test]
    fn binary_request_sends_null_replace_label() {
        let request = GenerateRequest::Binary(BinaryGenerate {
            positive_label: "yes".into(),
            negative_label: "no".into(),
            replace_label: None,
            public_leaderboard: 0.5,
        });
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "positive_label": "yes",
                "negative_label": "no",
                "replace_label": null,
                "public_leaderboard": 0.5
            })
        );
        assert!(request.is_binary());
    }

    #[test]
    fn generate_response_without_files_is_empty() {
        let parsed: GenerateResponse =
            serde_json::from_str(r#"{"message":"Files generated successfully"}"#).unwrap();
        assert!(parsed.files.is_empty());
        assert_eq!(parsed.message, "Files generated successfully");
    }
}

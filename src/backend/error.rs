use thiserror::Error;

/// Failures talking to the dataset backend.
#[derive(Debug, Error)]
pub enum BackendError {
    #[error("Invalid backend URL '{0}'")]
    InvalidBaseUrl(String),
    #[error("Invalid file name '{0}'")]
    InvalidFilename(String),
    #[error("HTTP error: {0}")]
    Transport(String),
    #[error("Server returned {code}: {detail}")]
    Status { code: u16, detail: String },
    #[error("Unexpected response: {0}")]
    Json(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl BackendError {
    /// Build a status error, pulling FastAPI's `detail` out of the body when present.
    pub fn from_status(code: u16, body: &str) -> Self {
        Self::Status {
            code,
            detail: extract_detail(body),
        }
    }
}

fn extract_detail(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return "empty response body".to_string();
    }
    let Ok(value) = serde_json::from_str::<serde_json::Value>(trimmed) else {
        return trimmed.to_string();
    };
    match value.get("detail") {
        Some(serde_json::Value::String(detail)) => detail.clone(),
        Some(serde_json::Value::Array(items)) => items
            .iter()
            .map(|item| {
                item.get("msg")
                    .and_then(|msg| msg.as_str())
                    .map(str::to_string)
                    .unwrap_or_else(|| item.to_string())
            })
            .collect::<Vec<_>>()
            .join("; "),
        Some(other) => other.to_string(),
        None => trimmed.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pulls_string_detail() {
        let err = BackendError::from_status(400, r#"{"detail":"No file uploaded yet"}"#);
        assert_eq!(err.to_string(), "Server returned 400: No file uploaded yet");
    }

    #[test]
    fn joins_validation_messages() {
        let body = r#"{"detail":[{"loc":["body","target"],"msg":"field required"},{"msg":"value is not a valid float"}]}"#;
        match BackendError::from_status(422, body) {
            BackendError::Status { code, detail } => {
                assert_eq!(code, 422);
                assert_eq!(detail, "field required; value is not a valid float");
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn falls_back_to_raw_body() {
        let err = BackendError::from_status(502, "Bad Gateway");
        assert!(err.to_string().ends_with("Bad Gateway"));
        assert!(matches!(err, BackendError::Status { code: 502, .. }));
    }
}

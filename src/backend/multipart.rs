//! Minimal `multipart/form-data` encoder for file fields.

const CRLF: &[u8] = b"\r\n";

/// An in-memory multipart body.
pub(crate) struct MultipartBody {
    boundary: String,
    body: Vec<u8>,
}

impl MultipartBody {
    pub(crate) fn new() -> Self {
        Self::with_boundary(format!("splitprep-{}", uuid::Uuid::new_v4().simple()))
    }

    pub(crate) fn with_boundary(boundary: String) -> Self {
        Self {
            boundary,
            body: Vec::new(),
        }
    }

    /// Value for the request's `Content-Type` header.
    pub(crate) fn content_type(&self) -> String {
        format!("multipart/form-data; boundary={}", self.boundary)
    }

    /// Append a file part.
    pub(crate) fn add_file(
        &mut self,
        field: &str,
        file_name: &str,
        content_type: &str,
        bytes: &[u8],
    ) -> &mut Self {
        self.open_part();
        let disposition = format!(
            "Content-Disposition: form-data; name=\"{}\"; filename=\"{}\"",
            escape_quoted(field),
            escape_quoted(file_name)
        );
        self.body.extend_from_slice(disposition.as_bytes());
        self.body.extend_from_slice(CRLF);
        self.body
            .extend_from_slice(format!("Content-Type: {content_type}").as_bytes());
        self.body.extend_from_slice(CRLF);
        self.body.extend_from_slice(CRLF);
        self.body.extend_from_slice(bytes);
        self.body.extend_from_slice(CRLF);
        self
    }

    /// Close the body and return its bytes.
    pub(crate) fn finish(mut self) -> Vec<u8> {
        self.body.extend_from_slice(b"--");
        self.body.extend_from_slice(self.boundary.as_bytes());
        self.body.extend_from_slice(b"--");
        self.body.extend_from_slice(CRLF);
        self.body
    }

    fn open_part(&mut self) {
        self.body.extend_from_slice(b"--");
        self.body.extend_from_slice(self.boundary.as_bytes());
        self.body.extend_from_slice(CRLF);
    }
}

// Browsers percent-encode quotes and drop line breaks in header parameters.
fn escape_quoted(value: &str) -> String {
    value
        .chars()
        .filter(|ch| *ch != '\r' && *ch != '\n')
        .map(|ch| match ch {
            '"' => "%22".to_string(),
            other => other.to_string(),
        })
        .collect()
}

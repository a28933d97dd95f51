//! Blocking HTTP implementation of [`DatasetBackend`].

use std::io::Write;

use serde::de::DeserializeOwned;
use url::Url;

use super::multipart::MultipartBody;
use super::{
    BackendError, DatasetBackend, DetailsRequest, DetailsResponse, FileUpload, GenerateRequest,
    GenerateResponse, HealthSnapshot, UploadResponse, validate_filename,
};
use crate::config::BackendSettings;
use crate::http_client;

const CSV_CONTENT_TYPE: &str = "text/csv";

/// Talks to the dataset backend over HTTP with a shared `ureq` agent.
#[derive(Clone)]
pub struct HttpBackend {
    agent: ureq::Agent,
    base_url: Url,
    max_response_bytes: usize,
    max_download_bytes: usize,
}

impl HttpBackend {
    pub fn new(settings: &BackendSettings) -> Result<Self, BackendError> {
        Ok(Self {
            agent: http_client::agent(settings),
            base_url: parse_base_url(&settings.base_url)?,
            max_response_bytes: settings.max_response_bytes,
            max_download_bytes: settings.max_download_bytes,
        })
    }

    /// Join path segments onto the base URL, percent-encoding each one.
    pub fn endpoint(&self, segments: &[&str]) -> Result<Url, BackendError> {
        let mut url = self.base_url.clone();
        {
            let mut path = url
                .path_segments_mut()
                .map_err(|_| BackendError::InvalidBaseUrl(self.base_url.to_string()))?;
            path.pop_if_empty();
            path.extend(segments);
        }
        Ok(url)
    }

    fn expect_success(
        &self,
        result: Result<ureq::Response, ureq::Error>,
    ) -> Result<ureq::Response, BackendError> {
        match result {
            Ok(response) => Ok(response),
            Err(ureq::Error::Status(code, response)) => {
                let body = http_client::read_response_text(response, self.max_response_bytes)
                    .unwrap_or_else(|err| err.to_string());
                Err(BackendError::from_status(code, &body))
            }
            Err(ureq::Error::Transport(err)) => Err(BackendError::Transport(err.to_string())),
        }
    }

    fn read_json<T: DeserializeOwned>(&self, response: ureq::Response) -> Result<T, BackendError> {
        let body = http_client::read_response_text(response, self.max_response_bytes)?;
        parse_json_body(&body)
    }
}

impl DatasetBackend for HttpBackend {
    fn upload_file(&self, upload: &FileUpload) -> Result<UploadResponse, BackendError> {
        let url = self.endpoint(&["common", "uploadfile", ""])?;
        let mut body = MultipartBody::new();
        body.add_file("file", &upload.file_name, CSV_CONTENT_TYPE, &upload.bytes);
        let content_type = body.content_type();
        let result = self
            .agent
            .post(url.as_str())
            .set("Accept", "application/json")
            .set("Content-Type", &content_type)
            .send_bytes(&body.finish());
        let response = self.expect_success(result)?;
        self.read_json(response)
    }

    fn health(&self) -> Result<HealthSnapshot, BackendError> {
        let url = self.endpoint(&["health"])?;
        let result = self
            .agent
            .get(url.as_str())
            .set("Accept", "application/json")
            .call();
        let response = self.expect_success(result)?;
        self.read_json(response)
    }

    fn set_details(&self, request: &DetailsRequest) -> Result<DetailsResponse, BackendError> {
        let url = self.endpoint(&["common", "details"])?;
        let fields = request.form_fields();
        let pairs: Vec<(&str, &str)> = fields
            .iter()
            .map(|(name, value)| (*name, value.as_str()))
            .collect();
        let result = self
            .agent
            .post(url.as_str())
            .set("Accept", "application/json")
            .send_form(&pairs);
        let response = self.expect_success(result)?;
        self.read_json(response)
    }

    fn generate_files(&self, request: &GenerateRequest) -> Result<GenerateResponse, BackendError> {
        let url = self.endpoint(&request.endpoint())?;
        let result = self
            .agent
            .post(url.as_str())
            .set("Accept", "application/json")
            .send_json(request);
        let response = self.expect_success(result)?;
        self.read_json(response)
    }

    fn download_file(&self, filename: &str, sink: &mut dyn Write) -> Result<u64, BackendError> {
        validate_filename(filename)?;
        let url = self.endpoint(&["classification", "download", filename])?;
        let result = self.agent.get(url.as_str()).call();
        let response = self.expect_success(result)?;
        Ok(http_client::copy_response_to_writer(
            response,
            sink,
            self.max_download_bytes,
        )?)
    }
}

fn parse_base_url(raw: &str) -> Result<Url, BackendError> {
    let url = Url::parse(raw.trim()).map_err(|_| BackendError::InvalidBaseUrl(raw.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") || url.cannot_be_a_base() {
        return Err(BackendError::InvalidBaseUrl(raw.to_string()));
    }
    Ok(url)
}

fn parse_json_body<T: DeserializeOwned>(body: &str) -> Result<T, BackendError> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return Err(BackendError::Json("Empty response body".to_string()));
    }
    serde_json::from_str(trimmed).map_err(|err| BackendError::Json(format!("{err}: {trimmed}")))
}

use async_trait::async_trait;
use js_sys::{ArrayBuffer, Uint8Array};
use reqwest::multipart::{Form, Part};
use serde::de::DeserializeOwned;
use tracing::{debug, info};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

use crate::config::DashboardConfig;
use crate::error::DashboardError;
use crate::model::{EquipmentSummary, HistoryEntry};

// -- Upload payload --

enum FileSource {
    Bytes(Vec<u8>),
    Browser(web_sys::File),
}

/// A CSV chosen for upload. Browser files are read lazily when the request is built.
pub struct UploadFile {
    pub name: String,
    source: FileSource,
}

impl UploadFile {
    pub fn from_bytes(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            source: FileSource::Bytes(bytes),
        }
    }

    pub fn from_browser(file: web_sys::File) -> Self {
        Self {
            name: file.name(),
            source: FileSource::Browser(file),
        }
    }

    pub async fn read_bytes(self) -> Result<Vec<u8>, DashboardError> {
        match self.source {
            FileSource::Bytes(bytes) => Ok(bytes),
            FileSource::Browser(file) => {
                let array_buffer: ArrayBuffer = JsFuture::from(file.array_buffer())
                    .await
                    .map_err(|e| DashboardError::FileRead(format!("{:?}", e)))?
                    .dyn_into()
                    .map_err(|_| DashboardError::FileRead("not an ArrayBuffer".to_string()))?;
                Ok(Uint8Array::new(&array_buffer).to_vec())
            }
        }
    }
}

impl std::fmt::Debug for UploadFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UploadFile").field("name", &self.name).finish()
    }
}

// -- Summary service --

/// The two calls the dashboard makes against the summary service.
#[async_trait(?Send)]
pub trait DashboardApi {
    /// `POST /upload/` with the CSV in a multipart `file` field.
    async fn upload(&self, file: UploadFile) -> Result<EquipmentSummary, DashboardError>;

    /// `GET /history/`, newest first.
    async fn history(&self) -> Result<Vec<HistoryEntry>, DashboardError>;
}

/// [`DashboardApi`] over HTTP. No timeout is set on either request.
///
/// Clones share the same `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct HttpApi {
    client: reqwest::Client,
    api_base: String,
}

impl HttpApi {
    pub fn new(config: &DashboardConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_base: config.api_base.trim_end_matches('/').to_string(),
        }
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}/", self.api_base, path)
    }

    async fn read_body(response: reqwest::Response) -> Result<String, DashboardError> {
        let response = response.error_for_status()?;
        Ok(response.text().await?)
    }
}

#[async_trait(?Send)]
impl DashboardApi for HttpApi {
    async fn upload(&self, file: UploadFile) -> Result<EquipmentSummary, DashboardError> {
        let name = file.name.clone();
        let bytes = file.read_bytes().await?;
        debug!("Posting {} ({} bytes)", name, bytes.len());

        let form = Form::new().part("file", Part::bytes(bytes).file_name(name));
        let response = self
            .client
            .post(self.endpoint("upload"))
            .multipart(form)
            .send()
            .await?;

        decode(&Self::read_body(response).await?)
    }

    async fn history(&self) -> Result<Vec<HistoryEntry>, DashboardError> {
        let response = self.client.get(self.endpoint("history")).send().await?;
        let entries: Vec<HistoryEntry> = decode(&Self::read_body(response).await?)?;
        info!("Fetched {} history entries", entries.len());
        Ok(entries)
    }
}

/// Parse a response body, reporting shape mismatches as [`DashboardError::Decode`].
pub fn decode<T: DeserializeOwned>(body: &str) -> Result<T, DashboardError> {
    serde_json::from_str(body).map_err(|e| DashboardError::Decode(e.to_string()))
}

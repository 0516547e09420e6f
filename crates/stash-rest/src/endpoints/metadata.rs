//! Metadata tasks.

use reqwest::Method;
use serde_json::{json, Value};

use crate::{
    client_blocking::BlockingClient, error::Result, rest_http::RestHttp,
    rest_http_blocking::BlockingRestHttp, Client,
};

#[derive(Default)]
pub struct MetadataScanRequest {
    paths: Vec<String>,
}

impl MetadataScanRequest {
    /// Restrict the scan to these library paths; no paths means the whole library.
    pub fn paths<I, S>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: ToString,
    {
        self.paths = paths.into_iter().map(|p| p.to_string()).collect();
        self
    }
}

impl RestHttp for MetadataScanRequest {
    type ResponseData = Value;
    const METHOD: Method = Method::POST;

    fn to_path_and_data(&self) -> (String, Option<Value>) {
        let body = if self.paths.is_empty() {
            json!({})
        } else {
            json!({"paths": self.paths})
        };
        ("/metadata/scan".to_string(), Some(body))
    }

    fn parse(self, value: Value) -> Result<Self::ResponseData> {
        Ok(value)
    }
}

/// Start a scan; the server answers with a handle to the queued job.
pub fn metadata_scan() -> MetadataScanRequest {
    MetadataScanRequest::default()
}

impl Client {
    pub async fn metadata_scan<I, S>(&self, paths: I) -> Result<Value>
    where
        I: IntoIterator<Item = S>,
        S: ToString,
    {
        metadata_scan().paths(paths).send(self).await
    }
}

impl BlockingClient {
    pub fn metadata_scan<I, S>(&self, paths: I) -> Result<Value>
    where
        I: IntoIterator<Item = S>,
        S: ToString,
    {
        metadata_scan().paths(paths).send_blocking(self)
    }
}

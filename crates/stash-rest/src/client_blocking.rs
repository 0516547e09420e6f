use log::debug;
use reqwest::{Method, StatusCode};
use serde::Deserialize;
use serde_json::Value;

use crate::{
    connection::ConnectionInfo,
    error::Result,
    rest::{decode, default_headers, from_response},
};

pub struct BlockingClientBuilder {
    info: ConnectionInfo,
    inner: reqwest::blocking::ClientBuilder,
}

impl BlockingClientBuilder {
    pub fn new(info: &ConnectionInfo) -> Self {
        Self {
            info: info.clone(),
            inner: reqwest::blocking::Client::builder(),
        }
    }

    pub fn with_inner(
        mut self,
        f: impl FnOnce(reqwest::blocking::ClientBuilder) -> reqwest::blocking::ClientBuilder,
    ) -> Self {
        self.inner = f(self.inner);
        self
    }

    pub fn build(self) -> Result<BlockingClient> {
        let Self { info, inner } = self;
        let base_url = info.base_url()?;
        let session = info.session().map(str::to_string);
        let headers = default_headers(session.as_deref())?;
        let client = inner.default_headers(headers).build()?;
        Ok(BlockingClient {
            base_url,
            session,
            client,
        })
    }
}

/// Like [`Client`](crate::Client), but every call blocks until the exchange completes.
///
/// Must not be created, used or dropped from within an async runtime.
#[derive(Clone, Debug)]
pub struct BlockingClient {
    base_url: String,
    session: Option<String>,
    client: reqwest::blocking::Client,
}

impl BlockingClient {
    pub fn new(info: &ConnectionInfo) -> Result<Self> {
        BlockingClientBuilder::new(info).build()
    }

    pub fn builder(info: &ConnectionInfo) -> BlockingClientBuilder {
        BlockingClientBuilder::new(info)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn session(&self) -> Option<&str> {
        self.session.as_deref()
    }

    /// Send a request to `path`, which is appended verbatim to [`BlockingClient::base_url`].
    pub fn request(&self, method: Method, path: &str, body: Option<Value>) -> Result<Value> {
        let (_, value) = self.exchange(method, path, body)?;
        Ok(value)
    }

    pub fn request_as<T>(&self, method: Method, path: &str, body: Option<Value>) -> Result<T>
    where
        T: for<'de> Deserialize<'de>,
    {
        let (status, value) = self.exchange(method, path, body)?;
        decode(status, value)
    }

    fn exchange(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<(StatusCode, Value)> {
        let url = format!("{}{path}", self.base_url);
        debug!("Sending {method} {url}");
        let mut request = self.client.request(method.clone(), &url);
        if let Some(body) = &body {
            request = request.json(body);
        }
        let response = request.send()?;
        let status = response.status();
        let text = response.text()?;
        let value = from_response(&method, path, status, text)?;
        Ok((status, value))
    }

    pub fn get(&self, path: &str) -> Result<Value> {
        self.request(Method::GET, path, None)
    }

    pub fn post(&self, path: &str, body: impl Into<Option<Value>>) -> Result<Value> {
        self.request(Method::POST, path, body.into())
    }

    pub fn put(&self, path: &str, body: impl Into<Option<Value>>) -> Result<Value> {
        self.request(Method::PUT, path, body.into())
    }

    pub fn patch(&self, path: &str, body: impl Into<Option<Value>>) -> Result<Value> {
        self.request(Method::PATCH, path, body.into())
    }

    pub fn delete(&self, path: &str, body: impl Into<Option<Value>>) -> Result<Value> {
        self.request(Method::DELETE, path, body.into())
    }
}

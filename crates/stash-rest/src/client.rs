use log::debug;
use reqwest::{Method, StatusCode};
use serde::Deserialize;
use serde_json::Value;

use crate::{
    connection::ConnectionInfo,
    error::Result,
    rest::{decode, default_headers, from_response},
};

pub struct ClientBuilder {
    info: ConnectionInfo,
    inner: reqwest::ClientBuilder,
}

impl ClientBuilder {
    pub fn new(info: &ConnectionInfo) -> Self {
        Self {
            info: info.clone(),
            inner: reqwest::Client::builder(),
        }
    }

    /// Configure the underlying transport, e.g. timeouts or certificate handling.
    pub fn with_inner(
        mut self,
        f: impl FnOnce(reqwest::ClientBuilder) -> reqwest::ClientBuilder,
    ) -> Self {
        self.inner = f(self.inner);
        self
    }

    pub fn build(self) -> Result<Client> {
        let Self { info, inner } = self;
        let base_url = info.base_url()?;
        let session = info.session().map(str::to_string);
        let headers = default_headers(session.as_deref())?;
        let client = inner.default_headers(headers).build()?;
        Ok(Client {
            base_url,
            session,
            client,
        })
    }
}

/// An async client for the REST API.
///
/// Cloning is cheap and clones share connections.
#[derive(Clone, Debug)]
pub struct Client {
    base_url: String,
    session: Option<String>,
    client: reqwest::Client,
}

impl Client {
    pub fn new(info: &ConnectionInfo) -> Result<Self> {
        ClientBuilder::new(info).build()
    }

    pub fn builder(info: &ConnectionInfo) -> ClientBuilder {
        ClientBuilder::new(info)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn session(&self) -> Option<&str> {
        self.session.as_deref()
    }

    /// Send a request to `path`, which is appended verbatim to [`Client::base_url`].
    pub async fn request(&self, method: Method, path: &str, body: Option<Value>) -> Result<Value> {
        let (_, value) = self.exchange(method, path, body).await?;
        Ok(value)
    }

    pub async fn request_as<T>(&self, method: Method, path: &str, body: Option<Value>) -> Result<T>
    where
        T: for<'de> Deserialize<'de>,
    {
        let (status, value) = self.exchange(method, path, body).await?;
        decode(status, value)
    }

    async fn exchange(
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
        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;
        let value = from_response(&method, path, status, text)?;
        Ok((status, value))
    }

    pub async fn get(&self, path: &str) -> Result<Value> {
        self.request(Method::GET, path, None).await
    }

    pub async fn post(&self, path: &str, body: impl Into<Option<Value>>) -> Result<Value> {
        self.request(Method::POST, path, body.into()).await
    }

    pub async fn put(&self, path: &str, body: impl Into<Option<Value>>) -> Result<Value> {
        self.request(Method::PUT, path, body.into()).await
    }

    pub async fn patch(&self, path: &str, body: impl Into<Option<Value>>) -> Result<Value> {
        self.request(Method::PATCH, path, body.into()).await
    }

    pub async fn delete(&self, path: &str, body: impl Into<Option<Value>>) -> Result<Value> {
        self.request(Method::DELETE, path, body.into()).await
    }
}

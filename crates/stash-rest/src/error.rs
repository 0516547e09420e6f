//! Errors returned by the clients.

use std::fmt::{Display, Formatter};

use reqwest::{Method, StatusCode};
use serde::Deserialize;

/// The connection details cannot be turned into a usable client.
#[derive(Debug, thiserror::Error)]
pub enum ConfigurationError {
    #[error("Connection info has no scheme")]
    MissingScheme,
    #[error("Connection info has no port")]
    MissingPort,
    #[error("Connection info does not form a valid address: {address}")]
    InvalidAddress {
        address: String,
        source: url::ParseError,
    },
    #[error("Session cookie cannot be sent as a header")]
    InvalidSessionCookie(#[source] reqwest::header::InvalidHeaderValue),
}

/// The server answered with a status of 400 or above.
///
/// 4xx and 5xx are not told apart; inspect [`ApiError::status`] to branch.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub body: String,
    pub method: Method,
    pub path: String,
}

/// The error envelope the server uses in non-success responses.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
pub struct RemoteError {
    pub error: String,
    #[serde(default)]
    pub code: Option<String>,
}

impl ApiError {
    /// Try to interpret the body as the server's error envelope.
    pub fn remote(&self) -> Option<RemoteError> {
        serde_json::from_str(&self.body).ok()
    }
}

impl Display for ApiError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let Self {
            status,
            body,
            method,
            path,
        } = self;
        write!(
            f,
            "REST API error {}: {body}. Method: {method}, Path: {path}",
            status.as_u16()
        )
    }
}

impl std::error::Error for ApiError {}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
    #[error("Could not decode response, status was {status}")]
    Decode {
        status: StatusCode,
        source: serde_json::Error,
    },
}

impl Error {
    /// The structured API error, if this is one.
    pub fn as_api(&self) -> Option<&ApiError> {
        match self {
            Self::Api(e) => Some(e),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

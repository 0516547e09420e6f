//! Facilities for describing how to reach a Stash server.
//!
//! Plugins receive a server connection object on stdin, for example:
//!
//! ```json
//! {"server_connection": {"Scheme": "http", "Port": 9999, "SessionCookie": {"Value": "abc"}}}
//! ```

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::ConfigurationError;

const DEFAULT_HOST: &str = "localhost";
const API_ROOT: &str = "/api/v1";

/// The cookie that authenticates a plugin towards the server.
///
/// Only the value is used; any other cookie attributes in the input are ignored.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct SessionCookie {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl SessionCookie {
    pub fn new(value: impl ToString) -> Self {
        Self {
            value: Some(value.to_string()),
        }
    }
}

/// Connection details supplied by the caller.
///
/// All fields are optional on the wire so that incomplete input can be reported as a
/// [`ConfigurationError`] instead of a parse failure.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ConnectionInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scheme: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_cookie: Option<SessionCookie>,
}

#[derive(Deserialize)]
struct PluginInput {
    server_connection: ConnectionInfo,
}

impl ConnectionInfo {
    pub fn new(scheme: impl ToString, port: u16) -> Self {
        Self {
            scheme: Some(scheme.to_string()),
            host: None,
            port: Some(port),
            session_cookie: None,
        }
    }

    pub fn host(mut self, host: impl ToString) -> Self {
        self.host = Some(host.to_string());
        self
    }

    pub fn session_cookie(mut self, value: impl ToString) -> Self {
        self.session_cookie = Some(SessionCookie::new(value));
        self
    }

    /// Extract the connection from the JSON document a plugin receives on stdin.
    pub fn from_plugin_input(text: &str) -> Result<Self, serde_json::Error> {
        let PluginInput { server_connection } = serde_json::from_str(text)?;
        Ok(server_connection)
    }

    /// The root of the REST API, e.g. `http://localhost:9999/api/v1`.
    ///
    /// An absent or empty host means `localhost`.
    pub fn base_url(&self) -> Result<String, ConfigurationError> {
        let scheme = self
            .scheme
            .as_deref()
            .filter(|s| !s.is_empty())
            .ok_or(ConfigurationError::MissingScheme)?;
        let port = self.port.ok_or(ConfigurationError::MissingPort)?;
        let host = self
            .host
            .as_deref()
            .filter(|h| !h.is_empty())
            .unwrap_or(DEFAULT_HOST);
        let base_url = format!("{scheme}://{host}:{port}{API_ROOT}");
        Url::parse(&base_url).map_err(|source| ConfigurationError::InvalidAddress {
            address: base_url.clone(),
            source,
        })?;
        Ok(base_url)
    }

    /// The session value, if one is configured and non-empty.
    pub fn session(&self) -> Option<&str> {
        self.session_cookie
            .as_ref()
            .and_then(|c| c.value.as_deref())
            .filter(|v| !v.is_empty())
    }
}

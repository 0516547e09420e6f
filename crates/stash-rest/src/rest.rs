//! Request and response conventions shared by the async and blocking clients.

use log::trace;
use reqwest::{
    header::{
        HeaderMap, HeaderName, HeaderValue, ACCEPT, ACCEPT_ENCODING, CONNECTION, CONTENT_TYPE,
        COOKIE,
    },
    Method, StatusCode,
};
use serde::Deserialize;
use serde_json::Value;

use crate::error::{ApiError, ConfigurationError, Error};

/// Headers sent with every request, regardless of connection.
pub static DEFAULT_HEADERS: [(HeaderName, &str); 4] = [
    (ACCEPT_ENCODING, "gzip, deflate, br"),
    (CONTENT_TYPE, "application/json"),
    (ACCEPT, "application/json"),
    (CONNECTION, "keep-alive"),
];

pub(crate) fn default_headers(session: Option<&str>) -> Result<HeaderMap, ConfigurationError> {
    let mut headers = HeaderMap::new();
    for (name, value) in &DEFAULT_HEADERS {
        headers.insert(name.clone(), HeaderValue::from_static(*value));
    }
    if let Some(session) = session {
        let mut cookie = HeaderValue::from_str(&format!("session={session}"))
            .map_err(ConfigurationError::InvalidSessionCookie)?;
        cookie.set_sensitive(true);
        headers.insert(COOKIE, cookie);
    }
    Ok(headers)
}

/// Interpret a response.
///
/// Statuses of 400 and above become an [`ApiError`] without looking at the body.
/// No content, either by status or by an empty body, becomes [`Value::Null`].
pub fn from_response(
    method: &Method,
    path: &str,
    status: StatusCode,
    text: String,
) -> Result<Value, Error> {
    trace!("Received {status}: {text}");
    if status.as_u16() >= 400 {
        return Err(ApiError {
            status,
            body: text,
            method: method.clone(),
            path: path.to_string(),
        }
        .into());
    }
    if status == StatusCode::NO_CONTENT || text.is_empty() {
        return Ok(Value::Null);
    }
    serde_json::from_str(&text).map_err(|source| Error::Decode { status, source })
}

/// Convert a decoded response, received with `status`, into a concrete type.
///
/// Responses without content arrive as [`Value::Null`], so `Option<T>` is a good choice when the
/// endpoint may answer with 204.
pub fn decode<T>(status: StatusCode, value: Value) -> Result<T, Error>
where
    T: for<'de> Deserialize<'de>,
{
    serde_json::from_value(value).map_err(|source| Error::Decode { status, source })
}

/// Whether a filter argument carries anything worth sending.
pub(crate) fn is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Object(o) => !o.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::String(s) => !s.is_empty(),
        Value::Bool(_) | Value::Number(_) => true,
    }
}

//! A small client for the Stash REST API at `/api/v1`.
//!
//! ```no_run
//! use stash_rest::{BlockingClient, ConnectionInfo};
//!
//! # fn main() -> stash_rest::Result<()> {
//! let info = ConnectionInfo::new("http", 9999).session_cookie("abc");
//! let client = BlockingClient::new(&info)?;
//! let tags = client.get("/tags")?;
//! let id = client.find_tag_by_name("Favorite")?;
//! # Ok(())
//! # }
//! ```
pub mod apis;
mod client;
pub mod client_blocking;
pub mod connection;
mod endpoints;
pub mod error;
pub mod rest;
pub mod rest_http;
pub mod rest_http_blocking;

pub use client::{Client, ClientBuilder};
pub use client_blocking::{BlockingClient, BlockingClientBuilder};
pub use connection::{ConnectionInfo, SessionCookie};
pub use endpoints::{metadata, performers, scenes, tags};
pub use error::{ApiError, ConfigurationError, Error, RemoteError, Result};
pub use reqwest::{Method, StatusCode};

//! Utilities for describing requests to the REST API as values.

use std::future::Future;

use reqwest::Method;
use serde_json::Value;

use crate::{error::Result, Client};

pub trait RestHttp: Send + Sized {
    type ResponseData;

    const METHOD: Method;

    /// The path relative to the API root and the JSON body, if any.
    fn to_path_and_data(&self) -> (String, Option<Value>);

    fn parse(self, value: Value) -> Result<Self::ResponseData>;

    fn send(self, client: &Client) -> impl Future<Output = Result<Self::ResponseData>> + Send {
        async move {
            let (path, data) = self.to_path_and_data();
            let value = client.request(Self::METHOD, &path, data).await?;
            self.parse(value)
        }
    }
}

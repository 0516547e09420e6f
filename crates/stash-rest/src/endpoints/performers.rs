//! Performer queries.

use reqwest::Method;
use serde_json::Value;

use crate::{
    client_blocking::BlockingClient, endpoints::sparse_body, error::Result, rest_http::RestHttp,
    rest_http_blocking::BlockingRestHttp, Client,
};

#[derive(Default)]
pub struct FindPerformersRequest {
    filter: Option<Value>,
    performer_filter: Option<Value>,
}

impl FindPerformersRequest {
    pub fn filter(mut self, filter: Value) -> Self {
        self.filter = Some(filter);
        self
    }

    pub fn performer_filter(mut self, performer_filter: Value) -> Self {
        self.performer_filter = Some(performer_filter);
        self
    }
}

impl RestHttp for FindPerformersRequest {
    type ResponseData = Value;
    const METHOD: Method = Method::POST;

    fn to_path_and_data(&self) -> (String, Option<Value>) {
        let body = sparse_body([
            ("filter", self.filter.as_ref()),
            ("performer_filter", self.performer_filter.as_ref()),
        ]);
        ("/performers/query".to_string(), Some(body))
    }

    fn parse(self, value: Value) -> Result<Self::ResponseData> {
        Ok(value)
    }
}

pub fn find_performers() -> FindPerformersRequest {
    FindPerformersRequest::default()
}

fn request(filter: Option<Value>, performer_filter: Option<Value>) -> FindPerformersRequest {
    FindPerformersRequest {
        filter,
        performer_filter,
    }
}

impl Client {
    pub async fn find_performers(
        &self,
        filter: Option<Value>,
        performer_filter: Option<Value>,
    ) -> Result<Value> {
        request(filter, performer_filter).send(self).await
    }
}

impl BlockingClient {
    pub fn find_performers(
        &self,
        filter: Option<Value>,
        performer_filter: Option<Value>,
    ) -> Result<Value> {
        request(filter, performer_filter).send_blocking(self)
    }
}

//! Scene queries.

use reqwest::Method;
use serde_json::Value;

use crate::{
    client_blocking::BlockingClient, endpoints::sparse_body, error::Result, rest_http::RestHttp,
    rest_http_blocking::BlockingRestHttp, Client,
};

#[derive(Default)]
pub struct FindScenesRequest {
    filter: Option<Value>,
    scene_filter: Option<Value>,
}

impl FindScenesRequest {
    /// Paging, sorting and free text search, e.g. `{"per_page": 10}`.
    pub fn filter(mut self, filter: Value) -> Self {
        self.filter = Some(filter);
        self
    }

    /// Criteria on scene fields, e.g. `{"rating100": {"modifier": "GREATER_THAN", "value": 80}}`.
    pub fn scene_filter(mut self, scene_filter: Value) -> Self {
        self.scene_filter = Some(scene_filter);
        self
    }
}

impl RestHttp for FindScenesRequest {
    type ResponseData = Value;
    const METHOD: Method = Method::POST;

    fn to_path_and_data(&self) -> (String, Option<Value>) {
        let body = sparse_body([
            ("filter", self.filter.as_ref()),
            ("scene_filter", self.scene_filter.as_ref()),
        ]);
        ("/scenes/query".to_string(), Some(body))
    }

    fn parse(self, value: Value) -> Result<Self::ResponseData> {
        Ok(value)
    }
}

pub fn find_scenes() -> FindScenesRequest {
    FindScenesRequest::default()
}

fn request(filter: Option<Value>, scene_filter: Option<Value>) -> FindScenesRequest {
    FindScenesRequest {
        filter,
        scene_filter,
    }
}

impl Client {
    pub async fn find_scenes(
        &self,
        filter: Option<Value>,
        scene_filter: Option<Value>,
    ) -> Result<Value> {
        request(filter, scene_filter).send(self).await
    }
}

impl BlockingClient {
    pub fn find_scenes(&self, filter: Option<Value>, scene_filter: Option<Value>) -> Result<Value> {
        request(filter, scene_filter).send_blocking(self)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn absent_filters_are_not_sent() {
        let (path, body) = find_scenes().to_path_and_data();
        assert_eq!(path, "/scenes/query");
        assert_eq!(body, Some(json!({})));

        let (_, body) = find_scenes()
            .filter(json!({"per_page": 10}))
            .scene_filter(json!({}))
            .to_path_and_data();
        assert_eq!(body, Some(json!({"filter": {"per_page": 10}})));
    }

    #[test]
    fn both_filters_are_sent() {
        let (_, body) = find_scenes()
            .filter(json!({"per_page": 10}))
            .scene_filter(json!({"organized": true}))
            .to_path_and_data();
        assert_eq!(
            body,
            Some(json!({"filter": {"per_page": 10}, "scene_filter": {"organized": true}}))
        );
    }
}

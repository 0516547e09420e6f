//! Tag lookup and creation.

use reqwest::Method;
use serde_json::{json, Value};

use crate::{
    client_blocking::BlockingClient, error::Result, rest_http::RestHttp,
    rest_http_blocking::BlockingRestHttp, Client,
};

pub struct FindTagByNameRequest {
    name: String,
}

impl RestHttp for FindTagByNameRequest {
    type ResponseData = Option<Value>;
    const METHOD: Method = Method::POST;

    fn to_path_and_data(&self) -> (String, Option<Value>) {
        let body = json!({"filter": {"q": self.name, "per_page": -1}});
        ("/tags/query".to_string(), Some(body))
    }

    fn parse(self, value: Value) -> Result<Self::ResponseData> {
        Ok(exact_match(&value, &self.name))
    }
}

/// Find the id of the first tag in a query result whose name is exactly `name`.
///
/// The server filters by substring, so results like `Foobar` or `foo` for `Foo` are expected
/// and skipped. Tags are read from `tags`, falling back to the `data` list envelope.
pub fn exact_match(result: &Value, name: &str) -> Option<Value> {
    let tags = result
        .get("tags")
        .or_else(|| result.get("data"))
        .and_then(Value::as_array)?;
    tags.iter()
        .filter(|tag| tag.get("name").and_then(Value::as_str) == Some(name))
        .find_map(|tag| tag.get("id").cloned())
}

pub struct CreateTagRequest {
    name: String,
}

impl RestHttp for CreateTagRequest {
    type ResponseData = Value;
    const METHOD: Method = Method::POST;

    fn to_path_and_data(&self) -> (String, Option<Value>) {
        ("/tags".to_string(), Some(json!({"name": self.name})))
    }

    fn parse(self, value: Value) -> Result<Self::ResponseData> {
        Ok(value)
    }
}

/// Look up a tag id by exact, case-sensitive name.
///
/// Resolves to `None` both when nothing matches and when the query returns only near misses.
pub fn find_tag_by_name(name: impl ToString) -> FindTagByNameRequest {
    FindTagByNameRequest {
        name: name.to_string(),
    }
}

pub fn create_tag(name: impl ToString) -> CreateTagRequest {
    CreateTagRequest {
        name: name.to_string(),
    }
}

impl Client {
    pub async fn find_tag_by_name(&self, name: &str) -> Result<Option<Value>> {
        find_tag_by_name(name).send(self).await
    }

    pub async fn create_tag(&self, name: &str) -> Result<Value> {
        create_tag(name).send(self).await
    }
}

impl BlockingClient {
    pub fn find_tag_by_name(&self, name: &str) -> Result<Option<Value>> {
        find_tag_by_name(name).send_blocking(self)
    }

    pub fn create_tag(&self, name: &str) -> Result<Value> {
        create_tag(name).send_blocking(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_match_is_case_sensitive() {
        let result = json!({"tags": [
            {"id": "1", "name": "Foobar"},
            {"id": "2", "name": "foo"},
            {"id": "3", "name": "Foo"},
            {"id": "4", "name": "Foo"},
        ]});
        assert_eq!(exact_match(&result, "Foo"), Some(json!("3")));
        assert_eq!(exact_match(&result, "FOO"), None);
    }

    #[test]
    fn exact_match_handles_empty_and_missing_lists() {
        assert_eq!(exact_match(&json!({"tags": []}), "Foo"), None);
        assert_eq!(exact_match(&json!({}), "Foo"), None);
        assert_eq!(exact_match(&Value::Null, "Foo"), None);
    }

    #[test]
    fn exact_match_reads_list_envelope() {
        let result = json!({"data": [{"id": 7, "name": "Foo"}], "count": 1});
        assert_eq!(exact_match(&result, "Foo"), Some(json!(7)));
    }

    #[test]
    fn exact_match_skips_malformed_entries() {
        let result = json!({"tags": [{"id": 1}, {"name": "Foo"}, {"id": 2, "name": "Foo"}]});
        assert_eq!(exact_match(&result, "Foo"), Some(json!(2)));
    }
}

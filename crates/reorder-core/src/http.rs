//! REST Backend
//!
//! `ApiClient` wraps reqwest with an explicit, injected `Session`.
//! `HttpBackend` implements `ReorderBackend` for one collection endpoint:
//!
//! - `GET  <list_path>`           -> items, wrapped per `ListShape`
//! - `POST <list_path>/reorder`   -> `{ <ids_field>: [ids...] }`, any 2xx is success

use std::marker::PhantomData;

use async_trait::async_trait;
use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::client::{FetchError, PersistError, ReorderBackend};
use crate::item::OrderedItem;

/// Credentials for one admin session, passed to every client that needs them
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    token: Option<String>,
}

impl Session {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: Some(token.into()),
        }
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }
}

/// Standard `{ "data": ... }` response wrapper
#[derive(Debug, Clone, Deserialize)]
pub struct Envelope<D> {
    pub data: D,
}

/// Decode the `data` member of an enveloped response
pub fn decode_data<D: DeserializeOwned>(value: Value) -> Result<D, FetchError> {
    serde_json::from_value::<Envelope<D>>(value)
        .map(|envelope| envelope.data)
        .map_err(|e| FetchError::Decode(e.to_string()))
}

/// Where the item array sits in a list response
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListShape {
    /// `[ ... ]`
    Bare,
    /// `{ "data": [ ... ] }`
    Data,
    /// `{ "data": { "<field>": [ ... ] } }`
    DataField(String),
}

impl ListShape {
    pub fn decode<T: DeserializeOwned>(&self, value: Value) -> Result<Vec<T>, FetchError> {
        let list = match self {
            ListShape::Bare => value,
            ListShape::Data => return decode_data(value),
            ListShape::DataField(field) => value
                .pointer(&format!("/data/{}", field))
                .cloned()
                .ok_or_else(|| FetchError::Decode(format!("missing data.{}", field)))?,
        };
        serde_json::from_value(list).map_err(|e| FetchError::Decode(e.to_string()))
    }
}

/// Paths and payload naming for one reorderable collection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionEndpoint {
    pub list_path: String,
    pub reorder_path: String,
    /// Body field carrying the ordered ids, e.g. `memberIds`
    pub ids_field: String,
    pub shape: ListShape,
}

impl CollectionEndpoint {
    pub fn new(list_path: impl Into<String>, ids_field: impl Into<String>, shape: ListShape) -> Self {
        let list_path = list_path.into();
        let reorder_path = format!("{}/reorder", list_path.trim_end_matches('/'));
        Self {
            list_path,
            reorder_path,
            ids_field: ids_field.into(),
            shape,
        }
    }

    /// Reorder request body: the complete id list under `ids_field`
    pub fn reorder_body<Id: Serialize>(&self, ids: &[Id]) -> Result<Value, PersistError> {
        let ids = serde_json::to_value(ids).map_err(|e| PersistError::Encode(e.to_string()))?;
        let mut body = Map::new();
        body.insert(self.ids_field.clone(), ids);
        Ok(Value::Object(body))
    }
}

/// Thin HTTP client bound to a base URL and a session
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    session: Session,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, session: Session) -> Self {
        Self::with_http(reqwest::Client::new(), base_url, session)
    }

    /// Use a preconfigured reqwest client
    pub fn with_http(http: reqwest::Client, base_url: impl Into<String>, session: Session) -> Self {
        Self {
            http,
            base_url: base_url.into(),
            session,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Join base URL and a relative path with exactly one slash
    pub fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match self.session.token() {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    pub async fn get_json(&self, path: &str, query: &[(&str, String)]) -> Result<Value, FetchError> {
        let request = self.authorize(self.http.get(self.url(path)).query(query));
        let response = request
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }
        response
            .json::<Value>()
            .await
            .map_err(|e| FetchError::Decode(e.to_string()))
    }

    pub async fn post_json(&self, path: &str, body: &Value) -> Result<(), PersistError> {
        let request = self.authorize(self.http.post(self.url(path)).json(body));
        let response = request
            .send()
            .await
            .map_err(|e| PersistError::Transport(e.to_string()))?;
        let status = response.status();
        if !status.is_success() {
            return Err(PersistError::Status(status.as_u16()));
        }
        Ok(())
    }

    pub async fn delete(&self, path: &str) -> Result<(), PersistError> {
        let request = self.authorize(self.http.delete(self.url(path)));
        let response = request
            .send()
            .await
            .map_err(|e| PersistError::Transport(e.to_string()))?;
        let status = response.status();
        if !status.is_success() {
            return Err(PersistError::Status(status.as_u16()));
        }
        Ok(())
    }
}

/// `ReorderBackend` over REST for one collection
#[derive(Debug, Clone)]
pub struct HttpBackend<T> {
    client: ApiClient,
    endpoint: CollectionEndpoint,
    _item: PhantomData<fn() -> T>,
}

impl<T> HttpBackend<T> {
    pub fn new(client: ApiClient, endpoint: CollectionEndpoint) -> Self {
        Self {
            client,
            endpoint,
            _item: PhantomData,
        }
    }

    pub fn endpoint(&self) -> &CollectionEndpoint {
        &self.endpoint
    }
}

#[async_trait(?Send)]
impl<T> ReorderBackend<T> for HttpBackend<T>
where
    T: OrderedItem + DeserializeOwned,
{
    async fn fetch_all(&self) -> Result<Vec<T>, FetchError> {
        let value = self.client.get_json(&self.endpoint.list_path, &[]).await?;
        self.endpoint.shape.decode(value)
    }

    async fn persist_order(&self, ids: &[T::Id]) -> Result<(), PersistError> {
        let body = self.endpoint.reorder_body(ids)?;
        log::debug!("[HTTP] POST {} ({} ids)", self.endpoint.reorder_path, ids.len());
        self.client.post_json(&self.endpoint.reorder_path, &body).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Row {
        id: String,
    }

    #[test]
    fn test_reorder_body_is_full_list() {
        let endpoint = CollectionEndpoint::new("exclusive-members", "ids", ListShape::Data);
        let body = endpoint.reorder_body(&["b", "c", "a"]).unwrap();
        assert_eq!(body, json!({ "ids": ["b", "c", "a"] }));
        assert_eq!(endpoint.reorder_path, "exclusive-members/reorder");
    }

    #[test]
    fn test_list_shapes() {
        let bare = json!([{ "id": "a" }]);
        let data = json!({ "data": [{ "id": "a" }] });
        let nested = json!({ "data": { "members": [{ "id": "a" }] } });
        let expected = vec![Row { id: "a".to_string() }];

        assert_eq!(ListShape::Bare.decode::<Row>(bare).unwrap(), expected);
        assert_eq!(ListShape::Data.decode::<Row>(data).unwrap(), expected);
        assert_eq!(
            ListShape::DataField("members".to_string()).decode::<Row>(nested).unwrap(),
            expected
        );
    }

    #[test]
    fn test_shape_mismatch_is_decode_error() {
        let nested = json!({ "data": { "questions": [] } });
        let err = ListShape::DataField("members".to_string())
            .decode::<Row>(nested)
            .unwrap_err();
        assert!(matches!(err, FetchError::Decode(_)));
        assert!(matches!(ListShape::Data.decode::<Row>(json!([])), Err(FetchError::Decode(_))));
    }

    #[test]
    fn test_url_join() {
        let client = ApiClient::new("https://api.example.org/admin/", Session::anonymous());
        assert_eq!(client.url("/surveys"), "https://api.example.org/admin/surveys");
        assert_eq!(client.url("surveys/1/questions"), "https://api.example.org/admin/surveys/1/questions");
    }
}

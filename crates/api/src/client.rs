//! Shared HTTP transport for the entity clients
//!
//! [`ApiClient`] wraps a `reqwest::Client` with the configured base URL and
//! an injected credential provider. The per-entity clients build on its
//! generic helpers; nothing outside this module constructs requests.
//!
//! List endpoints may answer with either a bare JSON array or a pagination
//! envelope carrying a `results` field. [`ListResponse`] models both shapes
//! explicitly and normalizes them to `Vec<T>` immediately after fetch, so
//! no render site ever branches on response shape.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::credentials::SharedCredentials;
use crate::error::{ClientError, ClientResult};

// ============================================================================
// List response shapes
// ============================================================================

/// Pagination envelope returned by list endpoints.
///
/// `count`, `next` and `previous` are decoded but unused: the workflow
/// always refetches full collections and never walks cursors.
#[derive(Debug, Clone, Deserialize)]
pub struct Paginated<T> {
    /// Total number of records on the server.
    #[serde(default)]
    pub count: u64,
    /// URL of the next page, if any.
    #[serde(default)]
    pub next: Option<String>,
    /// URL of the previous page, if any.
    #[serde(default)]
    pub previous: Option<String>,
    /// The records for the current page.
    pub results: Vec<T>,
}

/// A list endpoint response: bare array or pagination envelope.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ListResponse<T> {
    /// Bare JSON array.
    Bare(Vec<T>),
    /// Envelope with a `results` field.
    Paginated(Paginated<T>),
}

impl<T> ListResponse<T> {
    /// Unwrap to the canonical in-memory shape.
    pub fn into_results(self) -> Vec<T> {
        match self {
            ListResponse::Bare(items) => items,
            ListResponse::Paginated(envelope) => envelope.results,
        }
    }
}

// ============================================================================
// ApiClient
// ============================================================================

/// HTTP transport shared by the entity clients.
///
/// The credential provider is consulted on every request; when it yields a
/// token the request carries `Authorization: Bearer <token>`, otherwise the
/// request goes out unauthenticated. No timeout is configured: a hung
/// request hangs the corresponding UI action, by specification.
#[derive(Clone)]
pub struct ApiClient {
    /// The underlying reqwest HTTP client.
    client: reqwest::Client,
    /// Base URL of the backend API, always ending with `/`.
    base_url: String,
    /// Source of bearer tokens, read fresh per request.
    credentials: SharedCredentials,
}

impl ApiClient {
    /// Create a new transport for the given base URL and credentials.
    pub fn new(base_url: impl Into<String>, credentials: SharedCredentials) -> Self {
        let mut base_url = base_url.into();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }
        Self {
            client: reqwest::Client::new(),
            base_url,
            credentials,
        }
    }

    /// The configured base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build the full URL for an endpoint path relative to the base URL.
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Attach the bearer token, if the provider currently has one.
    fn authorize(&self, req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self.credentials.access_token() {
            Some(token) => req.bearer_auth(token),
            None => req,
        }
    }

    // ========================================================================
    // Generic request helpers
    // ========================================================================

    /// Send a GET request and deserialise the response.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let req = self.authorize(self.client.get(self.url(path)));
        let response = req.send().await?;
        Self::handle_response(response).await
    }

    /// Send a GET request to a list endpoint and normalize the response
    /// shape (bare array or pagination envelope) into `Vec<T>`.
    pub async fn get_list<T: DeserializeOwned>(&self, path: &str) -> ClientResult<Vec<T>> {
        let response: ListResponse<T> = self.get(path).await?;
        Ok(response.into_results())
    }

    /// Send a POST request with a JSON body and deserialise the response.
    pub async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let req = self.authorize(self.client.post(self.url(path)).json(body));
        let response = req.send().await?;
        Self::handle_response(response).await
    }

    /// Send a POST request with no body and deserialise the response.
    pub async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let req = self.authorize(self.client.post(self.url(path)));
        let response = req.send().await?;
        Self::handle_response(response).await
    }

    /// Send a POST request with a multipart form and deserialise the response.
    pub async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: reqwest::multipart::Form,
    ) -> ClientResult<T> {
        let req = self.authorize(self.client.post(self.url(path)).multipart(form));
        let response = req.send().await?;
        Self::handle_response(response).await
    }

    /// Send a PUT request with a JSON body and deserialise the response.
    pub async fn put<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let req = self.authorize(self.client.put(self.url(path)).json(body));
        let response = req.send().await?;
        Self::handle_response(response).await
    }

    /// Send a PUT request with a multipart form and deserialise the response.
    pub async fn put_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: reqwest::multipart::Form,
    ) -> ClientResult<T> {
        let req = self.authorize(self.client.put(self.url(path)).multipart(form));
        let response = req.send().await?;
        Self::handle_response(response).await
    }

    /// Send a DELETE request. No response body is expected.
    pub async fn delete(&self, path: &str) -> ClientResult<()> {
        let req = self.authorize(self.client.delete(self.url(path)));
        let response = req.send().await?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(ClientError::from_status(status.as_u16(), body))
        }
    }

    /// Fetch binary content from an absolute URL (e.g. a generated PDF).
    ///
    /// The URL is used as-is; generated document references are absolute.
    pub async fn get_bytes(&self, url: &str) -> ClientResult<Vec<u8>> {
        let req = self.authorize(self.client.get(url));
        let response = req.send().await?;

        let status = response.status();
        if status.is_success() {
            Ok(response.bytes().await?.to_vec())
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(ClientError::from_status(status.as_u16(), body))
        }
    }

    /// Handle a response: check for errors and deserialise on success.
    ///
    /// Error bodies are kept verbatim so field-level validation detail from
    /// the backend reaches the user unchanged.
    async fn handle_response<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> ClientResult<T> {
        let status = response.status();

        if status.is_success() {
            let text = response.text().await?;
            serde_json::from_str(&text).map_err(|e| ClientError::Parse(e.to_string()))
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(ClientError::from_status(status.as_u16(), body))
        }
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::credentials::TokenCell;
    use pretty_assertions::assert_eq;
    use std::sync::Arc;

    #[derive(Debug, PartialEq, Deserialize)]
    struct Named {
        id: i64,
        name: String,
    }

    #[test]
    fn test_bare_list_unwraps() {
        let json = r#"[{"id":1,"name":"Admin"},{"id":2,"name":"Guard"}]"#;
        let response: ListResponse<Named> = serde_json::from_str(json).unwrap();
        let items = response.into_results();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].name, "Admin");
    }

    #[test]
    fn test_paginated_list_unwraps() {
        let json = r#"{"count":1,"next":null,"previous":null,"results":[{"id":1,"name":"Admin"}]}"#;
        let response: ListResponse<Named> = serde_json::from_str(json).unwrap();
        let items = response.into_results();
        assert_eq!(
            items,
            vec![Named {
                id: 1,
                name: "Admin".to_string()
            }]
        );
    }

    #[test]
    fn test_both_shapes_normalize_identically() {
        let bare: ListResponse<Named> =
            serde_json::from_str(r#"[{"id":1,"name":"Admin"}]"#).unwrap();
        let enveloped: ListResponse<Named> =
            serde_json::from_str(r#"{"results":[{"id":1,"name":"Admin"}]}"#).unwrap();
        assert_eq!(bare.into_results(), enveloped.into_results());
    }

    #[test]
    fn test_empty_envelope() {
        let response: ListResponse<Named> = serde_json::from_str(r#"{"results":[]}"#).unwrap();
        assert!(response.into_results().is_empty());
    }

    #[test]
    fn test_base_url_gets_trailing_slash() {
        let credentials: SharedCredentials = Arc::new(TokenCell::new());
        let client = ApiClient::new("http://localhost:8000/api", credentials);
        assert_eq!(client.base_url(), "http://localhost:8000/api/");
        assert_eq!(client.url("contratos/"), "http://localhost:8000/api/contratos/");
    }
}

//! HTTP backend for the GraphQL execution capability.
//!
//! Posts each document to a GraphQL endpoint as `{"query": "..."}` and hands
//! back the reply's `data` payload.
//!
//! # Example
//!
//! ```ignore
//! use wayfare::graph::backends::http::HttpClient;
//! use wayfare::repositories::AdvisoryRepository;
//!
//! let client = HttpClient::new("http://localhost:8080/graphql");
//! let repository = AdvisoryRepository::new(Arc::new(client));
//! ```

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::error::AppError;
use crate::graph::traits::GraphExecutor;

/// Header carrying the endpoint auth token (managed-Dgraph convention).
const AUTH_HEADER: &str = "X-Auth-Token";

/// A GraphQL endpoint reached over HTTP.
///
/// Transport failures (connect, send, non-2xx status, unreadable body) are
/// reported as [`AppError::Transport`]; a well-formed reply carrying a
/// GraphQL `errors` array or no `data` payload is reported as
/// [`AppError::Remote`].
pub struct HttpClient {
    url: String,
    token: Option<String>,
    client: reqwest::Client,
}

impl HttpClient {
    /// Creates a client for the given endpoint URL.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            token: None,
            client: reqwest::Client::new(),
        }
    }

    /// Attaches an auth token, sent as the `X-Auth-Token` header.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Returns the endpoint URL this client posts to.
    pub fn url(&self) -> &str {
        &self.url
    }
}

#[derive(Serialize)]
struct GraphRequest<'a> {
    query: &'a str,
}

#[derive(Deserialize)]
struct GraphReply {
    #[serde(default)]
    data: Option<JsonValue>,
    #[serde(default)]
    errors: Vec<GraphReplyError>,
}

#[derive(Deserialize)]
struct GraphReplyError {
    #[serde(default)]
    message: String,
}

#[async_trait]
impl GraphExecutor for HttpClient {
    async fn execute(&self, document: &str) -> Result<JsonValue, AppError> {
        let mut request = self
            .client
            .post(&self.url)
            .json(&GraphRequest { query: document });
        if let Some(token) = &self.token {
            request = request.header(AUTH_HEADER, token);
        }

        let response = request.send().await?.error_for_status()?;
        let reply: GraphReply = response.json().await?;

        if !reply.errors.is_empty() {
            let messages: Vec<String> = reply.errors.into_iter().map(|e| e.message).collect();
            return Err(AppError::Remote(messages.join("; ")));
        }

        reply
            .data
            .ok_or_else(|| AppError::Remote("reply carried no data".to_string()))
    }
}

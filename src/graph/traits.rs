//! Core trait for the GraphQL execution capability.
//!
//! The data-access layer consumes exactly one capability: execute a GraphQL
//! document against the remote database and hand back the reply's `data`
//! payload. Everything above this seam - document construction, payload
//! decoding, success verification - is owned by the repositories.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value as JsonValue;

use crate::error::AppError;

/// Executes GraphQL documents against a remote graph database.
///
/// An implementation performs one request/response round trip per call. It
/// reports transport and execution failures; it never interprets payload
/// semantics. Cancellation is the caller's: dropping the returned future
/// aborts the in-flight call.
#[async_trait]
pub trait GraphExecutor: Send + Sync {
    /// Executes one GraphQL document and returns the reply's `data` payload.
    async fn execute(&self, document: &str) -> Result<JsonValue, AppError>;
}

/// Extension trait decoding the reply payload into a typed result.
///
/// This trait is automatically implemented for all [`GraphExecutor`] types,
/// allowing call sites to write `executor.query::<Shape>(document)` with the
/// response shape matching the subtree the document asked for.
#[async_trait]
pub trait QueryExt: GraphExecutor {
    /// Executes the document and decodes the `data` payload into `T`.
    ///
    /// A payload that does not match the expected shape is reported as
    /// [`AppError::InconsistentResponse`]. Transport-level success is never
    /// taken as operation success; the caller still verifies the decoded
    /// payload.
    async fn query<T>(&self, document: &str) -> Result<T, AppError>
    where
        T: DeserializeOwned + Send,
    {
        let data = self.execute(document).await?;
        serde_json::from_value(data).map_err(|e| {
            AppError::InconsistentResponse(format!("failed to decode response: {}", e))
        })
    }
}

// Blanket implementation for all GraphExecutor types, trait objects included
impl<E: GraphExecutor + ?Sized> QueryExt for E {}

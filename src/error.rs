//! Application error types for advisory data access.

use thiserror::Error;

/// Application-level errors for Wayfare.
#[derive(Error, Debug)]
pub enum AppError {
    /// No advisory is currently linked to the requested city.
    ///
    /// Returned verbatim and never wrapped so callers can branch on it
    /// with [`AppError::is_not_found`].
    #[error("advisory not found")]
    NotFound,

    /// An input violated an operation precondition. Caller bug, not retryable.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    // Remote call failures
    #[error("graphql transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("graphql error: {0}")]
    Remote(String),

    /// The remote call succeeded at the transport level but its payload
    /// violates the expected success shape (wrong count, missing id,
    /// undecodable body).
    #[error("inconsistent response: {0}")]
    InconsistentResponse(String),

    /// A failure wrapped with the phrase of the operation that hit it.
    #[error("{context}: {source}")]
    Context {
        context: &'static str,
        source: Box<AppError>,
    },

    // Config errors
    #[error("configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),
}

impl AppError {
    /// Wraps the error with an operation context phrase, preserving the
    /// original error as the cause.
    ///
    /// [`AppError::NotFound`] passes through untouched so it stays matchable
    /// by kind at every level of the call chain.
    pub fn wrap(self, context: &'static str) -> AppError {
        match self {
            AppError::NotFound => AppError::NotFound,
            err => AppError::Context {
                context,
                source: Box::new(err),
            },
        }
    }

    /// True when the error is the `NotFound` kind.
    pub fn is_not_found(&self) -> bool {
        matches!(self, AppError::NotFound)
    }
}

//! Graph database access layer.
//!
//! This module provides the seam between the advisory data-access code and
//! the remote GraphQL-speaking graph database:
//!
//! - [`GraphExecutor`] - the injected execution capability (one document in,
//!   one `data` payload out)
//! - [`QueryExt`] - typed decoding of the reply payload
//! - [`string_literal`] / [`float_literal`] - literal rendering for
//!   hand-built documents
//!
//! # Usage
//!
//! ```ignore
//! use wayfare::graph::{GraphExecutor, QueryExt};
//!
//! let result: OneResult = executor.query(&document).await?;
//! ```
//!
//! Repositories own the document text and the response shapes; backends own
//! the wire. Neither side leaks into the other.

mod traits;
mod value;

pub mod backends;

// Re-export core types
pub use traits::{GraphExecutor, QueryExt};
pub use value::{float_literal, string_literal};

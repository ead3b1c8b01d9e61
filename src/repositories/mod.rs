//! Data access layer for advisory operations.
//!
//! Repositories own the GraphQL documents and their response shapes, and
//! reach the database through the injected
//! [`GraphExecutor`](crate::graph::GraphExecutor) capability.

mod advisory;

pub use advisory::AdvisoryRepository;

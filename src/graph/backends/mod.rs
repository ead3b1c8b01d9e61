//! Backend implementations for the GraphQL execution capability.
//!
//! Each backend implements [`GraphExecutor`](crate::graph::GraphExecutor):
//!
//! 1. Accept one GraphQL document per call
//! 2. Perform the round trip against the remote database
//! 3. Return the reply's `data` payload, or the transport/execution error
//!
//! # Available Backends
//!
//! | Backend | Module | Status |
//! |---------|--------|--------|
//! | GraphQL over HTTP | [`http`] | Available |
//!
//! Tests substitute scripted in-memory executors instead of a backend.

pub mod http;

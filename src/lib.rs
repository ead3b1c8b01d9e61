//! Wayfare - Travel Advisory Data Layer
//!
//! Manages travel/safety advisory records and their single-valued link to a
//! city through a GraphQL-speaking graph database.

pub mod cli;
pub mod config;
pub mod error;
pub mod graph;
pub mod models;
pub mod repositories;

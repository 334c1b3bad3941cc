//! AWS-oriented adapters and handlers for the static site function.
//!
//! This crate owns runtime integration details (configuration, the static
//! asset adapter and the Lambda handler). Contracts and classification come
//! from `site_dispatch_core`.

pub mod adapters;
pub mod config;
pub mod handlers;

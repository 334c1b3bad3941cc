//! Shared request dispatch primitives for the static site function.
//!
//! This crate owns the invocation/response contracts and the deterministic
//! classification of an inbound event. It intentionally excludes the Lambda
//! runtime, filesystem access and clock concerns; those live in
//! `site_dispatch_lambda`.

pub mod classify;
pub mod contract;
pub mod error;

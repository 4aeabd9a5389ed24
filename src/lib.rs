//! CyberShield dashboard service library.
//!
//! Exposes the core simulation and filtering components together with the
//! HTTP API surface so that integration tests and benches can drive them.

pub mod api;
pub mod config;
pub mod core;
pub mod models;

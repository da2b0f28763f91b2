//! # Blog API
//!
//! The blog post resource served over Actix-web. The binary in `main.rs` wires
//! these modules together; integration tests build the same app in-process.

pub mod config;
pub mod handlers;
pub mod middleware;
pub mod observability;
pub mod state;
pub mod telemetry;

//! Adapters - Implementations of port interfaces.
//!
//! - `content` - Tip catalog sources (built-in tables, YAML files)
//! - `http` - REST API built on axum

pub mod content;
pub mod http;

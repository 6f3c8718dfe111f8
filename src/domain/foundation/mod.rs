//! Foundation module - Shared domain primitives.
//!
//! Contains the error vocabulary shared by every rule table.

mod errors;

pub use errors::{DomainError, ErrorCode, ValidationError};

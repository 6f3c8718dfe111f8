//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain rules for the HTTP adapters.
//! Following CQRS, it separates command handlers (acknowledgements) from
//! query handlers (content lookups). Nothing here keeps state between calls.

pub mod handlers;

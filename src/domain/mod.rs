//! Domain layer containing the branching rules and their value types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared error vocabulary
//! - `care` - Budget based specialist recommendation and appointment booking
//! - `tips` - Health tips per demographic category
//! - `education` - Quiz modules, answer intake and progress
//! - `dashboard` - Patient profile and vitals chart series
//!
//! Every rule here is a pure function of its input: no I/O, no shared state.

pub mod care;
pub mod dashboard;
pub mod education;
pub mod foundation;
pub mod tips;

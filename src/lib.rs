//! BioSentinel+ - Patient health dashboard backend
//!
//! Serves the dashboard overview, cost-based specialist recommendations,
//! gender-specific health tips and the health education quizzes over a JSON
//! API. The recommendation rules are pure functions in [`domain`]; the
//! [`adapters::http`] layer only parses requests and maps errors.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;

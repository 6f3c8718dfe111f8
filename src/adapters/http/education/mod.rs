//! Education HTTP adapter module.

pub mod handlers;
pub mod routes;

pub use routes::education_routes;

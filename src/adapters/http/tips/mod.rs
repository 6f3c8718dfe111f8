//! Tips HTTP adapter module.

pub mod handlers;
pub mod routes;

pub use routes::tips_routes;

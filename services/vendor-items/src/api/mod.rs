//! HTTP API 层

pub mod csrf;
mod routes;

pub use routes::build_router;

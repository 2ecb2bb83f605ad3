//! API server module exposing analysis over REST

pub mod handlers;
pub mod routes;
pub mod server;
pub mod types;

pub use server::build_router;
pub use server::serve_api;

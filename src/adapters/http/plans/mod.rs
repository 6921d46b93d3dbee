//! Plan and participant endpoints.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use routes::plans_routes;

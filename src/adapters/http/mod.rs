//! HTTP adapters - REST API implementation.
//!
//! Each feature has its own dto/handlers/routes triple; `router` assembles
//! them into the application router with tracing, CORS, and timeout layers.

pub mod advisor;
pub mod auth;
pub mod campaigns;
pub mod plans;
pub mod response;
pub mod router;
pub mod state;
pub mod valueprop;

pub use router::api_router;
pub use state::AppState;

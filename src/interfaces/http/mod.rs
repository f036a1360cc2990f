//! HTTP REST API interfaces
//!
//! - `middleware`: bearer-token authentication
//! - `modules`: request handlers and DTOs per resource
//! - `router`: API router with Swagger documentation

pub mod common;
pub mod middleware;
pub mod modules;
pub mod router;

pub use router::{create_api_router, ApiContext, ApiDoc};

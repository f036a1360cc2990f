//! # Hotel Booking Service
//!
//! REST API for a small hotel-booking system: token authentication,
//! hotel and room catalog, room search, and reservations guarded by a
//! date-overlap check.
//!
//! ## Architecture
//!
//! - **domain**: entities, repository traits and the authorization policy
//! - **application**: catalog, booking and identity services
//! - **infrastructure**: SeaORM persistence, JWT and password hashing
//! - **interfaces**: axum router, handlers and OpenAPI docs
//! - **server**: runtime wiring and graceful shutdown

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;
pub mod server;
pub mod shared;

pub use config::{default_config_path, AppConfig, ConfigError};

pub use infrastructure::{init_database, run_migrations, DatabaseConfig};

pub use interfaces::{create_api_router, ApiContext};

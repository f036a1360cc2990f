//! Identity module — registration & authentication
//!
//! Contains the `UserService` which orchestrates registration, login,
//! token refresh/verification, and the bootstrap superuser.

pub mod service;

pub use service::{AccessToken, AuthTokens, UserService};

//! Authentication module — register, login, token refresh and verify

pub mod dto;
pub mod handlers;

pub use dto::*;
pub use handlers::*;

//! Catalog module — hotels and rooms
//!
//! Reads are open to any authenticated user; every mutation requires a
//! superuser.

pub mod service;

pub use service::CatalogService;

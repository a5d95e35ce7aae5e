//! Content Dashboard Library
//!
//! A content aggregation and retrieval service: normalizes news, movie and
//! social payloads into one item shape, keeps everything in an in-process
//! store, and serves paginated listing, substring search, trending,
//! per-user favorites, preferences and manual feed ordering over HTTP.
//!
//! # Modules
//!
//! - `handlers`: HTTP request handlers
//! - `models`: Content, user, favorite and ordering data structures
//! - `services`: Business logic (aggregation and feed reads)
//! - `store`: In-memory store, the sole owner of mutable state
//! - `error`: Error types and HTTP mapping
//! - `routes`: Route table shared by the binary and tests
//! - `config`: Configuration management
//! - `openapi`: API documentation

pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod openapi;
pub mod routes;
pub mod services;
pub mod store;

pub use config::Config;
pub use error::{AppError, Result};

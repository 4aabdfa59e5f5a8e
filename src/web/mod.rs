//! Web layer for Filedrop.
//!
//! This module provides the HTTP surface: the upload endpoint, the JSON and
//! HTML listings, static serving of stored files and the frontend fallback.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod openapi;
pub mod router;
pub mod server;

pub use error::ApiError;
pub use router::create_router;
pub use server::WebServer;

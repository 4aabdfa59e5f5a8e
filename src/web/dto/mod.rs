//! Data Transfer Objects for the Filedrop web layer.

pub mod response;

pub use response::*;

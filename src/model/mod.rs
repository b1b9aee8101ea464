//! Wire DTOs returned by the HTTP API.
//!
//! Field names here are the JSON contract; server-side domain models convert into these at
//! the controller boundary.

pub mod api;
pub mod ranking;
pub mod siege;
pub mod stats;

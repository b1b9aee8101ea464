//! HTTP request handlers.
//!
//! Controllers extract path parameters, call the matching service, and convert domain
//! models into DTOs. They never touch the store directly.

pub mod siege;

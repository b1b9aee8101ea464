//! Server-side domain models.
//!
//! Domain models are converted from entity models at the repository boundary and
//! transformed to DTOs at the controller boundary. Missing-data placeholders are applied
//! here, not in the data layer.

pub mod ranking;
pub mod siege;
pub mod stats;

/// Placeholder returned instead of a name when a siege has no ranking rows.
pub const NO_RESULT: &str = "—";

//! Siege domain models.

use chrono::{DateTime, Utc};

use crate::model::siege::SiegeSummaryDto;

/// A recorded siege event.
#[derive(Debug, Clone, PartialEq)]
pub struct Siege {
    pub id: i32,
    pub date: DateTime<Utc>,
    pub name: Option<String>,
    pub description: Option<String>,
}

impl Siege {
    /// Converts an entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::siege::Model) -> Self {
        Self {
            id: entity.id,
            date: entity.date,
            name: entity.name,
            description: entity.description,
        }
    }
}

/// A siege together with the names of its top guild and MVP.
///
/// Both names are already resolved to the `"—"` placeholder when missing or when the
/// lookup failed.
#[derive(Debug, Clone, PartialEq)]
pub struct SiegeWithHighlights {
    pub siege: Siege,
    pub top_guild: String,
    pub mvp: String,
}

impl SiegeWithHighlights {
    pub fn into_dto(self) -> SiegeSummaryDto {
        SiegeSummaryDto {
            id: self.siege.id,
            date: self.siege.date,
            name: self.siege.name,
            description: self.siege.description,
            top_guild: self.top_guild,
            mvp: self.mvp,
        }
    }
}

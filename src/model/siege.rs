use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

/// A siege as listed by `GET /sieges`, with its winning guild and MVP attached.
#[derive(Serialize, PartialEq, Clone, Debug, ToSchema)]
pub struct SiegeSummaryDto {
    pub id: i32,
    pub date: DateTime<Utc>,
    pub name: Option<String>,
    pub description: Option<String>,
    /// Name of the highest scoring guild, `"—"` when the siege has no guild rankings.
    #[serde(rename = "topGuild")]
    pub top_guild: String,
    /// Name of the highest scoring player, `"—"` when the siege has no player rankings.
    pub mvp: String,
}

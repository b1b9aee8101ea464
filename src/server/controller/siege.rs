use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        ranking::{MvpDto, RankingsDto, TopGuildDto},
        siege::SiegeSummaryDto,
        stats::PlayerStatDto,
    },
    server::{
        error::AppError,
        model::{ranking::Rankings, siege::SiegeWithHighlights, stats::PlayerStatLine},
        service::{ranking::RankingService, siege::SiegeService, stats::StatsService},
        state::AppState,
        util::parse::parse_siege_id,
    },
};

/// Tag for grouping siege endpoints in OpenAPI documentation
pub static SIEGE_TAG: &str = "siege";

/// List all sieges.
///
/// Returns every recorded siege, most recent first, each with the name of its top guild
/// and MVP. Sieges without rankings, or whose ranking lookup failed, report `"—"`.
///
/// # Arguments
/// - `state` - Application state containing the data store
///
/// # Returns
/// - `200 OK` - List of sieges with highlights
/// - `500 Internal Server Error` - Siege listing failed
#[utoipa::path(
    get,
    path = "/sieges",
    tag = SIEGE_TAG,
    responses(
        (status = 200, description = "Sieges with top guild and MVP", body = Vec<SiegeSummaryDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_sieges(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = SiegeService::new(state.store.as_ref());

    let sieges = service.list_with_highlights().await?;

    Ok(Json(
        sieges
            .into_iter()
            .map(SiegeWithHighlights::into_dto)
            .collect::<Vec<_>>(),
    ))
}

/// Get guild and player rankings of a siege.
///
/// Both lists are ordered by score descending. Unknown or malformed siege ids yield two
/// empty lists.
///
/// # Arguments
/// - `state` - Application state containing the data store
/// - `id` - Siege id
///
/// # Returns
/// - `200 OK` - Guild and player rankings
/// - `500 Internal Server Error` - Ranking lookup failed
#[utoipa::path(
    get,
    path = "/sieges/{id}/rankings",
    tag = SIEGE_TAG,
    params(
        ("id" = String, Path, description = "Siege id")
    ),
    responses(
        (status = 200, description = "Guild and player rankings", body = RankingsDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_rankings(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let rankings = match parse_siege_id(&id) {
        Some(siege_id) => {
            RankingService::new(state.store.as_ref())
                .get_rankings(siege_id)
                .await?
        }
        None => Rankings::default(),
    };

    Ok(Json(rankings.into_dto()))
}

/// Get the top guild of a siege.
///
/// # Returns
/// - `200 OK` - Highest scoring guild, or `{"guild_name": "—"}` without guild rankings
/// - `500 Internal Server Error` - Ranking lookup failed
#[utoipa::path(
    get,
    path = "/sieges/{id}/topGuild",
    tag = SIEGE_TAG,
    params(
        ("id" = String, Path, description = "Siege id")
    ),
    responses(
        (status = 200, description = "Top guild or placeholder", body = TopGuildDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_top_guild(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let top = match parse_siege_id(&id) {
        Some(siege_id) => {
            RankingService::new(state.store.as_ref())
                .get_top_guild(siege_id)
                .await?
        }
        None => None,
    };

    Ok(Json(TopGuildDto::from(top)))
}

/// Get the MVP of a siege.
///
/// # Returns
/// - `200 OK` - Highest scoring player, or `{"player_name": "—"}` without player rankings
/// - `500 Internal Server Error` - Ranking lookup failed
#[utoipa::path(
    get,
    path = "/sieges/{id}/mvp",
    tag = SIEGE_TAG,
    params(
        ("id" = String, Path, description = "Siege id")
    ),
    responses(
        (status = 200, description = "MVP or placeholder", body = MvpDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_mvp(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let mvp = match parse_siege_id(&id) {
        Some(siege_id) => {
            RankingService::new(state.store.as_ref())
                .get_mvp(siege_id)
                .await?
        }
        None => None,
    };

    Ok(Json(MvpDto::from(mvp)))
}

/// Get per-player statistics of a siege.
///
/// Each player line carries totals plus the kills and deaths of every life. Missing guild
/// names are reported as `"No Guild"` and missing numbers as `0`.
///
/// # Arguments
/// - `state` - Application state containing the data store and kill/death lookup strategy
/// - `id` - Siege id
///
/// # Returns
/// - `200 OK` - Aggregated player statistics
/// - `404 Not Found` - Siege does not exist or has no statistics
/// - `500 Internal Server Error` - Statistics lookup failed
#[utoipa::path(
    get,
    path = "/sieges/{id}/stats",
    tag = SIEGE_TAG,
    params(
        ("id" = String, Path, description = "Siege id")
    ),
    responses(
        (status = 200, description = "Aggregated player statistics", body = Vec<PlayerStatDto>),
        (status = 404, description = "Siege not found or without statistics", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_stats(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let siege_id =
        parse_siege_id(&id).ok_or_else(|| AppError::NotFound("Siege not found".to_string()))?;

    let service = StatsService::new(state.store.as_ref(), state.child_lookup);

    let lines = service.get_player_stats(siege_id).await?;

    Ok(Json(
        lines
            .into_iter()
            .map(PlayerStatLine::into_dto)
            .collect::<Vec<_>>(),
    ))
}

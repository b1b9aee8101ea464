use axum::{routing::get, Json, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;

use crate::{
    model::{
        api::ErrorDto,
        ranking::{GuildRankingDto, MvpDto, PlayerRankingDto, RankingsDto, TopGuildDto},
        siege::SiegeSummaryDto,
        stats::{LifeDeathDto, LifeKillDto, PlayerStatDto},
    },
    server::{
        controller::siege::{get_mvp, get_rankings, get_sieges, get_stats, get_top_guild},
        state::AppState,
    },
};

/// OpenAPI document built from the handler annotations.
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::server::controller::siege::get_sieges,
        crate::server::controller::siege::get_rankings,
        crate::server::controller::siege::get_top_guild,
        crate::server::controller::siege::get_mvp,
        crate::server::controller::siege::get_stats,
    ),
    components(schemas(
        ErrorDto,
        SiegeSummaryDto,
        GuildRankingDto,
        PlayerRankingDto,
        RankingsDto,
        TopGuildDto,
        MvpDto,
        LifeKillDto,
        LifeDeathDto,
        PlayerStatDto,
    )),
    tags((name = "siege", description = "Siege results, rankings and player statistics"))
)]
pub struct ApiDoc;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/sieges", get(get_sieges))
        .route("/sieges/{id}/rankings", get(get_rankings))
        .route("/sieges/{id}/topGuild", get(get_top_guild))
        .route("/sieges/{id}/mvp", get(get_mvp))
        .route("/sieges/{id}/stats", get(get_stats))
        .route("/api-docs/openapi.json", get(openapi))
}

/// Builds the complete application with state, request tracing and permissive CORS.
pub fn app(state: AppState) -> Router {
    router()
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

async fn openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

use axum::extract::{Path, Query, State};
use axum::routing::get;
use axum::{Json, Router};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use stockcast_core::config::Settings;
use stockcast_core::domain::explanation::Explanation;
use stockcast_core::domain::history::HistoricalSeries;
use stockcast_core::domain::market::{MarketMovers, MarketSummary, MostWatched};
use stockcast_core::domain::prediction::PredictionResult;
use stockcast_core::domain::stock::{StockDetails, StockSummary};
use stockcast_core::market::catalog::{DEFAULT_SEARCH_LIMIT, DEFAULT_SNAPSHOT_LIMIT};
use stockcast_core::{explain, generate, market};

use crate::envelope::{ApiResult, Envelope};

const DEFAULT_HISTORY_TIMEFRAME: &str = "1m";
const DEFAULT_PREDICTION_TIMEFRAME: &str = "3m";

#[derive(Debug, Clone)]
pub struct AppState {
    pub settings: Arc<Settings>,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/stocks", get(search_stocks))
        .route("/api/stocks/:symbol", get(get_stock_details))
        .route("/api/stocks/:symbol/historical", get(get_historical))
        .route("/api/stocks/:symbol/predict", get(get_prediction))
        .route("/api/market/summary", get(get_market_summary))
        .route("/api/market/movers", get(get_market_movers))
        .route("/api/market/most-watched", get(get_most_watched))
        .with_state(state)
}

// Query values are taken as raw strings so a malformed limit falls back to the default
// instead of rejecting the request.
#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    pub query: Option<String>,
    pub limit: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct LimitParams {
    pub limit: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct TimeframeParams {
    pub timeframe: Option<String>,
}

fn parse_limit(raw: Option<&str>, default: usize) -> usize {
    raw.and_then(|s| s.trim().parse::<usize>().ok())
        .unwrap_or(default)
}

fn timeframe_or<'a>(raw: &'a Option<String>, default: &'a str) -> &'a str {
    raw.as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or(default)
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub timestamp: DateTime<Utc>,
    pub version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        timestamp: Utc::now(),
        version: env!("CARGO_PKG_VERSION"),
    })
}

async fn search_stocks(Query(params): Query<SearchParams>) -> ApiResult<Vec<StockSummary>> {
    let query = params.query.as_deref().unwrap_or("");
    let limit = parse_limit(params.limit.as_deref(), DEFAULT_SEARCH_LIMIT);
    Ok(Envelope::ok(market::search_stocks(query, limit)))
}

async fn get_stock_details(Path(symbol): Path<String>) -> ApiResult<StockDetails> {
    let details = generate::stock_details(&symbol, Utc::now())?;
    Ok(Envelope::ok(details))
}

async fn get_historical(
    State(state): State<AppState>,
    Path(symbol): Path<String>,
    Query(params): Query<TimeframeParams>,
) -> ApiResult<HistoricalSeries> {
    let timeframe = timeframe_or(&params.timeframe, DEFAULT_HISTORY_TIMEFRAME);
    let series = generate::generate_history(
        &symbol,
        timeframe,
        Utc::now(),
        &state.settings.attribution,
    )?;
    Ok(Envelope::ok(series))
}

#[derive(Debug, Serialize)]
pub struct PredictionPayload {
    pub prediction: PredictionResult,
    pub explanation: Explanation,
}

async fn get_prediction(
    State(state): State<AppState>,
    Path(symbol): Path<String>,
    Query(params): Query<TimeframeParams>,
) -> ApiResult<PredictionPayload> {
    let timeframe = timeframe_or(&params.timeframe, DEFAULT_PREDICTION_TIMEFRAME);
    let now = Utc::now();
    let attribution = &state.settings.attribution;

    let prediction = generate::generate_prediction(&symbol, timeframe, now, attribution)?;
    let explanation = explain::explain(&symbol, &prediction, now, attribution);

    Ok(Envelope::ok(PredictionPayload {
        prediction,
        explanation,
    }))
}

async fn get_market_summary(State(state): State<AppState>) -> ApiResult<MarketSummary> {
    Ok(Envelope::ok(market::market_summary(
        Utc::now(),
        &state.settings.attribution,
    )))
}

async fn get_market_movers(
    State(state): State<AppState>,
    Query(params): Query<LimitParams>,
) -> ApiResult<MarketMovers> {
    let limit = parse_limit(params.limit.as_deref(), DEFAULT_SNAPSHOT_LIMIT);
    Ok(Envelope::ok(market::market_movers(
        limit,
        Utc::now(),
        &state.settings.attribution,
    )))
}

async fn get_most_watched(
    State(state): State<AppState>,
    Query(params): Query<LimitParams>,
) -> ApiResult<MostWatched> {
    let limit = parse_limit(params.limit.as_deref(), DEFAULT_SNAPSHOT_LIMIT);
    Ok(Envelope::ok(market::most_watched(
        limit,
        Utc::now(),
        &state.settings.attribution,
    )))
}

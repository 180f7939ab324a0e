//! Restaurants API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::{Deserialize, Serialize};
use shared::hours::{ParsedHours, parse_hours_detailed};
use shared::models::Restaurant;

use crate::core::ServerState;
use crate::utils::time::parse_query_datetime;
use crate::utils::{AppError, AppResult};

#[derive(Debug, Deserialize)]
pub struct OpenQuery {
    pub datetime: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct OpenResponse {
    /// Echo of the queried instant
    pub datetime: String,
    pub open_restaurants: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct ScheduleQuery {
    pub hours: Option<String>,
}

/// List every restaurant with its parsed schedule
pub async fn list(State(state): State<ServerState>) -> Json<Vec<Restaurant>> {
    Json(state.directory.restaurants().to_vec())
}

/// Restaurants open at `?datetime=YYYY-MM-DDTHH:MM:SS`
pub async fn open(
    State(state): State<ServerState>,
    Query(query): Query<OpenQuery>,
) -> AppResult<Json<OpenResponse>> {
    let raw = query
        .datetime
        .filter(|s| !s.is_empty())
        .ok_or_else(|| AppError::required("datetime"))?;
    let at = parse_query_datetime(&raw)?;

    let open_restaurants: Vec<String> = state
        .directory
        .open_at(at)
        .into_iter()
        .map(String::from)
        .collect();

    tracing::debug!(datetime = %raw, open = open_restaurants.len(), "Open restaurants query");

    Ok(Json(OpenResponse {
        datetime: raw,
        open_restaurants,
    }))
}

/// Parse a raw hours string and report what each segment produced
pub async fn schedule(Query(query): Query<ScheduleQuery>) -> AppResult<Json<ParsedHours>> {
    let hours = query.hours.ok_or_else(|| AppError::required("hours"))?;
    let parsed = parse_hours_detailed(&hours)?;
    Ok(Json(parsed))
}

/// Single restaurant by exact name
pub async fn get_by_name(
    State(state): State<ServerState>,
    Path(name): Path<String>,
) -> AppResult<Json<Restaurant>> {
    state
        .directory
        .find(&name)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::restaurant_not_found(name))
}

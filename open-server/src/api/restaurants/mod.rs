//! Restaurants API Module

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub use handler::{OpenQuery, OpenResponse, ScheduleQuery};

/// Restaurants router
pub fn router() -> Router<ServerState> {
    Router::new().nest("/restaurants", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list))
        .route("/open", get(handler::open))
        .route("/schedule", get(handler::schedule))
        .route("/{name}", get(handler::get_by_name))
}

use crate::models::{HealthResponse, HelloResponse};
use crate::state::AppState;
use axum::{Json, extract::State};
use types::heatmap::HeatmapCell;
use types::project::Project;

pub async fn hello() -> Json<HelloResponse> {
    Json(HelloResponse {
        message: "Hello from Backend!",
    })
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

pub async fn list_projects(State(state): State<AppState>) -> Json<Vec<Project>> {
    Json(state.catalog.projects.clone())
}

pub async fn heatmap(State(state): State<AppState>) -> Json<Vec<HeatmapCell>> {
    Json(state.catalog.heatmap.clone())
}

use crate::error::AppError;
use crate::models::{PlaceBidRequest, PlaceBidResponse};
use crate::state::AppState;
use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use types::spot::SpotView;

pub async fn list_spots(State(state): State<AppState>) -> Json<Vec<SpotView>> {
    Json(state.ledger.list_spots())
}

pub async fn place_bid(
    State(state): State<AppState>,
    payload: Result<Json<PlaceBidRequest>, JsonRejection>,
) -> Result<Json<PlaceBidResponse>, AppError> {
    let Json(payload) = payload.map_err(|e| AppError::BadRequest(e.body_text()))?;

    let new_bid = state.ledger.place_bid(payload.spot_id, payload.bid_amount)?;

    Ok(Json(PlaceBidResponse {
        success: true,
        new_bid,
    }))
}

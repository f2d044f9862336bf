use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use rust_decimal::Decimal;
use serde_json::json;
use thiserror::Error;
use types::errors::{BidError, MatchError};

/// Central error type for the Gateway application
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bid rejected: minimum bid is {minimum_bid}")]
    BidRejected { minimum_bid: Decimal },

    #[error("Internal server error")]
    InternalError(#[from] anyhow::Error),
}

impl From<MatchError> for AppError {
    fn from(err: MatchError) -> Self {
        match err {
            MatchError::ProjectNotFound { .. } => AppError::NotFound(err.to_string()),
        }
    }
}

impl From<BidError> for AppError {
    fn from(err: BidError) -> Self {
        match err {
            BidError::MissingFields => AppError::BadRequest(err.to_string()),
            BidError::SpotNotFound { .. } => AppError::NotFound(err.to_string()),
            BidError::BelowMinimum { minimum } => AppError::BidRejected {
                minimum_bid: minimum,
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::BadRequest(msg) => (
                StatusCode::BAD_REQUEST,
                json!({ "success": false, "error": "BAD_REQUEST", "message": msg }),
            ),
            AppError::NotFound(msg) => (
                StatusCode::NOT_FOUND,
                json!({ "success": false, "error": "NOT_FOUND", "message": msg }),
            ),
            AppError::BidRejected { minimum_bid } => (
                StatusCode::BAD_REQUEST,
                json!({
                    "success": false,
                    "error": "BID_TOO_LOW",
                    "message": BidError::BelowMinimum { minimum: minimum_bid }.to_string(),
                    "minimum_bid": types::numeric::to_json(minimum_bid),
                }),
            ),
            AppError::InternalError(err) => {
                tracing::error!(?err, "internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({
                        "success": false,
                        "error": "INTERNAL_ERROR",
                        "message": "Internal server error",
                    }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

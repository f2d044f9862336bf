use crate::error::AppError;
use crate::state::AppState;
use axum::{
    Json,
    extract::{Path, State, rejection::PathRejection},
};
use types::brand::BrandMatch;
use types::ids::ProjectId;

pub async fn match_brands(
    State(state): State<AppState>,
    project_id: Result<Path<u64>, PathRejection>,
) -> Result<Json<Vec<BrandMatch>>, AppError> {
    let Path(project_id) =
        project_id.map_err(|_| AppError::BadRequest("project_id must be an integer".into()))?;

    let matches = matching_engine::match_brands(
        ProjectId::new(project_id),
        &state.catalog.projects,
        &state.catalog.brands,
    )?;

    Ok(Json(matches))
}

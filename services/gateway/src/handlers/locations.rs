use crate::models::LocationSearchParams;
use crate::state::AppState;
use axum::{
    Json,
    extract::{Query, State},
};
use catalog::LocationQuery;
use types::location::Location;

pub async fn search_locations(
    State(state): State<AppState>,
    Query(params): Query<LocationSearchParams>,
) -> Json<Vec<Location>> {
    let query = LocationQuery::from_params(
        params.city.as_deref(),
        params.area_min.as_deref(),
        params.rent_max.as_deref(),
        params.kind.as_deref(),
    );
    tracing::debug!(?query, "location search");

    Json(catalog::search(&state.catalog.locations, &query))
}

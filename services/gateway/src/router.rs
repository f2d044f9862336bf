use crate::handlers::{bidding, listing, locations, matching};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub fn create_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/hello", get(listing::hello))
        .route("/projects", get(listing::list_projects))
        .route("/match/{project_id}", get(matching::match_brands))
        .route("/bidding/spots", get(bidding::list_spots))
        .route("/bidding/bid", post(bidding::place_bid))
        .route("/locations/search", get(locations::search_locations))
        .route("/heatmap", get(listing::heatmap));

    Router::new()
        .nest("/api", api_routes)
        .route("/health", get(listing::health))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

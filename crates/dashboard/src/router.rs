use std::path::Path;

use axum::{Router, extract::State, response::Html, routing::get};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the dashboard routes
///
/// - `GET /` serves the rendered page
/// - `GET {images_route}/{movie_id}.jpg` serves poster files from `assets_dir`
pub fn create_router(state: AppState, images_route: &str, assets_dir: &Path) -> Router {
    Router::new()
        .route("/", get(index))
        .nest_service(images_route, ServeDir::new(assets_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn index(State(state): State<AppState>) -> Html<String> {
    Html(state.page.to_string())
}

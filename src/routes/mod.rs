use std::sync::Arc;

use axum::{routing::get, Extension, Router};
use tower_http::trace::TraceLayer;

use crate::{
    handlers::{posts::posts_handler, root},
    AppState,
};

pub fn create_routes(app_state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(root))
        .nest("/posts", posts_handler())
        .layer(TraceLayer::new_for_http())
        .layer(Extension(app_state))
}

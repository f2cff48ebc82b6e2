use axum::Router;
use axum::routing::{get, post};

use super::handlers::{create_paste, get_paste, healthz, index, view_paste};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/api/healthz", get(healthz))
        .route("/api/pastes", post(create_paste))
        .route("/api/pastes/{id}", get(get_paste))
        .route("/p/{id}", get(view_paste))
        .with_state(state)
}

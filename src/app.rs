use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/settings", post(handlers::settings_form))
        .route("/toggle/:week/:day", post(handlers::toggle_form))
        .route("/midweek/:week", post(handlers::midweek_form))
        .route("/api/table", get(handlers::get_table))
        .route("/api/settings", post(handlers::update_settings))
        .route("/api/toggle", post(handlers::toggle))
        .route("/api/midweek", post(handlers::midweek))
        .with_state(state)
}

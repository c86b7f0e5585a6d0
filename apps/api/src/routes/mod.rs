pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::parttime::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/parttime",
            post(handlers::handle_create_posting).get(handlers::handle_list_postings),
        )
        .route(
            "/parttime/parse-contact",
            post(handlers::handle_parse_contact),
        )
        .route(
            "/parttime/parse-requirements",
            post(handlers::handle_parse_requirements),
        )
        .route(
            "/parttime/:id",
            get(handlers::handle_get_posting)
                .put(handlers::handle_update_posting)
                .delete(handlers::handle_delete_posting),
        )
        .with_state(state)
}

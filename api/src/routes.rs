use axum::{
    routing::{get, post},
    Router,
};

use crate::{captain_handlers, handlers, state::AppState, user_handlers};

pub fn root_routes() -> Router<AppState> {
    Router::new().route("/", get(handlers::root))
}

pub fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health_check))
}

pub fn user_routes() -> Router<AppState> {
    Router::new().route("/users/register", post(user_handlers::register_user))
}

pub fn captain_routes() -> Router<AppState> {
    Router::new().route("/captains/register", post(captain_handlers::register_captain))
}

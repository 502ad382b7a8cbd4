use axum::{
    routing::{delete, get, patch, post},
    Router,
};

use crate::server::{
    controller::{appeal, auth, ban},
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/auth/login", get(auth::login))
        .route("/api/auth/callback", get(auth::callback))
        .route("/api/auth/logout", get(auth::logout))
        .route("/api/auth/user", get(auth::get_user))
        .route("/api/bans", post(ban::create_ban))
        .route("/api/bans", get(ban::list_bans))
        .route("/api/bans/lookup", get(ban::lookup_ban))
        .route("/api/bans/{id}", get(ban::get_ban))
        .route("/api/bans/{id}", patch(ban::update_ban))
        .route("/api/bans/{id}", delete(ban::delete_ban))
        .route("/api/appeals", post(appeal::create_appeal))
        .route("/api/appeals", get(appeal::list_appeals))
        .route("/api/appeals/{id}", get(appeal::get_appeal))
        .route("/api/appeals/{id}", patch(appeal::update_appeal))
        .route("/api/appeals/{id}", delete(appeal::delete_appeal))
}

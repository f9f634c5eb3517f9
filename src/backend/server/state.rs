/**
 * Application State
 *
 * Central state container handed to the router. Everything in it is cheap
 * to clone: the connection pool and the reqwest client are handles, the
 * config is behind an `Arc`, and the session keys clone their key material.
 *
 * There is no other shared mutable state: sessions live entirely in the
 * client-held token, so the server is stateless across requests and
 * horizontally scalable by construction. The store is the sole shared
 * mutable resource.
 */

use crate::backend::auth::sessions::SessionKeys;
use crate::backend::recommendations::places::PlacesClient;
use crate::backend::server::config::Config;
use axum::extract::FromRef;
use sqlx::PgPool;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub session_keys: SessionKeys,
    pub places: PlacesClient,
    pub config: Arc<Config>,
}

impl FromRef<AppState> for PgPool {
    fn from_ref(state: &AppState) -> PgPool {
        state.db.clone()
    }
}

impl FromRef<AppState> for SessionKeys {
    fn from_ref(state: &AppState) -> SessionKeys {
        state.session_keys.clone()
    }
}

impl FromRef<AppState> for PlacesClient {
    fn from_ref(state: &AppState) -> PlacesClient {
        state.places.clone()
    }
}

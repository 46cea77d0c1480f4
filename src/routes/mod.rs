use axum::Router;
use sqlx::SqlitePool;
use tower_http::cors::CorsLayer;

use crate::Config;

mod get_data;
mod health;
mod insert_data;

// ---

pub fn router(pool: SqlitePool, config: Config) -> Router {
    // ---
    Router::new()
        .merge(insert_data::router())
        .merge(get_data::router())
        .merge(health::router())
        // All origins permitted on all routes
        .layer(CorsLayer::permissive())
        .with_state((pool, config))
}

//! Retrieval endpoint for the soilsense backend.
//!
//! Defines `GET /get_data`, which returns every stored reading newest first.
//! No filtering, pagination, or field projection; every call returns the
//! full table.

use axum::{extract::State, routing::get, Json, Router};
use sqlx::SqlitePool;
use tracing::info;

use crate::error::ApiError;
use crate::models::{ReadingsResponse, StoredReading};
use crate::Config;

// ---

pub fn router() -> Router<(SqlitePool, Config)> {
    // ---
    Router::new().route("/get_data", get(handler))
}

/// Handle `GET /get_data`.
///
/// Rows come back in descending `id` order, i.e. most-recently-inserted
/// first. An empty table yields an empty `data` list, not an error.
async fn handler(
    State((pool, _config)): State<(SqlitePool, Config)>,
) -> Result<Json<ReadingsResponse>, ApiError> {
    // ---
    let data: Vec<StoredReading> = sqlx::query_as(
        r#"
        SELECT id, temperature, humidity, pressure, soilMoisture, ph, nutrientIndex, recorded_at
        FROM sensor_data
        ORDER BY id DESC
        "#,
    )
    .fetch_all(&pool)
    .await?;

    info!("GET /get_data - returning {} readings", data.len());

    Ok(Json(ReadingsResponse {
        success: true,
        data,
    }))
}

//! Ingestion endpoint for the soilsense backend.
//!
//! Defines `POST /insert_data`, which accepts one six-field sensor reading,
//! stamps it with the current UTC time, and appends it to the store as a
//! single transactional insert. Exports a subrouter to the gateway
//! (`mod.rs`) following the Explicit Module Boundary Pattern (EMBP).

use axum::{
    extract::rejection::JsonRejection, extract::State, routing::post, Json, Router,
};
use sqlx::SqlitePool;
use tracing::{debug, info};

use crate::error::ApiError;
use crate::models::{recorded_at_now, InsertResponse, RawReading};
use crate::Config;

// ---

pub fn router() -> Router<(SqlitePool, Config)> {
    // ---
    Router::new().route("/insert_data", post(handler))
}

/// Handle `POST /insert_data`.
///
/// Checks run in order: an unparseable body fails as an invalid format, a
/// payload with any absent or null sensor value fails as missing values,
/// and only then is the reading stamped and written. Exactly one row is
/// appended on success; no row is appended on any failure path.
async fn handler(
    State((pool, _config)): State<(SqlitePool, Config)>,
    payload: Result<Json<RawReading>, JsonRejection>,
) -> Result<Json<InsertResponse>, ApiError> {
    // ---
    let Json(raw) = payload.map_err(|rejection| {
        debug!("POST /insert_data - rejected body: {}", rejection);
        ApiError::InvalidFormat
    })?;

    let reading = raw.validate()?;

    // Server clock, never the caller's
    let recorded_at = recorded_at_now();

    // Single-statement transaction; dropping `tx` on an error path rolls back.
    let mut tx = pool.begin().await?;
    sqlx::query(
        r#"
        INSERT INTO sensor_data
            (temperature, humidity, pressure, soilMoisture, ph, nutrientIndex, recorded_at)
        VALUES (?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(reading.temperature)
    .bind(reading.humidity)
    .bind(reading.pressure)
    .bind(reading.soil_moisture)
    .bind(reading.ph)
    .bind(reading.nutrient_index)
    .bind(&recorded_at)
    .execute(&mut *tx)
    .await?;
    tx.commit().await?;

    info!("POST /insert_data - stored reading at {}", recorded_at);

    Ok(Json(InsertResponse {
        success: true,
        message: "Data inserted successfully",
    }))
}

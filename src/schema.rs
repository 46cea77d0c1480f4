//! Store schema management for `soilsense-telemetry`.
//!
//! Ensures the reading table exists before serving requests.
//! Applied once on startup from `main.rs` (EMBP: single gateway call);
//! a failure here is fatal and the process does not start.

use anyhow::Result;
use sqlx::SqlitePool;

// ---

/// Create the reading schema (idempotent).
///
/// Safe to call on every startup; no-op if the table already exists.
/// `recorded_at` deliberately has no default: the application stamps every
/// row itself so the value is always UTC at second precision.
///
/// Errors are propagated if the SQL execution fails.
pub async fn create_schema(pool: &SqlitePool) -> Result<()> {
    // ---
    let mut tx = pool.begin().await?;

    // Single table served by /insert_data and /get_data
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS sensor_data (
            id            INTEGER PRIMARY KEY AUTOINCREMENT,
            temperature   REAL NOT NULL,
            humidity      REAL NOT NULL,
            pressure      REAL NOT NULL,
            soilMoisture  REAL NOT NULL,
            ph            REAL NOT NULL,
            nutrientIndex REAL NOT NULL,
            recorded_at   TEXT NOT NULL
        );
        "#,
    )
    .execute(&mut *tx)
    .await?;

    tx.commit().await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    // ---
    use super::*;
    use sqlx::sqlite::SqlitePoolOptions;

    async fn memory_pool() -> SqlitePool {
        // ---
        SqlitePoolOptions::new()
            .min_connections(1)
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect("sqlite::memory:")
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn create_schema_is_idempotent() {
        // ---
        let pool = memory_pool().await;

        create_schema(&pool).await.unwrap();
        create_schema(&pool).await.unwrap();

        sqlx::query(
            "INSERT INTO sensor_data \
             (temperature, humidity, pressure, soilMoisture, ph, nutrientIndex, recorded_at) \
             VALUES (1, 2, 3, 4, 5, 6, '2026-01-01T00:00:00Z')",
        )
        .execute(&pool)
        .await
        .unwrap();
    }

    #[tokio::test]
    async fn ids_are_assigned_in_insertion_order() {
        // ---
        let pool = memory_pool().await;
        create_schema(&pool).await.unwrap();

        for n in 1..=3 {
            sqlx::query(
                "INSERT INTO sensor_data \
                 (temperature, humidity, pressure, soilMoisture, ph, nutrientIndex, recorded_at) \
                 VALUES (?, 0, 0, 0, 0, 0, '2026-01-01T00:00:00Z')",
            )
            .bind(n as f64)
            .execute(&pool)
            .await
            .unwrap();
        }

        let ids: Vec<(i64,)> = sqlx::query_as("SELECT id FROM sensor_data ORDER BY temperature")
            .fetch_all(&pool)
            .await
            .unwrap();

        assert_eq!(
            ids.into_iter().map(|(id,)| id).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
    }
}

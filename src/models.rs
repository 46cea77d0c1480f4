//! Data models for sensor readings and API response bodies.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::error::ApiError;

// ---

/// Wire format of `recorded_at`: second precision, always UTC.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Inbound payload for `POST /insert_data`.
///
/// Every field deserializes as optional so that an absent field and an
/// explicit null both land as `None` and can be rejected with the dedicated
/// missing-values message instead of a generic parse error. A value of the
/// wrong JSON type (e.g. a string) still fails deserialization outright.
#[derive(Debug, Deserialize)]
pub struct RawReading {
    // ---
    pub temperature: Option<f64>,
    pub humidity: Option<f64>,
    pub pressure: Option<f64>,
    #[serde(rename = "soilMoisture")]
    pub soil_moisture: Option<f64>,
    pub ph: Option<f64>,
    #[serde(rename = "nutrientIndex")]
    pub nutrient_index: Option<f64>,
}

/// A fully validated reading, ready to be stamped and inserted.
#[derive(Debug)]
pub struct NewReading {
    // ---
    pub temperature: f64,
    pub humidity: f64,
    pub pressure: f64,
    pub soil_moisture: f64,
    pub ph: f64,
    pub nutrient_index: f64,
}

impl RawReading {
    /// Check all six sensor values in a single pass.
    ///
    /// Zero is a valid value; only absent or null fields fail.
    pub fn validate(&self) -> Result<NewReading, ApiError> {
        // ---
        match (
            self.temperature,
            self.humidity,
            self.pressure,
            self.soil_moisture,
            self.ph,
            self.nutrient_index,
        ) {
            (
                Some(temperature),
                Some(humidity),
                Some(pressure),
                Some(soil_moisture),
                Some(ph),
                Some(nutrient_index),
            ) => Ok(NewReading {
                temperature,
                humidity,
                pressure,
                soil_moisture,
                ph,
                nutrient_index,
            }),
            _ => Err(ApiError::MissingField),
        }
    }
}

/// Format the current wall-clock time for `recorded_at`.
///
/// Always UTC regardless of server locale; no sub-second component.
pub fn recorded_at_now() -> String {
    Utc::now().format(TIMESTAMP_FORMAT).to_string()
}

// ---

/// One persisted reading row, serialized for `GET /get_data`.
#[derive(Debug, Serialize, sqlx::FromRow)]
pub struct StoredReading {
    // ---
    pub id: i64,
    pub temperature: f64,
    pub humidity: f64,
    pub pressure: f64,
    #[serde(rename = "soilMoisture")]
    #[sqlx(rename = "soilMoisture")]
    pub soil_moisture: f64,
    pub ph: f64,
    #[serde(rename = "nutrientIndex")]
    #[sqlx(rename = "nutrientIndex")]
    pub nutrient_index: f64,
    pub recorded_at: String,
}

/// Body of a successful insert.
#[derive(Debug, Serialize)]
pub struct InsertResponse {
    pub success: bool,
    pub message: &'static str,
}

/// Body of a successful retrieval.
#[derive(Debug, Serialize)]
pub struct ReadingsResponse {
    pub success: bool,
    pub data: Vec<StoredReading>,
}

#[cfg(test)]
mod tests {
    // ---
    use super::*;
    use chrono::NaiveDateTime;

    fn full_reading() -> RawReading {
        // ---
        RawReading {
            temperature: Some(21.5),
            humidity: Some(48.2),
            pressure: Some(1013.25),
            soil_moisture: Some(37.0),
            ph: Some(6.8),
            nutrient_index: Some(42.0),
        }
    }

    #[test]
    fn validate_accepts_complete_reading() {
        // ---
        let reading = full_reading().validate().unwrap();

        assert_eq!(reading.temperature, 21.5);
        assert_eq!(reading.humidity, 48.2);
        assert_eq!(reading.pressure, 1013.25);
        assert_eq!(reading.soil_moisture, 37.0);
        assert_eq!(reading.ph, 6.8);
        assert_eq!(reading.nutrient_index, 42.0);
    }

    #[test]
    fn validate_rejects_any_missing_field() {
        // ---
        let mut raw = full_reading();
        raw.pressure = None;
        assert!(matches!(raw.validate(), Err(ApiError::MissingField)));

        let mut raw = full_reading();
        raw.nutrient_index = None;
        assert!(matches!(raw.validate(), Err(ApiError::MissingField)));
    }

    #[test]
    fn zero_is_a_valid_value_not_a_missing_one() {
        // ---
        let mut raw = full_reading();
        raw.soil_moisture = Some(0.0);
        raw.ph = Some(0.0);

        let reading = raw.validate().unwrap();
        assert_eq!(reading.soil_moisture, 0.0);
        assert_eq!(reading.ph, 0.0);
    }

    #[test]
    fn absent_and_null_fields_both_deserialize_to_none() {
        // ---
        let absent: RawReading = serde_json::from_str(r#"{"temperature": 1.0}"#).unwrap();
        assert_eq!(absent.temperature, Some(1.0));
        assert!(absent.humidity.is_none());

        let null: RawReading =
            serde_json::from_str(r#"{"temperature": 1.0, "ph": null}"#).unwrap();
        assert!(null.ph.is_none());
    }

    #[test]
    fn non_numeric_value_fails_to_deserialize() {
        // ---
        let result = serde_json::from_str::<RawReading>(r#"{"temperature": "hot"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn recorded_at_matches_wire_format() {
        // ---
        let stamp = recorded_at_now();
        assert!(stamp.ends_with('Z'));

        let parsed = NaiveDateTime::parse_from_str(&stamp, TIMESTAMP_FORMAT).unwrap();
        let delta = (parsed.and_utc() - Utc::now()).num_seconds().abs();
        assert!(delta <= 2, "timestamp not near current time: {stamp}");
    }

    #[test]
    fn stored_reading_serializes_wire_field_names() {
        // ---
        let reading = StoredReading {
            id: 1,
            temperature: 21.5,
            humidity: 48.2,
            pressure: 1013.25,
            soil_moisture: 37.0,
            ph: 6.8,
            nutrient_index: 42.0,
            recorded_at: "2026-01-01T00:00:00Z".to_string(),
        };

        let value = serde_json::to_value(&reading).unwrap();
        assert_eq!(value["soilMoisture"], 37.0);
        assert_eq!(value["nutrientIndex"], 42.0);
        assert_eq!(value["recorded_at"], "2026-01-01T00:00:00Z");
    }
}

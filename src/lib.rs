//! Library surface for the `soilsense-telemetry` service.
//!
//! The binary in `main.rs` wires these modules together; they are exposed
//! as a library so integration tests can build the real router against a
//! test store. Module boundaries follow the Explicit Module Boundary
//! Pattern (EMBP): `schema` owns store setup, `config` owns environment
//! parsing, and `routes` is the single gateway for endpoint registration.

pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod schema;

pub use config::Config;
pub use models::{RawReading, StoredReading};

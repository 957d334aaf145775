//! laptrace-core - Core types and lap synthesis for the laptrace backend
//!
//! This crate holds everything below the HTTP layer: the request/response
//! data model, the synthetic lap generator, and the column-major table
//! shape shared by the upload and demo endpoints.
//!
//! # Usage
//!
//! ```ignore
//! use laptrace_core::{synthesize_lap, CarParameters};
//!
//! let params = CarParameters::default();
//! let dataset = synthesize_lap(&params)?;
//! let table = dataset.to_table();
//! ```

pub mod error;
pub mod models;
pub mod synth;
pub mod table;

pub use error::{TelemetryError, TelemetryResult};
pub use models::*;
pub use synth::{synthesize_lap, synthesize_lap_with_rng, SAMPLE_RATE_HZ};
pub use table::DataTable;

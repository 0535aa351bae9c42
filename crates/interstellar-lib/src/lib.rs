//! Interstellar travel planning library entry points.
//!
//! This crate ingests two flat text files — celestial records (systems,
//! stars, planets, satellites) and directed inter-system connections — into
//! an in-memory [`Starmap`], and lets callers assemble and validate a
//! [`FlightPath`] against the resulting directed graph. Higher-level
//! consumers (the CLI) should only depend on the items exported here
//! instead of reimplementing behavior.

#![deny(warnings)]

pub mod error;
pub mod flightpath;
pub mod ingest;
pub mod starmap;
pub mod stats;

pub use error::{Error, Result};
pub use flightpath::FlightPath;
pub use ingest::{
    apply_celestial_line, apply_connection_line, load_celestials, load_connections,
    ConnectionReport, IngestError, IngestReport,
};
pub use starmap::{BodyKind, Celestial, Planet, Satellite, Star, Starmap, System, SystemId};
pub use stats::{collect_stats, StarmapStats};

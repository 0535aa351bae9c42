//! Line-oriented ingestion for the two flat data files.
//!
//! The celestial file defines systems and their bodies; the connections
//! file defines directed edges between systems. Both parsers work a line at
//! a time so callers that own the storage layer can hand lines in directly,
//! with `BufRead` drivers layered on top for the common file case.
//!
//! Every problem in the celestial file is a recoverable [`IngestError`]
//! event: the offending line is skipped, the event is collected into the
//! [`IngestReport`], and ingestion continues to end-of-input. The
//! connections parser instead skips unusable lines silently; that asymmetry
//! is part of the source contract and is preserved here.

use std::io::BufRead;

use thiserror::Error;
use tracing::{debug, warn};

use crate::error::Result;
use crate::starmap::{BodyKind, Celestial, Planet, Satellite, Star, Starmap};

/// Field delimiter for both data files.
pub const DELIMITER: char = ',';

/// Spectral type given to a star created by forward reference.
pub const PLACEHOLDER_SPECTRAL_TYPE: &str = "unknown";
/// Temperature given to a star created by forward reference.
pub const PLACEHOLDER_TEMPERATURE: f64 = 0.0;
/// Mass given to a star created by forward reference.
pub const PLACEHOLDER_MASS: f64 = 0.0;
/// Orbital period given to a planet created by forward reference.
pub const PLACEHOLDER_ORBITAL_PERIOD: f64 = 0.0;
/// Radius given to a planet created by forward reference.
pub const PLACEHOLDER_RADIUS: f64 = 0.0;

/// Exact field count after the keyword for Star, Planet, and Satellite
/// records. System records carry a single field.
const RECORD_FIELDS: usize = 5;

/// Literal marking a satellite as natural; anything else is human made.
const NATURAL_LITERAL: &str = "Yes";

/// Recoverable per-line ingestion event.
///
/// Each carries the 1-based line number and the offending line so callers
/// can report it; none of them aborts the overall read.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IngestError {
    /// A celestial line contained no delimiter at all.
    #[error("bad data line {line_number}: no comma found: {line}")]
    NoDelimiterFound { line_number: usize, line: String },

    /// The leading keyword was not System, Star, Planet, or Satellite.
    #[error("bad data line {line_number}: invalid celestial type '{keyword}': {line}")]
    InvalidRecordKeyword {
        line_number: usize,
        keyword: String,
        line: String,
    },

    /// The record did not carry the exact field count for its keyword.
    #[error("bad data line {line_number}: mismatched data amount: {line}")]
    MalformedRecord { line_number: usize, line: String },

    /// A non-empty numeric field failed to parse as a float.
    #[error("bad data line {line_number}: invalid numeric field '{value}': {line}")]
    InvalidNumericField {
        line_number: usize,
        value: String,
        line: String,
    },
}

/// Outcome of driving the celestial parser over a whole input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IngestReport {
    /// Total lines consumed, including blanks and comments.
    pub lines_read: usize,
    /// Lines that parsed as a record, counting dedup no-ops.
    pub records_applied: usize,
    /// Recoverable events for every skipped bad line, in input order.
    pub errors: Vec<IngestError>,
}

impl IngestReport {
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Outcome of driving the connection parser over a whole input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConnectionReport {
    /// Total lines consumed, including blanks and comments.
    pub lines_read: usize,
    /// Directed edges actually added (dedup no-ops excluded).
    pub connections_added: usize,
}

/// Apply a single line of the celestial data file to the map.
///
/// Returns `Ok(true)` when the line carried a record (including dedup
/// no-ops), `Ok(false)` for blank lines and `#` comments, and the
/// recoverable event for a bad line. No partial entity is ever created for
/// a line that fails mid-parse.
pub fn apply_celestial_line(
    map: &mut Starmap,
    line_number: usize,
    line: &str,
) -> std::result::Result<bool, IngestError> {
    if line.is_empty() || line.starts_with('#') {
        return Ok(false);
    }

    let Some((keyword, rest)) = line.split_once(DELIMITER) else {
        return Err(IngestError::NoDelimiterFound {
            line_number,
            line: line.to_string(),
        });
    };

    match keyword {
        "System" => apply_system_record(map, line_number, line, rest),
        "Star" => apply_star_record(map, line_number, line, rest),
        "Planet" => apply_planet_record(map, line_number, line, rest),
        "Satellite" => apply_satellite_record(map, line_number, line, rest),
        other => {
            return Err(IngestError::InvalidRecordKeyword {
                line_number,
                keyword: other.to_string(),
                line: line.to_string(),
            })
        }
    }?;

    Ok(true)
}

/// Drive [`apply_celestial_line`] over every line of `reader`.
///
/// IO failures are fatal; per-line parse failures are warned, collected
/// into the report, and skipped.
pub fn load_celestials<R: BufRead>(reader: R, map: &mut Starmap) -> Result<IngestReport> {
    let mut report = IngestReport::default();
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        report.lines_read += 1;
        match apply_celestial_line(map, index + 1, &line) {
            Ok(true) => report.records_applied += 1,
            Ok(false) => {}
            Err(error) => {
                warn!(%error, "skipping celestial data line");
                report.errors.push(error);
            }
        }
    }
    debug!(
        lines = report.lines_read,
        records = report.records_applied,
        errors = report.errors.len(),
        "celestial ingestion complete"
    );
    Ok(report)
}

/// Apply a single line of the connections file to the map.
///
/// Returns the number of directed edges added. Unlike the celestial parser,
/// unusable input is skipped silently: a line without a delimiter, an
/// unresolved source system, and unresolved target names all drop without
/// producing an event. The connections file can never create systems.
pub fn apply_connection_line(map: &mut Starmap, line: &str) -> usize {
    if line.is_empty() || line.starts_with('#') {
        return 0;
    }

    let Some((source_name, rest)) = line.split_once(DELIMITER) else {
        return 0;
    };

    let Some(source) = map.system_id_by_name(source_name) else {
        debug!(source = source_name, "skipping connections for unknown source system");
        return 0;
    };

    let mut added = 0;
    for candidate in rest.split(DELIMITER) {
        if candidate.is_empty() {
            continue;
        }
        match map.system_id_by_name(candidate) {
            Some(target) => {
                if map.add_connection(source, target) {
                    added += 1;
                }
            }
            None => debug!(target = candidate, "dropping unresolved connection target"),
        }
    }
    added
}

/// Drive [`apply_connection_line`] over every line of `reader`.
pub fn load_connections<R: BufRead>(reader: R, map: &mut Starmap) -> Result<ConnectionReport> {
    let mut report = ConnectionReport::default();
    for line in reader.lines() {
        let line = line?;
        report.lines_read += 1;
        report.connections_added += apply_connection_line(map, &line);
    }
    debug!(
        lines = report.lines_read,
        connections = report.connections_added,
        "connection ingestion complete"
    );
    Ok(report)
}

fn apply_system_record(
    map: &mut Starmap,
    line_number: usize,
    line: &str,
    rest: &str,
) -> std::result::Result<(), IngestError> {
    // System records carry exactly one field: the name.
    if rest.contains(DELIMITER) {
        return Err(malformed(line_number, line));
    }
    map.insert_system(rest);
    Ok(())
}

fn apply_star_record(
    map: &mut Starmap,
    line_number: usize,
    line: &str,
    rest: &str,
) -> std::result::Result<(), IngestError> {
    let [name, system_name, spectral_type, temperature, mass] =
        split_record(line_number, line, rest)?;
    let temperature = parse_float(line_number, line, temperature)?;
    let mass = parse_float(line_number, line, mass)?;

    // Re-ingesting a star that already exists in its system is a no-op.
    if let Some(id) = map.system_id_by_name(system_name) {
        if let Some(system) = map.get(id) {
            if system.has_body(BodyKind::Star, name) {
                return Ok(());
            }
        }
    }

    let id = map.insert_system(system_name);
    map.system_mut(id)
        .insert_body(Celestial::Star(Star::new(name, spectral_type, temperature, mass)));
    Ok(())
}

fn apply_planet_record(
    map: &mut Starmap,
    line_number: usize,
    line: &str,
    rest: &str,
) -> std::result::Result<(), IngestError> {
    let [name, star_name, system_name, orbital_period, radius] =
        split_record(line_number, line, rest)?;
    let orbital_period = parse_float(line_number, line, orbital_period)?;
    let radius = parse_float(line_number, line, radius)?;

    let id = map.insert_system(system_name);
    if !map.get(id).is_some_and(|system| system.has_body(BodyKind::Star, star_name)) {
        // Forward reference: the orbited star has not been defined yet.
        map.system_mut(id).insert_body(Celestial::Star(Star::new(
            star_name,
            PLACEHOLDER_SPECTRAL_TYPE,
            PLACEHOLDER_TEMPERATURE,
            PLACEHOLDER_MASS,
        )));
    }

    // Planets are never deduplicated; re-ingesting the same record yields a
    // second planet with the same name. The star/planet orbit relation is
    // implicit in the source data and is not materialized as a link.
    map.system_mut(id)
        .insert_body(Celestial::Planet(Planet::new(name, orbital_period, radius)));
    Ok(())
}

fn apply_satellite_record(
    map: &mut Starmap,
    line_number: usize,
    line: &str,
    rest: &str,
) -> std::result::Result<(), IngestError> {
    let [name, planet_name, system_name, radius, natural_field] =
        split_record(line_number, line, rest)?;
    let radius = parse_float(line_number, line, radius)?;
    let mut natural = natural_field == NATURAL_LITERAL;

    let system_was_missing = map.system_id_by_name(system_name).is_none();
    let id = map.insert_system(system_name);
    if system_was_missing {
        // Contractual quirk: a satellite that forces its system into
        // existence is recorded as human made regardless of the input.
        natural = false;
    }

    let system = map.system_mut(id);
    if system.planet_mut(planet_name).is_none() {
        system.insert_body(Celestial::Planet(Planet::new(
            planet_name,
            PLACEHOLDER_ORBITAL_PERIOD,
            PLACEHOLDER_RADIUS,
        )));
    }
    if let Some(planet) = system.planet_mut(planet_name) {
        planet.add_satellite(Satellite::new(name, radius, natural));
    }
    Ok(())
}

fn split_record<'a>(
    line_number: usize,
    line: &str,
    rest: &'a str,
) -> std::result::Result<[&'a str; RECORD_FIELDS], IngestError> {
    let mut fields = rest.split(DELIMITER);
    let record = [(); RECORD_FIELDS].map(|_| fields.next());
    if fields.next().is_some() || record.iter().any(Option::is_none) {
        return Err(malformed(line_number, line));
    }
    Ok(record.map(|field| field.unwrap_or_default()))
}

fn parse_float(
    line_number: usize,
    line: &str,
    value: &str,
) -> std::result::Result<f64, IngestError> {
    // Empty numeric fields parse to 0.0 rather than failing.
    if value.is_empty() {
        return Ok(0.0);
    }
    value
        .parse::<f64>()
        .map_err(|_| IngestError::InvalidNumericField {
            line_number,
            value: value.to_string(),
            line: line.to_string(),
        })
}

fn malformed(line_number: usize, line: &str) -> IngestError {
    IngestError::MalformedRecord {
        line_number,
        line: line.to_string(),
    }
}

//! Caller-assembled flight paths and their validation.
//!
//! A path is an ordered sequence of system handles proposed as a route. It
//! never implies correctness until validated: validity means every
//! consecutive pair is linked by a directed connection in the stated order.

use crate::error::{Error, Result};
use crate::starmap::{Starmap, SystemId};

/// How many fuzzy suggestions an unresolved append carries.
const SUGGESTION_LIMIT: usize = 3;

/// An ordered sequence of system handles, empty by default.
///
/// The path holds handles into a caller-supplied [`Starmap`]; it never
/// copies systems and must not outlive the collection the handles came
/// from. Input termination for interactive path building (sentinel tokens
/// and the like) is a caller concern.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlightPath {
    steps: Vec<SystemId>,
}

impl FlightPath {
    pub fn new() -> Self {
        Self::default()
    }

    /// Steps in append order.
    pub fn steps(&self) -> &[SystemId] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Resolve `name` by exact match and append the system to the path.
    ///
    /// On failure the path is left unchanged and the error carries
    /// fuzzy-ranked suggestions for the caller to report.
    pub fn append(&mut self, map: &Starmap, name: &str) -> Result<SystemId> {
        let Some(id) = map.system_id_by_name(name) else {
            return Err(Error::UnknownSystem {
                name: name.to_string(),
                suggestions: map.fuzzy_system_matches(name, SUGGESTION_LIMIT),
            });
        };
        self.steps.push(id);
        Ok(id)
    }

    /// Reset the path to empty.
    pub fn clear(&mut self) {
        self.steps.clear();
    }

    /// Walk adjacent pairs against the directed connection relation.
    ///
    /// Paths of length 0 or 1 are vacuously valid. The first pair without a
    /// directed connection from the earlier system to a system named like
    /// the later one short-circuits to `false`. Read-only.
    pub fn is_valid(&self, map: &Starmap) -> bool {
        for pair in self.steps.windows(2) {
            let Some(next_name) = map.system_name(pair[1]) else {
                return false;
            };
            if !map.connection_exists(pair[0], next_name) {
                return false;
            }
        }
        true
    }

    /// Arrow-joined name sequence, e.g. `A -> B -> C`.
    pub fn route_string(&self, map: &Starmap) -> String {
        self.steps
            .iter()
            .map(|&id| map.system_name(id).unwrap_or("<unknown>"))
            .collect::<Vec<_>>()
            .join(" -> ")
    }

    /// Per-step connection-set rendering, one `NAME -> {A, B}` line per
    /// step, no trailing newline.
    pub fn connections_string(&self, map: &Starmap) -> String {
        self.steps
            .iter()
            .map(|&id| {
                format!(
                    "{} -> {}",
                    map.system_name(id).unwrap_or("<unknown>"),
                    map.connections_string(id)
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Multi-line describe of every system on the path, in order.
    pub fn describe_celestials(&self, map: &Starmap) -> String {
        self.steps
            .iter()
            .filter_map(|&id| map.get(id))
            .map(|system| system.describe())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

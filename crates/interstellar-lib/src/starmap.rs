use std::collections::HashMap;
use std::fmt;

/// Index of a system within the [`Starmap`] arena.
///
/// Connections and flight paths store these handles instead of owning
/// pointers, so the cyclic connection relation never creates ownership
/// cycles.
pub type SystemId = usize;

/// Similarity threshold below which fuzzy name matches are discarded.
const FUZZY_MATCH_THRESHOLD: f64 = 0.7;

/// Discriminant for the closed set of celestial body kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyKind {
    Star,
    Planet,
    Satellite,
}

impl fmt::Display for BodyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            BodyKind::Star => "Star",
            BodyKind::Planet => "Planet",
            BodyKind::Satellite => "Satellite",
        };
        f.write_str(value)
    }
}

/// A star within a system.
#[derive(Debug, Clone, PartialEq)]
pub struct Star {
    pub name: String,
    pub spectral_type: String,
    pub temperature: f64,
    pub mass: f64,
}

impl Star {
    pub fn new(
        name: impl Into<String>,
        spectral_type: impl Into<String>,
        temperature: f64,
        mass: f64,
    ) -> Self {
        Self {
            name: name.into(),
            spectral_type: spectral_type.into(),
            temperature,
            mass,
        }
    }

    /// Single-line human-readable rendering.
    pub fn describe(&self) -> String {
        format!(
            "Star {} of type {} with temperature {} and mass {}",
            self.name, self.spectral_type, self.temperature, self.mass
        )
    }
}

/// A planet within a system, owning the satellites that orbit it.
#[derive(Debug, Clone, PartialEq)]
pub struct Planet {
    pub name: String,
    pub orbital_period: f64,
    pub radius: f64,
    satellites: Vec<Satellite>,
}

impl Planet {
    pub fn new(name: impl Into<String>, orbital_period: f64, radius: f64) -> Self {
        Self {
            name: name.into(),
            orbital_period,
            radius,
            satellites: Vec::new(),
        }
    }

    /// Satellites in discovery order from the input, not physical order.
    pub fn satellites(&self) -> &[Satellite] {
        &self.satellites
    }

    /// Append a satellite to this planet's orbit.
    ///
    /// No name dedup is performed here; callers that want uniqueness check
    /// [`Planet::satellite_exists`] first.
    pub fn add_satellite(&mut self, satellite: Satellite) {
        self.satellites.push(satellite);
    }

    pub fn satellite_exists(&self, name: &str) -> bool {
        self.satellites.iter().any(|sat| sat.name == name)
    }

    pub fn num_satellites(&self) -> usize {
        self.satellites.len()
    }

    /// Multi-line rendering with each satellite indented under the planet.
    pub fn describe(&self) -> String {
        let mut details = format!(
            "Planet {} with orbital period {} and relative radius of {}",
            self.name, self.orbital_period, self.radius
        );
        for satellite in &self.satellites {
            details.push_str("\n    ");
            details.push_str(&satellite.describe());
        }
        details
    }
}

/// A satellite orbiting a planet.
#[derive(Debug, Clone, PartialEq)]
pub struct Satellite {
    pub name: String,
    pub radius: f64,
    pub natural: bool,
}

impl Satellite {
    pub fn new(name: impl Into<String>, radius: f64, natural: bool) -> Self {
        Self {
            name: name.into(),
            radius,
            natural,
        }
    }

    /// Single-line human-readable rendering.
    pub fn describe(&self) -> String {
        let origin = if self.natural {
            "is natural"
        } else {
            "is human made"
        };
        format!(
            "Satellite {} {} with radius of {}",
            self.name, origin, self.radius
        )
    }
}

/// Closed variant over the celestial body kinds a system can own.
#[derive(Debug, Clone, PartialEq)]
pub enum Celestial {
    Star(Star),
    Planet(Planet),
    Satellite(Satellite),
}

impl Celestial {
    /// Identity key within a system's body list; not globally unique.
    pub fn name(&self) -> &str {
        match self {
            Celestial::Star(star) => &star.name,
            Celestial::Planet(planet) => &planet.name,
            Celestial::Satellite(satellite) => &satellite.name,
        }
    }

    pub fn kind(&self) -> BodyKind {
        match self {
            Celestial::Star(_) => BodyKind::Star,
            Celestial::Planet(_) => BodyKind::Planet,
            Celestial::Satellite(_) => BodyKind::Satellite,
        }
    }

    /// Polymorphic rendering; may span multiple lines for planets.
    pub fn describe(&self) -> String {
        match self {
            Celestial::Star(star) => star.describe(),
            Celestial::Planet(planet) => planet.describe(),
            Celestial::Satellite(satellite) => satellite.describe(),
        }
    }
}

/// A named node in the directed graph, owning zero or more celestial bodies
/// and holding directed connections to other systems.
#[derive(Debug, Clone, PartialEq)]
pub struct System {
    name: String,
    bodies: Vec<Celestial>,
    connections: Vec<SystemId>,
}

impl System {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            bodies: Vec::new(),
            connections: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Bodies in insertion order. Satellites live inside their owning
    /// planet, not at this level.
    pub fn bodies(&self) -> &[Celestial] {
        &self.bodies
    }

    /// Directed connection targets in insertion order.
    pub fn connections(&self) -> &[SystemId] {
        &self.connections
    }

    /// Append a body to the flat body list.
    pub fn insert_body(&mut self, body: Celestial) {
        self.bodies.push(body);
    }

    /// Whether a body of the given kind and name already exists.
    pub fn has_body(&self, kind: BodyKind, name: &str) -> bool {
        self.bodies
            .iter()
            .any(|body| body.kind() == kind && body.name() == name)
    }

    pub(crate) fn planet_mut(&mut self, name: &str) -> Option<&mut Planet> {
        self.bodies.iter_mut().find_map(|body| match body {
            Celestial::Planet(planet) if planet.name == name => Some(planet),
            _ => None,
        })
    }

    pub fn num_bodies(&self) -> usize {
        self.bodies.len()
    }

    pub fn num_stars(&self) -> usize {
        self.count_kind(BodyKind::Star)
    }

    pub fn num_planets(&self) -> usize {
        self.count_kind(BodyKind::Planet)
    }

    /// Satellites are counted through their owning planets.
    pub fn num_satellites(&self) -> usize {
        self.bodies
            .iter()
            .map(|body| match body {
                Celestial::Planet(planet) => planet.num_satellites(),
                _ => 0,
            })
            .sum()
    }

    pub fn num_connections(&self) -> usize {
        self.connections.len()
    }

    fn count_kind(&self, kind: BodyKind) -> usize {
        self.bodies.iter().filter(|body| body.kind() == kind).count()
    }

    /// Multi-line rendering of the system and every body it owns, directly
    /// or indirectly.
    pub fn describe(&self) -> String {
        let mut details = self.name.clone();
        for body in &self.bodies {
            details.push_str("\n  ");
            details.push_str(&body.describe());
        }
        details
    }
}

/// Insertion-ordered arena of systems with an exact-name index.
///
/// The directed connection relation across systems forms the traversable
/// graph. System names are treated as unique keys, enforced at the
/// get-or-create insertion site.
#[derive(Debug, Clone, Default)]
pub struct Starmap {
    systems: Vec<System>,
    name_to_id: HashMap<String, SystemId>,
}

impl Starmap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.systems.len()
    }

    pub fn is_empty(&self) -> bool {
        self.systems.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &System> {
        self.systems.iter()
    }

    pub fn get(&self, id: SystemId) -> Option<&System> {
        self.systems.get(id)
    }

    /// Lookup a system identifier by its case-sensitive name.
    pub fn system_id_by_name(&self, name: &str) -> Option<SystemId> {
        self.name_to_id.get(name).copied()
    }

    /// Lookup a system name by identifier.
    pub fn system_name(&self, id: SystemId) -> Option<&str> {
        self.systems.get(id).map(|system| system.name())
    }

    /// Get-or-create a system by name, returning its handle.
    ///
    /// Re-inserting an existing name is a no-op that returns the existing
    /// handle, so the arena never holds two systems with the same name.
    pub fn insert_system(&mut self, name: &str) -> SystemId {
        if let Some(id) = self.system_id_by_name(name) {
            return id;
        }
        let id = self.systems.len();
        self.systems.push(System::new(name));
        self.name_to_id.insert(name.to_string(), id);
        id
    }

    /// Mutable access for same-crate ingestion code.
    ///
    /// Panics if `id` is out of range; callers only pass handles obtained
    /// from this map.
    pub(crate) fn system_mut(&mut self, id: SystemId) -> &mut System {
        &mut self.systems[id]
    }

    /// Add a directed connection from `source` to `target`.
    ///
    /// Membership is deduplicated by target identity or by equal target
    /// name; duplicates and out-of-range handles are no-ops. Self
    /// connections are not filtered. Returns whether an edge was added.
    pub fn add_connection(&mut self, source: SystemId, target: SystemId) -> bool {
        if source >= self.systems.len() || target >= self.systems.len() {
            return false;
        }
        let target_name = self.systems[target].name.clone();
        let duplicate = self.systems[source]
            .connections
            .iter()
            .any(|&existing| existing == target || self.systems[existing].name == target_name);
        if duplicate {
            return false;
        }
        self.systems[source].connections.push(target);
        true
    }

    /// Whether `source` has a directed connection to a system named
    /// `target_name`.
    pub fn connection_exists(&self, source: SystemId, target_name: &str) -> bool {
        self.systems.get(source).is_some_and(|system| {
            system
                .connections
                .iter()
                .any(|&target| self.system_name(target) == Some(target_name))
        })
    }

    /// Drop every connection while keeping the systems and their bodies.
    pub fn clear_connections(&mut self) {
        for system in &mut self.systems {
            system.connections.clear();
        }
    }

    /// Render a system's connection set as `{A, B, ...}`.
    pub fn connections_string(&self, id: SystemId) -> String {
        let mut details = String::from("{");
        if let Some(system) = self.get(id) {
            for (index, &target) in system.connections().iter().enumerate() {
                if index > 0 {
                    details.push_str(", ");
                }
                details.push_str(self.system_name(target).unwrap_or("<unknown>"));
            }
        }
        details.push('}');
        details
    }

    /// Closest system names to `name` by Jaro-Winkler similarity, best
    /// first, capped at `limit`.
    pub fn fuzzy_system_matches(&self, name: &str, limit: usize) -> Vec<String> {
        let mut scored: Vec<(f64, &str)> = self
            .systems
            .iter()
            .map(|system| (strsim::jaro_winkler(name, system.name()), system.name()))
            .filter(|(score, _)| *score >= FUZZY_MATCH_THRESHOLD)
            .collect();
        scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));
        scored
            .into_iter()
            .take(limit)
            .map(|(_, name)| name.to_string())
            .collect()
    }
}

//! Descriptive statistics over a loaded starmap.

use std::fmt;

use serde::Serialize;

use crate::starmap::Starmap;

/// Counts and connection statistics for a loaded collection.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct StarmapStats {
    pub systems: usize,
    pub stars: usize,
    pub planets: usize,
    pub satellites: usize,
    pub min_connections: usize,
    pub max_connections: usize,
    pub mean_connections: f64,
    pub median_connections: f64,
}

/// Collect per-kind body counts and min/max/mean/median of per-system
/// connection counts. An empty map yields all zeros.
pub fn collect_stats(map: &Starmap) -> StarmapStats {
    let mut stats = StarmapStats {
        systems: map.len(),
        ..StarmapStats::default()
    };

    let mut connection_counts = Vec::with_capacity(map.len());
    for system in map.iter() {
        stats.stars += system.num_stars();
        stats.planets += system.num_planets();
        stats.satellites += system.num_satellites();
        connection_counts.push(system.num_connections());
    }

    if connection_counts.is_empty() {
        return stats;
    }

    connection_counts.sort_unstable();
    stats.min_connections = connection_counts[0];
    stats.max_connections = connection_counts[connection_counts.len() - 1];
    stats.mean_connections =
        connection_counts.iter().sum::<usize>() as f64 / connection_counts.len() as f64;

    let middle = connection_counts.len() / 2;
    stats.median_connections = if connection_counts.len() % 2 == 0 {
        (connection_counts[middle - 1] + connection_counts[middle]) as f64 / 2.0
    } else {
        connection_counts[middle] as f64
    };

    stats
}

impl fmt::Display for StarmapStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Stats for Loaded Data")?;
        writeln!(f, "=====================")?;
        writeln!(f, "Number of Solar Systems: {}", self.systems)?;
        writeln!(f, "Number of Stars: {}", self.stars)?;
        writeln!(f, "Number of Planets: {}", self.planets)?;
        writeln!(f, "Number of Satellites: {}", self.satellites)?;
        writeln!(f, "Minimum Number of Connections: {}", self.min_connections)?;
        writeln!(f, "Maximum Number of Connections: {}", self.max_connections)?;
        writeln!(f, "Average Number of Connections: {}", self.mean_connections)?;
        write!(f, "Median Number of Connections: {}", self.median_connections)
    }
}

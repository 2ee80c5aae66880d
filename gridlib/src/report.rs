//! Results of a shortest path computation.
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::types::*;

/// Least cost from the source to a vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Distance {
    Reachable(Cost),
    Unreachable,
}

impl Distance {
    pub fn is_reachable(&self) -> bool {
        matches!(self, Distance::Reachable(_))
    }

    pub fn cost(&self) -> Option<Cost> {
        match self {
            Distance::Reachable(cost) => Some(*cost),
            Distance::Unreachable => None,
        }
    }
}

/// Outcome of the computation for a single vertex.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VertexDistance {
    pub vertex: VertexIndex,
    pub distance: Distance,
    /// The neighbor through which the final distance was set.
    /// `None` for the source and for unreachable vertices.
    pub predecessor: Option<VertexIndex>,
}

impl Serialize for VertexDistance {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(4))?;
        map.serialize_entry("vertex", &self.vertex)?;
        map.serialize_entry("reachable", &self.distance.is_reachable())?;
        map.serialize_entry("cost", &self.distance.cost())?;
        map.serialize_entry("predecessor", &self.predecessor)?;
        map.end()
    }
}

impl std::fmt::Display for VertexDistance {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let label = if self.vertex == POWER_SOURCE {
            "Power station"
        } else {
            "House"
        };
        match self.distance {
            Distance::Reachable(cost) => {
                write!(f, "{} {}: {} units of loss", label, self.vertex, cost)
            }
            Distance::Unreachable => write!(f, "{} {}: UNREACHABLE", label, self.vertex),
        }
    }
}

/// Distances from a source to every vertex of the network.
///
/// Computed fresh by [`crate::compute_distances`] and never updated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistanceReport {
    pub source: VertexIndex,
    /// One entry per vertex, ordered by vertex index.
    pub entries: Vec<VertexDistance>,
}

impl DistanceReport {
    /// Get the distance of the given vertex. Returns `None` if vertex does not exist.
    pub fn get(&self, vertex: VertexIndex) -> Option<Distance> {
        self.entries.get(vertex).map(|entry| entry.distance)
    }

    /// Costs as a plain vector, `None` for unreachable vertices.
    pub fn costs(&self) -> Vec<Option<Cost>> {
        self.entries.iter().map(|e| e.distance.cost()).collect()
    }

    /// Vertices that have no path to the source.
    pub fn unreachable(&self) -> Vec<VertexIndex> {
        self.entries
            .iter()
            .filter(|e| !e.distance.is_reachable())
            .map(|e| e.vertex)
            .collect()
    }

    /// Vertices from the source to `vertex` along the cheapest path.
    /// Returns `None` if `vertex` is unreachable or out of range.
    pub fn path_to(&self, vertex: VertexIndex) -> Option<Vec<VertexIndex>> {
        let entry = self.entries.get(vertex)?;
        if !entry.distance.is_reachable() {
            return None;
        }
        let mut path = vec![vertex];
        let mut current = entry;
        while let Some(previous) = current.predecessor {
            path.push(previous);
            current = self.entries.get(previous)?;
            // A predecessor chain is at most as long as the vertex count.
            if path.len() > self.entries.len() {
                return None;
            }
        }
        path.reverse();
        Some(path)
    }
}

impl Serialize for DistanceReport {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.entries.serialize(serializer)
    }
}

impl std::fmt::Display for DistanceReport {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(f, "Optimal paths from vertex {}:", self.source)?;
        for entry in self.entries.iter() {
            writeln!(f, "  {}", entry)?;
        }
        Ok(())
    }
}

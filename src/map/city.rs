use crate::core::types::AlienId;
use crate::map::direction::Direction;
use crate::map::graph::WorldMap;

/// A named node in the world graph.
///
/// Neighbor slots hold city names rather than references; the [`WorldMap`]
/// owns every `City` record and resolves names on demand. A destroyed city
/// keeps its slots as a tombstone but never participates in movement.
#[derive(Debug, Clone)]
pub struct City {
    pub name: String,
    neighbors: [Option<String>; 4],
    pub exists: bool,
    pub resident: Option<AlienId>,
}

impl City {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            neighbors: [None, None, None, None],
            exists: true,
            resident: None,
        }
    }

    /// Name of the neighbor reachable in `direction`, destroyed or not
    pub fn neighbor(&self, direction: Direction) -> Option<&str> {
        self.neighbors[direction.index()].as_deref()
    }

    pub(crate) fn set_neighbor(&mut self, direction: Direction, name: String) {
        self.neighbors[direction.index()] = Some(name);
    }

    /// Occupied neighbor slots in `Direction::ALL` order
    pub fn neighbors(&self) -> impl Iterator<Item = (Direction, &str)> + '_ {
        Direction::ALL
            .iter()
            .filter_map(move |&d| self.neighbor(d).map(|n| (d, n)))
    }

    /// True if this city is destroyed, or if every neighbor slot is empty or
    /// names a destroyed city. An alien standing here can no longer move,
    /// though it is not itself destroyed.
    pub fn is_isolated_or_destroyed(&self, map: &WorldMap) -> bool {
        if !self.exists {
            return true;
        }
        !self
            .neighbors()
            .any(|(_, n)| map.city(n).is_some_and(|c| c.exists))
    }
}

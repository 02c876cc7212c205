//! Aliens and the roster that issues their serial numbers

use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::core::types::AlienId;
use crate::map::WorldMap;
use crate::simulation::events::DestructionEvent;

/// A mobile agent occupying at most one city. Destroyed the moment it shares
/// a city with another alien, but kept as a record for step reporting.
#[derive(Debug, Clone)]
pub struct Alien {
    pub id: AlienId,
    pub steps: u32,
    pub alive: bool,
}

impl Alien {
    fn new(id: AlienId) -> Self {
        Self {
            id,
            steps: 0,
            alive: true,
        }
    }

    /// One move attempt from `origin`. The step counter increments whatever
    /// happens.
    ///
    /// Dead aliens and aliens on isolated-or-destroyed cities stay put.
    /// Otherwise one existing neighbor is chosen uniformly and the origin's
    /// resident migrates there. The returned `to` is the destination that was
    /// attempted, not necessarily where the alien survives - on a destruction
    /// the mover is marked dead here and the defender's death is left to the
    /// caller, which holds the roster.
    pub fn attempt_move(
        &mut self,
        origin: &str,
        map: &mut WorldMap,
        rng: &mut ChaCha8Rng,
    ) -> MoveOutcome {
        self.steps += 1;
        if !self.alive {
            return MoveOutcome::stayed(origin);
        }
        let Some(city) = map.city(origin) else {
            return MoveOutcome::stayed(origin);
        };
        if city.is_isolated_or_destroyed(map) {
            // Still alive, but no longer able to move
            return MoveOutcome::stayed(origin);
        }

        let candidates: Vec<String> = city
            .neighbors()
            .filter(|(_, n)| map.city(n).is_some_and(|c| c.exists))
            .map(|(_, n)| n.to_string())
            .collect();
        // Non-empty: the isolation check above saw at least one live neighbor
        let Some(dest) = candidates.choose(rng).cloned() else {
            return MoveOutcome::stayed(origin);
        };

        let destruction = map.migrate(origin, &dest);
        if destruction.is_some() {
            self.alive = false;
        }
        MoveOutcome {
            to: dest,
            destruction,
        }
    }
}

/// Result of a single move attempt
#[derive(Debug)]
pub struct MoveOutcome {
    /// The destination the alien attempted, or the origin if it stayed put
    pub to: String,
    /// Present when the move destroyed the destination
    pub destruction: Option<DestructionEvent>,
}

impl MoveOutcome {
    fn stayed(origin: &str) -> Self {
        Self {
            to: origin.to_string(),
            destruction: None,
        }
    }
}

/// Owns every alien for a run and the serial counter that numbers them.
///
/// Serials start at zero and double as indices into the roster, so lookups
/// are constant-time.
#[derive(Debug, Default)]
pub struct AlienRoster {
    aliens: Vec<Alien>,
    next_serial: u32,
}

impl AlienRoster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn spawn(&mut self) -> AlienId {
        let id = AlienId(self.next_serial);
        self.next_serial += 1;
        self.aliens.push(Alien::new(id));
        id
    }

    pub fn spawn_many(&mut self, count: usize) -> Vec<AlienId> {
        (0..count).map(|_| self.spawn()).collect()
    }

    pub fn get(&self, id: AlienId) -> Option<&Alien> {
        self.aliens.get(id.0 as usize)
    }

    pub fn get_mut(&mut self, id: AlienId) -> Option<&mut Alien> {
        self.aliens.get_mut(id.0 as usize)
    }

    pub fn kill(&mut self, id: AlienId) {
        if let Some(alien) = self.aliens.get_mut(id.0 as usize) {
            alien.alive = false;
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Alien> {
        self.aliens.iter()
    }

    pub fn len(&self) -> usize {
        self.aliens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.aliens.is_empty()
    }
}

//! WorldMap - the name-keyed city graph and the per-round movement protocol

use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;
use std::collections::HashMap;

use crate::alien::AlienRoster;
use crate::core::error::{InvasionError, Result};
use crate::core::types::AlienId;
use crate::map::city::City;
use crate::map::direction::Direction;
use crate::simulation::events::DestructionEvent;

/// The world graph. Exclusive owner of every [`City`] record, keyed by name.
///
/// Cities are created on first reference and never removed, only marked
/// non-existent when destroyed.
#[derive(Debug, Default)]
pub struct WorldMap {
    cities: HashMap<String, City>,
}

impl WorldMap {
    pub fn new() -> Self {
        Self {
            cities: HashMap::new(),
        }
    }

    pub fn city(&self, name: &str) -> Option<&City> {
        self.cities.get(name)
    }

    pub fn city_mut(&mut self, name: &str) -> Option<&mut City> {
        self.cities.get_mut(name)
    }

    /// The city only while it still exists; destroyed cities are invisible here
    pub fn get_exist_city(&self, name: &str) -> Option<&City> {
        self.cities.get(name).filter(|c| c.exists)
    }

    /// Idempotent get-or-create by name. Never clobbers an existing city's
    /// neighbor slots.
    pub fn upsert_city(&mut self, name: &str) -> &mut City {
        self.cities
            .entry(name.to_string())
            .or_insert_with(|| City::new(name))
    }

    /// Declare that `name`'s road in `direction` leads to `neighbor`.
    ///
    /// Both cities are upserted. The neighbor's opposite slot is auto-mirrored
    /// when empty; if it already names some other city the declaration is a
    /// conflict: the error reports both sides, and `name`'s own slot
    /// assignment is not rolled back.
    pub fn declare_edge(&mut self, name: &str, direction: Direction, neighbor: &str) -> Result<()> {
        self.upsert_city(name);
        self.upsert_city(neighbor);

        if let Some(city) = self.cities.get_mut(name) {
            city.set_neighbor(direction, neighbor.to_string());
        }

        let opposite = direction.opposite();
        let mirrored = self
            .cities
            .get(neighbor)
            .and_then(|c| c.neighbor(opposite).map(str::to_string));
        match mirrored {
            None => {
                if let Some(back) = self.cities.get_mut(neighbor) {
                    back.set_neighbor(opposite, name.to_string());
                }
                Ok(())
            }
            Some(existing) if existing == name => Ok(()),
            Some(existing) => Err(InvasionError::EdgeConflict {
                city: name.to_string(),
                direction,
                declared: neighbor.to_string(),
                opposite,
                existing,
            }),
        }
    }

    /// Mark a city destroyed by name. Unknown and already-destroyed names are
    /// errors; other cities are unaffected either way.
    pub fn destroy_city(&mut self, name: &str) -> Result<()> {
        match self.cities.get_mut(name) {
            Some(city) if city.exists => {
                city.exists = false;
                city.resident = None;
                Ok(())
            }
            Some(_) => Err(InvasionError::CityAlreadyDestroyed(name.to_string())),
            None => Err(InvasionError::UnknownCity(name.to_string())),
        }
    }

    /// The destruction protocol: move the alien resident at `origin` into
    /// `dest`.
    ///
    /// No-op when the origin is destroyed or has no resident, and also when
    /// the destination is already destroyed - an alien never migrates into a
    /// ruin, so it never silently disappears. If the destination already
    /// holds a resident, the destination is destroyed, its residency cleared,
    /// and the event carrying both serials is returned; the caller is
    /// responsible for marking both aliens dead.
    pub fn migrate(&mut self, origin: &str, dest: &str) -> Option<DestructionEvent> {
        let mover = match self.cities.get(origin) {
            Some(c) if c.exists => c.resident?,
            _ => return None,
        };
        let defender = match self.cities.get(dest) {
            Some(c) if c.exists => c.resident,
            _ => return None,
        };

        if let Some(c) = self.cities.get_mut(origin) {
            c.resident = None;
        }
        let dest_city = self.cities.get_mut(dest)?;

        if let Some(defender) = defender {
            dest_city.exists = false;
            dest_city.resident = None;
            tracing::info!(
                city = dest,
                attacker = %mover,
                defender = %defender,
                "city destroyed"
            );
            Some(DestructionEvent {
                city: dest.to_string(),
                aliens: (mover, defender),
            })
        } else {
            dest_city.resident = Some(mover);
            None
        }
    }

    /// Place each alien, in input order, on a uniformly chosen existing city
    /// with no resident. Fails the moment no such city remains; aliens placed
    /// before the shortfall stay placed.
    pub fn assign_aliens(&mut self, aliens: &[AlienId], rng: &mut ChaCha8Rng) -> Result<()> {
        for &id in aliens {
            let mut candidates: Vec<String> = self
                .cities
                .values()
                .filter(|c| c.exists && c.resident.is_none())
                .map(|c| c.name.clone())
                .collect();
            candidates.sort();

            let Some(name) = candidates.choose(rng) else {
                return Err(InvasionError::NotEnoughCities {
                    requested: aliens.len(),
                });
            };
            if let Some(city) = self.cities.get_mut(name) {
                city.resident = Some(id);
            }
            tracing::debug!(alien = %id, city = %name, "alien landed");
        }
        Ok(())
    }

    /// One round: every existing city holding a resident gets a move attempt
    /// from that resident. Returns false the instant any alien's step counter
    /// exceeds `step_ceiling` - the safety valve against pathological
    /// non-termination, not the natural end condition.
    pub fn advance_round(
        &mut self,
        roster: &mut AlienRoster,
        rng: &mut ChaCha8Rng,
        events: &mut Vec<DestructionEvent>,
        step_ceiling: u32,
    ) -> bool {
        let mut occupied: Vec<String> = self
            .cities
            .values()
            .filter(|c| c.exists && c.resident.is_some())
            .map(|c| c.name.clone())
            .collect();
        occupied.sort();

        for name in occupied {
            // The resident may have moved or died earlier this round
            let Some(id) = self
                .cities
                .get(&name)
                .filter(|c| c.exists)
                .and_then(|c| c.resident)
            else {
                continue;
            };
            let Some(alien) = roster.get_mut(id) else {
                continue;
            };

            let outcome = alien.attempt_move(&name, self, rng);
            let steps = alien.steps;

            if let Some(event) = outcome.destruction {
                roster.kill(event.aliens.0);
                roster.kill(event.aliens.1);
                events.push(event);
            }
            if steps > step_ceiling {
                tracing::warn!(alien = %id, steps, "step ceiling exceeded");
                return false;
            }
        }
        true
    }

    /// Natural-termination check: true when no live resident has anywhere
    /// left to go. Vacuously true once every alien is dead.
    pub fn no_alien_can_move(&self) -> bool {
        self.cities
            .values()
            .filter(|c| c.exists && c.resident.is_some())
            .all(|c| c.is_isolated_or_destroyed(self))
    }

    pub fn exist_city_count(&self) -> usize {
        self.cities.values().filter(|c| c.exists).count()
    }

    /// One line per existing city, `Name dir=Neighbor ...`, listing only
    /// neighbors that still exist. Cities are sorted by name so a single
    /// call is deterministic.
    pub fn dump(&self) -> String {
        let mut existing: Vec<&City> = self.cities.values().filter(|c| c.exists).collect();
        existing.sort_by(|a, b| a.name.cmp(&b.name));

        let mut lines = Vec::with_capacity(existing.len());
        for city in existing {
            let mut parts = vec![city.name.clone()];
            for (dir, neighbor) in city.neighbors() {
                if self.cities.get(neighbor).is_some_and(|c| c.exists) {
                    parts.push(format!("{dir}={neighbor}"));
                }
            }
            lines.push(parts.join(" "));
        }
        lines.join("\n")
    }
}

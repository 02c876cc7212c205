//! The invasion driver loop

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::alien::AlienRoster;
use crate::core::error::Result;
use crate::map::WorldMap;
use crate::simulation::events::DestructionEvent;

/// Safety valve: an alien whose step counter passes this stops the run
pub const STEP_CEILING: u32 = 10_000;

/// Configuration for one invasion run
#[derive(Clone, Debug)]
pub struct InvasionConfig {
    pub alien_count: usize,
    /// Seed for the deterministic rng driving placement and movement
    pub seed: u64,
    pub step_ceiling: u32,
}

impl InvasionConfig {
    pub fn new(alien_count: usize, seed: u64) -> Self {
        Self {
            alien_count,
            seed,
            step_ceiling: STEP_CEILING,
        }
    }
}

/// Final state of an invasion run
#[derive(Debug)]
pub struct InvasionOutcome {
    pub map: WorldMap,
    pub roster: AlienRoster,
    pub events: Vec<DestructionEvent>,
    pub rounds: u32,
    /// True when the run stopped at the step ceiling rather than naturally
    pub ceiling_hit: bool,
}

/// Run an invasion to completion on `map`.
///
/// Spawns and places the aliens, then advances rounds until every live
/// alien is stranded or the step ceiling trips. Placement insufficiency is
/// the only error; aliens placed before the shortfall stay placed in the
/// returned error's map, which is dropped with it.
pub fn run_invasion(mut map: WorldMap, config: &InvasionConfig) -> Result<InvasionOutcome> {
    let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
    let mut roster = AlienRoster::new();
    let aliens = roster.spawn_many(config.alien_count);
    map.assign_aliens(&aliens, &mut rng)?;

    let mut events = Vec::new();
    let mut rounds = 0u32;
    let mut ceiling_hit = false;

    while !map.no_alien_can_move() {
        let keep_going = map.advance_round(&mut roster, &mut rng, &mut events, config.step_ceiling);
        rounds += 1;
        if !keep_going {
            ceiling_hit = true;
            break;
        }
    }

    tracing::info!(
        rounds,
        ceiling_hit,
        cities = map.exist_city_count(),
        destroyed = events.len(),
        "invasion finished"
    );

    Ok(InvasionOutcome {
        map,
        roster,
        events,
        rounds,
        ceiling_hit,
    })
}

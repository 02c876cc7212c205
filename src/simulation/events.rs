//! Observable simulation events

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::types::AlienId;

/// A city destroyed by two aliens meeting there.
///
/// `aliens` is `(attacker, defender)`: the alien that moved in, then the one
/// that was already resident.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DestructionEvent {
    pub city: String,
    pub aliens: (AlienId, AlienId),
}

impl fmt::Display for DestructionEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "City {} has been destroyed by alien {} and alien {}!",
            self.city, self.aliens.0, self.aliens.1
        )
    }
}

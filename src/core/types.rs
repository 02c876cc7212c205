//! Shared identifier types

use serde::{Deserialize, Serialize};
use std::fmt;

/// Serial number of an alien, assigned at creation and never reused.
///
/// Serials are handed out by [`crate::alien::AlienRoster`], starting at zero
/// and increasing monotonically for the lifetime of the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AlienId(pub u32);

impl fmt::Display for AlienId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

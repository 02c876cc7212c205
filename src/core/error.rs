use thiserror::Error;

use crate::map::Direction;

#[derive(Error, Debug)]
pub enum InvasionError {
    /// Two map declarations disagree about a bidirectional edge.
    /// The first declaration stands; this one is rejected.
    #[error("{city}'s {direction} is {declared}, but {declared}'s {opposite} is {existing} (conflict)")]
    EdgeConflict {
        city: String,
        direction: Direction,
        declared: String,
        opposite: Direction,
        existing: String,
    },

    #[error("not enough existing cities to assign {requested} aliens")]
    NotEnoughCities { requested: usize },

    #[error("city {0} doesn't exist")]
    UnknownCity(String),

    #[error("city {0} has already been destroyed")]
    CityAlreadyDestroyed(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, InvasionError>;

//! Xeno Invasion - alien invasion simulation over a directed city graph

pub mod alien;
pub mod core;
pub mod map;
pub mod parser;
pub mod simulation;

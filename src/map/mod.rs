//! The world map: compass directions, city nodes, and the graph that owns them

pub mod city;
pub mod direction;
pub mod graph;

pub use city::City;
pub use direction::Direction;
pub use graph::WorldMap;

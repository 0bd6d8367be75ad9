//! Ant Colony Optimization (ACO) for open tours.
//!
//! A population of ants repeatedly constructs tours over a distance
//! matrix. Each step of a tour is a probabilistic choice weighted by
//! accumulated pheromone (reinforced by low-cost tours, decayed every
//! iteration) and static heuristic attractiveness (inverse distance).
//!
//! The solver produces an *open* tour: every node is visited exactly
//! once starting from the configured start node, and no return edge to
//! the start is appended.
//!
//! # References
//!
//! - Dorigo & Gambardella (1997), "Ant Colony System: A Cooperative
//!   Learning Approach to the Traveling Salesman Problem"
//! - Dorigo, Maniezzo & Colorni (1996), "Ant System: Optimization by a
//!   Colony of Cooperating Agents"

mod config;
mod runner;
mod selection;
mod types;

pub use config::AcoConfig;
pub use runner::{AcoResult, AcoRunner};
pub use selection::weighted_choice;
pub use types::{DistanceMatrix, Tour, ZERO_DISTANCE_ATTRACTIVENESS};

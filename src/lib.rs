//! Ant colony optimization tour planner.
//!
//! Computes a short tour over a set of geographic points (a start point
//! plus discovered venues) by running an ant colony over an asymmetric
//! distance matrix.
//!
//! - **ACO solver** ([`aco`]): probabilistic tour construction, pheromone
//!   evaporation and deposition, per-iteration best/average tracking. This
//!   is the algorithmic core; it consumes a validated distance matrix and
//!   knows nothing about geography or providers.
//! - **Planning** ([`planning`]): a thin orchestration layer over external
//!   services (geocoding, venue search, distance matrices, map rendering),
//!   expressed as a trait so that tests substitute deterministic fakes and
//!   the solver never touches the network.
//!
//! # Architecture
//!
//! The solver's only boundary is programmatic: a square non-negative
//! distance matrix in, three per-iteration history sequences plus a final
//! route out. Providers (geocoding, venue search, distance-matrix APIs,
//! map sinks) live behind [`planning::TourServices`] and are supplied by
//! consumers; this crate ships no HTTP client of its own.

pub mod aco;
pub mod planning;

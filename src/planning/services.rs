//! External service boundary.

use super::types::{Coordinate, MapMarker, SearchRadius, Venue};
use std::fmt;

/// Failure reported by an external provider, tagged with the capability
/// that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    Geocoding(String),
    VenueSearch(String),
    DistanceMatrix(String),
    MapRender(String),
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServiceError::Geocoding(msg) => write!(f, "geocoding failed: {msg}"),
            ServiceError::VenueSearch(msg) => write!(f, "venue search failed: {msg}"),
            ServiceError::DistanceMatrix(msg) => write!(f, "distance matrix failed: {msg}"),
            ServiceError::MapRender(msg) => write!(f, "map rendering failed: {msg}"),
        }
    }
}

impl std::error::Error for ServiceError {}

/// The four external capabilities the planner depends on, one method
/// per capability.
///
/// Real implementations wrap secret-key-bearing HTTP APIs and live in
/// consumer crates; tests supply deterministic fakes, keeping the solver
/// fully decoupled from network access. Providers handle their own
/// retry, backoff, and pagination; the planner only consumes their
/// final output.
pub trait TourServices {
    /// Resolves a place name to a coordinate.
    fn resolve_place(&self, name: &str) -> Result<Coordinate, ServiceError>;

    /// Searches points of interest matching `keyword` within `radius`
    /// of `center`. An empty result is not an error here; the planner
    /// decides what to do with it.
    fn search_venues(
        &self,
        center: Coordinate,
        radius: SearchRadius,
        keyword: &str,
    ) -> Result<Vec<Venue>, ServiceError>;

    /// Computes the pairwise distance matrix over `points`, in point
    /// order. The result must be square with one row per point.
    fn distance_matrix(&self, points: &[Coordinate]) -> Result<Vec<Vec<f64>>, ServiceError>;

    /// Renders a map centered at `center` with the given markers and
    /// route legs, persisting it wherever the implementation chooses.
    fn render_map(
        &mut self,
        center: Coordinate,
        zoom: u8,
        markers: &[MapMarker],
        legs: &[(Coordinate, Coordinate)],
    ) -> Result<(), ServiceError>;
}

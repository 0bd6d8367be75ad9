//! Planning-layer types.

use crate::aco::{AcoResult, Tour};

/// A geographic coordinate in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

/// A discovered point of interest.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Venue {
    pub name: String,
    pub position: Coordinate,
}

/// Banded search radius around the start point.
///
/// Venue-search providers commonly accept a radius band rather than a
/// free-form distance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SearchRadius {
    M300,
    #[default]
    M500,
    M1000,
    M2000,
    M3000,
}

impl SearchRadius {
    /// The band's radius in meters.
    pub fn meters(self) -> u32 {
        match self {
            SearchRadius::M300 => 300,
            SearchRadius::M500 => 500,
            SearchRadius::M1000 => 1000,
            SearchRadius::M2000 => 2000,
            SearchRadius::M3000 => 3000,
        }
    }
}

/// Distinguishes the start-point marker from venue markers on the
/// rendered map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MarkerKind {
    Start,
    Venue,
}

/// A labeled map annotation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MapMarker {
    pub position: Coordinate,
    pub label: String,
    pub kind: MarkerKind,
}

/// A completed plan: the discovered venues, the solver's final tour over
/// them, and the full per-iteration history.
///
/// `route` indexes into the planner's point list, where index 0 is the
/// start coordinate and index `k + 1` is `venues[k]`.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlannedTour {
    /// Resolved coordinate of the requested start place.
    pub center: Coordinate,

    /// Venues found around the start, in provider order.
    pub venues: Vec<Venue>,

    /// Final visiting order (open tour starting at index 0).
    pub route: Tour,

    /// Total distance of `route`.
    pub cost: f64,

    /// Full solver output, including per-iteration history.
    pub solver: AcoResult,
}

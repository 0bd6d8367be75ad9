//! Tour planning over external geographic services.
//!
//! Composes four external capabilities (geocoding, venue search,
//! distance matrices, map rendering) behind the [`TourServices`] trait
//! and feeds their output to the ACO solver. The glue here is
//! deliberately thin; providers signal their own failures and this layer
//! only maps them into [`PlanError`].

mod planner;
mod services;
mod types;

pub use planner::{PlanError, TourPlanner};
pub use services::{ServiceError, TourServices};
pub use types::{Coordinate, MapMarker, MarkerKind, PlannedTour, SearchRadius, Venue};

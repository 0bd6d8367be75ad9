//! Plan orchestration: services in, planned tour out.

use super::services::{ServiceError, TourServices};
use super::types::{Coordinate, MapMarker, MarkerKind, PlannedTour, SearchRadius};
use crate::aco::{AcoConfig, AcoRunner, DistanceMatrix};
use std::fmt;

/// Zoom level for the rendered map.
const MAP_ZOOM: u8 = 16;

/// Failure while assembling a plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlanError {
    /// An external provider reported a failure.
    Service(ServiceError),

    /// The venue search returned nothing to tour.
    NoVenues,

    /// The distance provider returned a malformed matrix.
    Matrix(String),
}

impl fmt::Display for PlanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlanError::Service(err) => write!(f, "{err}"),
            PlanError::NoVenues => write!(f, "venue search returned no results"),
            PlanError::Matrix(msg) => write!(f, "invalid distance matrix from provider: {msg}"),
        }
    }
}

impl std::error::Error for PlanError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PlanError::Service(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ServiceError> for PlanError {
    fn from(err: ServiceError) -> Self {
        PlanError::Service(err)
    }
}

/// Plans a venue tour end to end: geocode the start place, discover
/// venues around it, fetch the distance matrix, run the ant colony,
/// render the result.
///
/// # Examples
///
/// ```ignore
/// let services = GoogleBackedServices::from_env()?;
/// let mut planner = TourPlanner::new(services)
///     .with_config(AcoConfig::default().with_num_ants(50).with_beta(2.0));
/// let plan = planner.plan("Shinjuku Station", "ramen", SearchRadius::M500)?;
/// println!("tour cost: {}", plan.cost);
/// ```
pub struct TourPlanner<S> {
    services: S,
    config: AcoConfig,
}

impl<S: TourServices> TourPlanner<S> {
    pub fn new(services: S) -> Self {
        Self {
            services,
            config: AcoConfig::default(),
        }
    }

    /// Replaces the solver configuration. The start index is always
    /// forced to 0, the position of the start coordinate in the point
    /// list the planner assembles.
    pub fn with_config(mut self, config: AcoConfig) -> Self {
        self.config = config;
        self
    }

    /// Consumes the planner, returning the service bundle.
    pub fn into_services(self) -> S {
        self.services
    }

    /// Runs the full pipeline for one start place and search keyword.
    pub fn plan(
        &mut self,
        place: &str,
        keyword: &str,
        radius: SearchRadius,
    ) -> Result<PlannedTour, PlanError> {
        let center = self.services.resolve_place(place)?;

        let venues = self.services.search_venues(center, radius, keyword)?;
        if venues.is_empty() {
            return Err(PlanError::NoVenues);
        }

        // Start point first, then venues in provider order.
        let mut points = Vec::with_capacity(venues.len() + 1);
        points.push(center);
        points.extend(venues.iter().map(|v| v.position));

        let raw = self.services.distance_matrix(&points)?;
        let matrix = DistanceMatrix::new(raw).map_err(PlanError::Matrix)?;
        if matrix.len() != points.len() {
            return Err(PlanError::Matrix(format!(
                "provider returned {} rows for {} points",
                matrix.len(),
                points.len()
            )));
        }

        let config = self.config.clone().with_start(0);
        let result = AcoRunner::run(&matrix, &config);

        let mut markers = Vec::with_capacity(points.len());
        markers.push(MapMarker {
            position: center,
            label: place.to_string(),
            kind: MarkerKind::Start,
        });
        markers.extend(venues.iter().map(|v| MapMarker {
            position: v.position,
            label: v.name.clone(),
            kind: MarkerKind::Venue,
        }));

        let legs: Vec<(Coordinate, Coordinate)> = result
            .best_route
            .windows(2)
            .map(|leg| (points[leg[0]], points[leg[1]]))
            .collect();

        self.services.render_map(center, MAP_ZOOM, &markers, &legs)?;

        Ok(PlannedTour {
            center,
            venues,
            route: result.best_route.clone(),
            cost: result.best_cost,
            solver: result,
        })
    }
}

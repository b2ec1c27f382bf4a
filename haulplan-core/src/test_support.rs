//! Deterministic `RouteLookup` used by unit and behaviour tests.

use std::collections::HashMap;

use crate::{Coordinates, LookupError, RouteLookup};

/// In-memory `RouteLookup` with a fixed gazetteer and a fixed distance.
///
/// Unknown locations fail with [`LookupError::NoMatch`]. The distance is
/// returned for every pair of points.
///
/// # Examples
///
/// ```
/// use haulplan_core::test_support::FixedRouteLookup;
/// use haulplan_core::{Coordinates, RouteLookup};
///
/// let lookup = FixedRouteLookup::with_distance(300.0)
///     .with_location("Gary, IN", Coordinates::new(41.59, -87.35));
/// assert!(lookup.geocode("Gary, IN").is_ok());
/// assert!(lookup.geocode("Atlantis").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct FixedRouteLookup {
    locations: HashMap<String, Coordinates>,
    distance: Result<f64, LookupError>,
}

impl FixedRouteLookup {
    /// A lookup that reports `miles` between any two points.
    #[must_use]
    pub fn with_distance(miles: f64) -> Self {
        Self {
            locations: HashMap::new(),
            distance: Ok(miles),
        }
    }

    /// A lookup whose distance queries all fail with `error`.
    #[must_use]
    pub fn with_distance_error(error: LookupError) -> Self {
        Self {
            locations: HashMap::new(),
            distance: Err(error),
        }
    }

    /// Register a location name and its coordinates.
    #[must_use]
    pub fn with_location(mut self, name: impl Into<String>, coordinates: Coordinates) -> Self {
        self.locations.insert(name.into(), coordinates);
        self
    }
}

impl RouteLookup for FixedRouteLookup {
    fn geocode(&self, query: &str) -> Result<Coordinates, LookupError> {
        if query.trim().is_empty() {
            return Err(LookupError::EmptyQuery);
        }
        self.locations
            .get(query)
            .copied()
            .ok_or_else(|| LookupError::NoMatch {
                query: query.to_owned(),
            })
    }

    fn route_distance_miles(
        &self,
        _from: Coordinates,
        _to: Coordinates,
    ) -> Result<f64, LookupError> {
        self.distance.clone()
    }
}

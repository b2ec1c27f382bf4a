//! Route lookup trait and the coordinate type it trades in.

use serde::{Deserialize, Serialize};

use super::error::LookupError;

/// Metres in one statute mile, as used when converting routing distances.
const METRES_PER_MILE: f64 = 1609.34;

/// A geographic position in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    /// Latitude in degrees.
    pub lat: f64,
    /// Longitude in degrees.
    pub lon: f64,
}

impl Coordinates {
    /// Position reported when a location cannot be resolved.
    pub const ORIGIN: Self = Self { lat: 0.0, lon: 0.0 };

    /// Construct coordinates from latitude and longitude.
    #[must_use]
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// The pair as `[lat, lon]`, the order map front-ends expect.
    ///
    /// # Examples
    ///
    /// ```
    /// use haulplan_core::Coordinates;
    ///
    /// let denver = Coordinates::new(39.74, -104.99);
    /// assert_eq!(denver.as_lat_lon(), [39.74, -104.99]);
    /// ```
    #[must_use]
    pub const fn as_lat_lon(self) -> [f64; 2] {
        [self.lat, self.lon]
    }
}

/// Convert a routing distance in metres to whole miles.
///
/// # Examples
///
/// ```
/// use haulplan_core::metres_to_miles;
///
/// assert_eq!(metres_to_miles(160_934.0), 100.0);
/// assert_eq!(metres_to_miles(2_400.0), 1.0);
/// ```
#[must_use]
#[expect(clippy::float_arithmetic, reason = "unit conversion")]
pub fn metres_to_miles(metres: f64) -> f64 {
    (metres / METRES_PER_MILE).round()
}

/// Geocode locations and measure road distances between them.
///
/// Implementations must be `Send + Sync` so one lookup can serve concurrent
/// planning calls.
///
/// # Examples
///
/// ```rust
/// use haulplan_core::{Coordinates, LookupError, RouteLookup};
///
/// struct Crow;
///
/// impl RouteLookup for Crow {
///     fn geocode(&self, query: &str) -> Result<Coordinates, LookupError> {
///         if query.trim().is_empty() {
///             return Err(LookupError::EmptyQuery);
///         }
///         Ok(Coordinates::ORIGIN)
///     }
///
///     fn route_distance_miles(
///         &self,
///         _from: Coordinates,
///         _to: Coordinates,
///     ) -> Result<f64, LookupError> {
///         Ok(0.0)
///     }
/// }
///
/// assert_eq!(Crow.geocode("Reno, NV")?, Coordinates::ORIGIN);
/// # Ok::<(), LookupError>(())
/// ```
pub trait RouteLookup: Send + Sync {
    /// Resolve a free-text location to coordinates.
    ///
    /// Implementations must return `Err(LookupError::EmptyQuery)` for a
    /// blank query without contacting any service.
    fn geocode(&self, query: &str) -> Result<Coordinates, LookupError>;

    /// Driving distance in miles between two points.
    fn route_distance_miles(&self, from: Coordinates, to: Coordinates)
    -> Result<f64, LookupError>;
}

impl<L: RouteLookup + ?Sized> RouteLookup for Box<L> {
    fn geocode(&self, query: &str) -> Result<Coordinates, LookupError> {
        (**self).geocode(query)
    }

    fn route_distance_miles(
        &self,
        from: Coordinates,
        to: Coordinates,
    ) -> Result<f64, LookupError> {
        (**self).route_distance_miles(from, to)
    }
}

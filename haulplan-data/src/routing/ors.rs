//! OpenRouteService response types.
//!
//! Only the fields the lookup reads are modelled. Both endpoints answer with
//! a GeoJSON `FeatureCollection`; unknown members are ignored.
//!
//! See: <https://openrouteservice.org/dev/#/api-docs>

use serde::Deserialize;

/// Response from `GET /geocode/search`.
#[derive(Debug, Deserialize)]
pub struct GeocodeResponse {
    /// Matches ordered by confidence; `size=1` limits this to one entry.
    #[serde(default)]
    pub features: Vec<GeocodeFeature>,
}

/// A single geocoding match.
#[derive(Debug, Deserialize)]
pub struct GeocodeFeature {
    /// Point geometry of the match.
    pub geometry: PointGeometry,
}

/// GeoJSON point geometry.
#[derive(Debug, Deserialize)]
pub struct PointGeometry {
    /// Position as `[lon, lat]`, the GeoJSON axis order.
    pub coordinates: Vec<f64>,
}

/// Response from `GET /v2/directions/driving-car`.
#[derive(Debug, Deserialize)]
pub struct DirectionsResponse {
    /// Routes found; the first one is used.
    #[serde(default)]
    pub features: Vec<RouteFeature>,
}

/// A single route.
#[derive(Debug, Deserialize)]
pub struct RouteFeature {
    /// Route metadata.
    pub properties: RouteProperties,
}

/// Route metadata carrying the summary.
#[derive(Debug, Deserialize)]
pub struct RouteProperties {
    /// Totals for the whole route.
    #[serde(default)]
    pub summary: RouteSummary,
}

/// Route totals.
///
/// ORS omits `distance` when start and end coincide, so it defaults to zero.
#[derive(Debug, Default, Deserialize)]
pub struct RouteSummary {
    /// Route length in metres.
    #[serde(default)]
    pub distance: f64,
}

//! Resolve free-text locations and road distances.
//!
//! The [`RouteLookup`] trait abstracts the geocoding and routing services a
//! trip request depends on. Callers geocode the pickup and dropoff names
//! into [`Coordinates`] and then ask for the driving distance between them.
//!
//! Lookups are the only fallible I/O in a planning call; the trip service
//! degrades failures to a zero-distance trip instead of surfacing them.

mod error;
mod provider;

pub use error::LookupError;
pub use provider::{Coordinates, RouteLookup, metres_to_miles};

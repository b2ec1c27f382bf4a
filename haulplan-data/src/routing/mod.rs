//! HTTP-based route lookups.
//!
//! This module provides [`OrsRouteLookup`], an implementation of
//! [`haulplan_core::RouteLookup`] backed by the OpenRouteService geocoding
//! and directions APIs.
//!
//! # Architecture
//!
//! Each location is resolved through the geocode search endpoint and the
//! road distance between two positions comes from the `driving-car`
//! directions profile. The synchronous [`RouteLookup`](haulplan_core::RouteLookup)
//! trait is implemented by blocking on async HTTP calls internally, keeping
//! the core library embeddable in synchronous contexts.
//!
//! # Example
//!
//! ```no_run
//! use haulplan_data::routing::{OrsRouteLookup, OrsRouteLookupConfig};
//! use haulplan_core::RouteLookup;
//! use std::time::Duration;
//!
//! let config = OrsRouteLookupConfig::new("my-api-key")
//!     .with_timeout(Duration::from_secs(10))
//!     .with_user_agent("dispatch-board/1.0");
//! let lookup = OrsRouteLookup::with_config(config)?;
//!
//! let pickup = lookup.geocode("Gary, IN")?;
//! let dropoff = lookup.geocode("Denver, CO")?;
//! let miles = lookup.route_distance_miles(pickup, dropoff)?;
//! println!("{miles} miles");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod ors;
mod provider;

pub use provider::{
    DEFAULT_BASE_URL, DEFAULT_USER_AGENT, LookupBuildError, OrsRouteLookup, OrsRouteLookupConfig,
};

//! Core domain types for the Haulplan trip planner.
//!
//! The crate is split along the boundaries of a planning call:
//!
//! - [`TripInput`] is the inbound request as it arrives from a caller and
//!   is validated before anything else happens.
//! - [`RouteLookup`] abstracts geocoding and road-distance lookups. The
//!   HTTP implementation lives in `haulplan-data`.
//! - [`plan`] is the Hours-of-Service schedule planner. It is a pure
//!   function of a [`TripRequest`] and the fixed policy in [`limits`].
//! - [`TripPlanner`] wires the three together and shapes the result into a
//!   [`PlanResponse`].
//!
//! Nothing in this crate performs I/O.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod limits;
pub mod lookup;
mod planner;
mod request;
mod response;
mod schedule;
mod service;
mod trip;

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;

pub use lookup::{Coordinates, LookupError, RouteLookup, metres_to_miles};
pub use planner::{PlanningError, fuel_stops, plan};
pub use request::{TripInput, TripInputError};
pub use response::{DayEntry, PlanResponse};
pub use schedule::{DaySegment, FuelStop, TripPlan};
pub use service::{TripOutcome, TripPlanner};
pub use trip::{TripRequest, TripRequestError};

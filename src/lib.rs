//! Facade crate for the Haulplan trip planner.
//!
//! This crate re-exports the core domain types and exposes the
//! OpenRouteService lookup behind a feature flag.

#![forbid(unsafe_code)]

pub use haulplan_core::{
    Coordinates, DayEntry, DaySegment, FuelStop, LookupError, PlanResponse, PlanningError,
    RouteLookup, TripInput, TripInputError, TripOutcome, TripPlan, TripPlanner, TripRequest,
    TripRequestError, fuel_stops, limits, metres_to_miles, plan,
};

#[cfg(feature = "test-support")]
pub use haulplan_core::test_support;

#[cfg(feature = "lookup-ors")]
pub use haulplan_data::routing::{LookupBuildError, OrsRouteLookup, OrsRouteLookupConfig};

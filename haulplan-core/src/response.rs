//! JSON response shape returned to callers.
//!
//! Accepted and rejected plans share one shape. A rejection echoes the
//! distance, carries empty schedule and fuel-stop lists and adds an `error`
//! message; an accepted plan may carry the pickup and dropoff coordinates.

use serde::{Deserialize, Serialize};

use crate::limits::{DROPOFF_DURATION_HOURS, PICKUP_DURATION_HOURS};
use crate::{Coordinates, DaySegment, FuelStop, PlanningError, TripPlan};

/// A schedule row as it appears on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DayEntry {
    /// 1-based day number.
    pub day: u32,
    /// Hours spent driving.
    pub driving_hours: f64,
    /// Number of mandated breaks: `1` when a break is required, else `0`.
    pub breaks: u8,
    /// Hours on duty, driving included.
    pub total_on_duty: f64,
}

impl From<&DaySegment> for DayEntry {
    fn from(segment: &DaySegment) -> Self {
        Self {
            day: segment.day_index,
            driving_hours: segment.driving_hours,
            breaks: u8::from(segment.break_required),
            total_on_duty: segment.total_on_duty_hours,
        }
    }
}

/// Response body for a planning call.
///
/// # Examples
///
/// ```
/// use haulplan_core::{PlanResponse, PlanningError};
///
/// let response = PlanResponse::rejected(900.0, &PlanningError::CycleExhausted {
///     hours_used: 72.0,
/// });
/// assert!(response.schedule.is_empty());
/// assert_eq!(response.total_miles, 900.0);
/// assert_eq!(response.error_code.as_deref(), Some("cycle_exhausted"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanResponse {
    /// Day-by-day schedule; empty when rejected.
    pub schedule: Vec<DayEntry>,
    /// Trip distance in miles.
    pub total_miles: f64,
    /// Fuel-stop mile markers; empty when rejected.
    pub fuel_stops: Vec<FuelStop>,
    /// Hours reserved for the pickup.
    pub pickup_duration: u32,
    /// Hours reserved for the dropoff.
    pub dropoff_duration: u32,
    /// Human-readable rejection reason.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Machine-readable rejection code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_code: Option<String>,
    /// Pickup position as `[lat, lon]`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pickup_coords: Option<[f64; 2]>,
    /// Dropoff position as `[lat, lon]`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dropoff_coords: Option<[f64; 2]>,
}

impl PlanResponse {
    /// Shape the outcome of [`crate::plan`] for a trip of `distance_miles`.
    #[must_use]
    pub fn from_outcome(distance_miles: f64, outcome: &Result<TripPlan, PlanningError>) -> Self {
        match outcome {
            Ok(plan) => Self::from(plan),
            Err(reason) => Self::rejected(distance_miles, reason),
        }
    }

    /// The rejection shape: distance echoed, nothing scheduled.
    #[must_use]
    pub fn rejected(distance_miles: f64, reason: &PlanningError) -> Self {
        Self {
            schedule: Vec::new(),
            total_miles: distance_miles,
            fuel_stops: Vec::new(),
            pickup_duration: PICKUP_DURATION_HOURS,
            dropoff_duration: DROPOFF_DURATION_HOURS,
            error: Some(reason.to_string()),
            error_code: Some(reason.code().to_owned()),
            pickup_coords: None,
            dropoff_coords: None,
        }
    }

    /// Attach the resolved pickup and dropoff positions.
    #[must_use]
    pub fn with_coordinates(mut self, pickup: Coordinates, dropoff: Coordinates) -> Self {
        self.pickup_coords = Some(pickup.as_lat_lon());
        self.dropoff_coords = Some(dropoff.as_lat_lon());
        self
    }

    /// Whether this response describes a rejected plan.
    #[must_use]
    pub const fn is_rejection(&self) -> bool {
        self.error.is_some()
    }
}

impl From<&TripPlan> for PlanResponse {
    fn from(plan: &TripPlan) -> Self {
        Self {
            schedule: plan.schedule.iter().map(DayEntry::from).collect(),
            total_miles: plan.total_miles,
            fuel_stops: plan.fuel_stops.clone(),
            pickup_duration: plan.pickup_duration_hours,
            dropoff_duration: plan.dropoff_duration_hours,
            error: None,
            error_code: None,
            pickup_coords: None,
            dropoff_coords: None,
        }
    }
}

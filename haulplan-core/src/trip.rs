//! Validated planner input.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The two scalar inputs of a planning call.
///
/// Both values are fixed at construction and only exposed through
/// accessors, so the planner can never mutate them mid-computation.
///
/// # Examples
///
/// ```
/// use haulplan_core::TripRequest;
///
/// # fn main() -> Result<(), haulplan_core::TripRequestError> {
/// let request = TripRequest::new(300.0, 12.5)?;
/// assert_eq!(request.distance_miles(), 300.0);
/// assert_eq!(request.hours_used(), 12.5);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawTripRequest")]
pub struct TripRequest {
    distance_miles: f64,
    hours_used: f64,
}

/// Errors returned by [`TripRequest::new`].
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum TripRequestError {
    /// The distance was negative, NaN or infinite.
    #[error("distance must be a finite, non-negative number of miles (got {value})")]
    InvalidDistance {
        /// Rejected distance.
        value: f64,
    },
    /// The hours already used were negative, NaN or infinite.
    #[error("hours used must be a finite, non-negative number of hours (got {value})")]
    InvalidHoursUsed {
        /// Rejected hour count.
        value: f64,
    },
}

impl TripRequest {
    /// Validates and constructs a [`TripRequest`].
    ///
    /// # Errors
    ///
    /// Returns [`TripRequestError::InvalidDistance`] or
    /// [`TripRequestError::InvalidHoursUsed`] when either value is negative
    /// or not finite.
    pub fn new(distance_miles: f64, hours_used: f64) -> Result<Self, TripRequestError> {
        if !is_non_negative(distance_miles) {
            return Err(TripRequestError::InvalidDistance {
                value: distance_miles,
            });
        }
        if !is_non_negative(hours_used) {
            return Err(TripRequestError::InvalidHoursUsed { value: hours_used });
        }
        Ok(Self {
            distance_miles,
            hours_used,
        })
    }

    /// Total route distance in miles.
    #[must_use]
    pub const fn distance_miles(&self) -> f64 {
        self.distance_miles
    }

    /// Hours already on duty within the current cycle.
    #[must_use]
    pub const fn hours_used(&self) -> f64 {
        self.hours_used
    }
}

fn is_non_negative(value: f64) -> bool {
    value.is_finite() && value >= 0.0
}

#[derive(Deserialize)]
struct RawTripRequest {
    distance_miles: f64,
    hours_used: f64,
}

impl TryFrom<RawTripRequest> for TripRequest {
    type Error = TripRequestError;

    fn try_from(raw: RawTripRequest) -> Result<Self, Self::Error> {
        Self::new(raw.distance_miles, raw.hours_used)
    }
}

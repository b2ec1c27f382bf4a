//! Inbound trip request as submitted by a caller.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::TripRequestError;

/// Wire name of the current-location field.
pub const FIELD_CURRENT_LOCATION: &str = "current_location";
/// Wire name of the pickup-location field.
pub const FIELD_PICKUP_LOCATION: &str = "pickup_location";
/// Wire name of the dropoff-location field.
pub const FIELD_DROPOFF_LOCATION: &str = "dropoff_location";

/// A trip request naming its locations in free text.
///
/// The distance is not part of the request; it is looked up from the pickup
/// and dropoff locations.
///
/// # Examples
///
/// ```
/// use haulplan_core::TripInput;
///
/// let input: TripInput = serde_json::from_str(
///     r#"{
///         "current_location": "Chicago, IL",
///         "pickup_location": "Gary, IN",
///         "dropoff_location": "Denver, CO",
///         "hours_used": 12
///     }"#,
/// )
/// .unwrap();
/// assert!(input.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripInput {
    /// Where the driver is now.
    pub current_location: String,
    /// Where the load is collected.
    pub pickup_location: String,
    /// Where the load is delivered.
    pub dropoff_location: String,
    /// Hours already on duty within the current cycle.
    pub hours_used: f64,
}

/// Errors returned by [`TripInput::validate`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TripInputError {
    /// A location field was empty or whitespace.
    #[error("{field} must not be blank")]
    BlankLocation {
        /// Wire name of the offending field.
        field: &'static str,
    },
    /// `hours_used` was NaN or infinite.
    #[error("hours_used must be a finite number")]
    NonFiniteHours,
    /// `hours_used` was below zero.
    #[error("hours_used must not be negative (got {value})")]
    NegativeHours {
        /// Rejected hour count.
        value: f64,
    },
    /// The looked-up distance and hours could not form a planner request.
    #[error(transparent)]
    Request(#[from] TripRequestError),
}

impl TripInput {
    /// Check the request fields before any lookup happens.
    ///
    /// Locations are checked in wire order, then the hours.
    ///
    /// # Errors
    ///
    /// Returns the first [`TripInputError`] found: a blank location, or hours
    /// that are not finite or are negative.
    pub fn validate(&self) -> Result<(), TripInputError> {
        for (field, value) in self.locations() {
            if value.trim().is_empty() {
                return Err(TripInputError::BlankLocation { field });
            }
        }
        if !self.hours_used.is_finite() {
            return Err(TripInputError::NonFiniteHours);
        }
        if self.hours_used < 0.0 {
            return Err(TripInputError::NegativeHours {
                value: self.hours_used,
            });
        }
        Ok(())
    }

    fn locations(&self) -> [(&'static str, &str); 3] {
        [
            (FIELD_CURRENT_LOCATION, &self.current_location),
            (FIELD_PICKUP_LOCATION, &self.pickup_location),
            (FIELD_DROPOFF_LOCATION, &self.dropoff_location),
        ]
    }
}

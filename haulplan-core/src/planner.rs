//! Hours-of-Service schedule planner.
//!
//! [`plan`] turns a distance and the hours already used in the current
//! cycle into a day-by-day schedule. Each simulated day drives up to the
//! daily driving cap and books up to the daily on-duty cap, until either the
//! driving need is met or the weekly budget runs out.

use thiserror::Error;

use crate::limits::{
    AVERAGE_SPEED_MPH, BREAK_THRESHOLD_HOURS, DAILY_DRIVING_CAP_HOURS, DAILY_ON_DUTY_CAP_HOURS,
    FUEL_INTERVAL_MILES, WEEKLY_ON_DUTY_CAP_HOURS,
};
use crate::{DaySegment, FuelStop, TripPlan, TripRequest};

/// Reasons a trip cannot be scheduled.
///
/// Both are routine outcomes rather than faults. The caller fixes them by
/// supplying different inputs.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum PlanningError {
    /// The weekly on-duty cap is already used up.
    #[error(
        "You have exceeded the 70-hour limit for an 8-day period. Please reset before starting a new trip."
    )]
    CycleExhausted {
        /// Hours already used in the cycle.
        hours_used: f64,
    },
    /// The trip needs more driving hours than the cycle has left.
    #[error(
        "You do not have enough available hours to complete this trip. Please take a 34-hour reset or reduce trip distance."
    )]
    InsufficientHours {
        /// Driving hours the distance requires.
        required_hours: f64,
        /// On-duty hours left in the cycle.
        remaining_hours: f64,
    },
}

impl PlanningError {
    /// Stable machine-readable code for the rejection.
    ///
    /// # Examples
    ///
    /// ```
    /// use haulplan_core::PlanningError;
    ///
    /// let err = PlanningError::CycleExhausted { hours_used: 70.0 };
    /// assert_eq!(err.code(), "cycle_exhausted");
    /// ```
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::CycleExhausted { .. } => "cycle_exhausted",
            Self::InsufficientHours { .. } => "insufficient_hours",
        }
    }
}

/// Plan a trip under the fixed Hours-of-Service limits.
///
/// The call is pure: identical requests always produce identical plans.
///
/// # Errors
///
/// Returns [`PlanningError::CycleExhausted`] when `hours_used` has reached
/// the weekly cap, and [`PlanningError::InsufficientHours`] when the
/// driving time for the distance exceeds what remains of the cycle.
///
/// # Examples
///
/// ```
/// use haulplan_core::{TripRequest, plan};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let trip = plan(&TripRequest::new(300.0, 0.0)?)?;
/// assert_eq!(trip.schedule.len(), 1);
/// assert_eq!(trip.schedule[0].driving_hours, 5.0);
/// assert!(!trip.schedule[0].break_required);
/// assert!(trip.fuel_stops.is_empty());
/// # Ok(())
/// # }
/// ```
#[expect(
    clippy::float_arithmetic,
    reason = "hour budgets are fractional and accumulate across days"
)]
pub fn plan(request: &TripRequest) -> Result<TripPlan, PlanningError> {
    let hours_used = request.hours_used();
    let distance_miles = request.distance_miles();

    if hours_used >= WEEKLY_ON_DUTY_CAP_HOURS {
        return Err(PlanningError::CycleExhausted { hours_used });
    }

    let driving_hours_needed = distance_miles / AVERAGE_SPEED_MPH;
    let remaining_weekly_hours = WEEKLY_ON_DUTY_CAP_HOURS - hours_used;
    if driving_hours_needed > remaining_weekly_hours {
        return Err(PlanningError::InsufficientHours {
            required_hours: driving_hours_needed,
            remaining_hours: remaining_weekly_hours,
        });
    }

    let schedule = simulate_days(driving_hours_needed, remaining_weekly_hours);
    Ok(TripPlan::new(
        schedule,
        fuel_stops(distance_miles),
        distance_miles,
    ))
}

/// Walk the trip one day at a time.
///
/// On-duty time is booked up to the daily cap even on a final day that
/// needs little driving.
#[expect(
    clippy::float_arithmetic,
    reason = "hour budgets are fractional and accumulate across days"
)]
fn simulate_days(driving_hours_needed: f64, weekly_hours: f64) -> Vec<DaySegment> {
    let mut remaining_driving = driving_hours_needed;
    let mut remaining_weekly = weekly_hours;
    let mut schedule = Vec::new();
    let mut day: u32 = 0;

    while remaining_driving > 0.0 && remaining_weekly > 0.0 {
        let drive_today = DAILY_DRIVING_CAP_HOURS
            .min(remaining_driving)
            .min(remaining_weekly);
        let on_duty_today = DAILY_ON_DUTY_CAP_HOURS.min(remaining_weekly);

        day += 1;
        schedule.push(DaySegment {
            day_index: day,
            driving_hours: round_hours(drive_today),
            break_required: drive_today > BREAK_THRESHOLD_HOURS,
            total_on_duty_hours: round_hours(on_duty_today),
        });

        remaining_weekly -= on_duty_today;
        remaining_driving -= drive_today;
    }

    schedule
}

/// Mile markers of the mandatory fuel stops for a trip of `distance_miles`.
///
/// Stops fall on every multiple of the fuel interval strictly below the
/// total distance.
///
/// # Examples
///
/// ```
/// use haulplan_core::{FuelStop, fuel_stops};
///
/// assert_eq!(
///     fuel_stops(2500.0),
///     vec![FuelStop::at_mile(1000), FuelStop::at_mile(2000)]
/// );
/// assert!(fuel_stops(900.0).is_empty());
/// ```
#[must_use]
pub fn fuel_stops(distance_miles: f64) -> Vec<FuelStop> {
    (1_u32..)
        .map_while(|n| n.checked_mul(FUEL_INTERVAL_MILES))
        .take_while(|&mile| f64::from(mile) < distance_miles)
        .map(FuelStop::at_mile)
        .collect()
}

/// Round to two decimal places for display.
#[expect(clippy::float_arithmetic, reason = "decimal rounding")]
fn round_hours(hours: f64) -> f64 {
    (hours * 100.0).round() / 100.0
}

//! Fixed Hours-of-Service policy used by the planner.
//!
//! These are simplified rules for a single 70-hour/8-day cycle. They are
//! not runtime configurable.

/// Maximum driving hours in a single simulated day.
pub const DAILY_DRIVING_CAP_HOURS: f64 = 11.0;

/// Maximum on-duty hours (driving plus other work) in a single simulated day.
pub const DAILY_ON_DUTY_CAP_HOURS: f64 = 14.0;

/// Maximum on-duty hours across the 8-day duty cycle.
pub const WEEKLY_ON_DUTY_CAP_HOURS: f64 = 70.0;

/// Average road speed used to convert distance into driving hours.
pub const AVERAGE_SPEED_MPH: f64 = 60.0;

/// Distance between mandatory fuel stops.
pub const FUEL_INTERVAL_MILES: u32 = 1000;

/// Driving beyond this many hours in a day flags a break for that day.
pub const BREAK_THRESHOLD_HOURS: f64 = 5.0;

/// Time reserved for the pickup, reported alongside every plan.
pub const PICKUP_DURATION_HOURS: u32 = 1;

/// Time reserved for the dropoff, reported alongside every plan.
pub const DROPOFF_DURATION_HOURS: u32 = 1;

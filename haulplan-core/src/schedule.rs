//! Planner output: day segments, fuel stops and the plan that owns them.

use serde::{Deserialize, Serialize};

use crate::limits::{DROPOFF_DURATION_HOURS, PICKUP_DURATION_HOURS};

/// One simulated day of the trip.
///
/// Hour fields hold values rounded to two decimal places for display. The
/// planner keeps its own unrounded accumulators.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DaySegment {
    /// 1-based day number.
    pub day_index: u32,
    /// Hours spent driving on this day.
    pub driving_hours: f64,
    /// Whether driving on this day exceeded the break threshold.
    pub break_required: bool,
    /// Hours on duty on this day, driving included.
    pub total_on_duty_hours: f64,
}

/// A mile marker at which the driver must refuel.
///
/// # Examples
///
/// ```
/// use haulplan_core::FuelStop;
///
/// let stop = FuelStop::at_mile(2000);
/// assert_eq!(stop.mile(), 2000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FuelStop(u32);

impl FuelStop {
    /// Construct a fuel stop at `mile`.
    #[must_use]
    pub const fn at_mile(mile: u32) -> Self {
        Self(mile)
    }

    /// Mile marker of this stop.
    #[must_use]
    pub const fn mile(self) -> u32 {
        self.0
    }
}

/// A complete day-by-day plan for an accepted trip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripPlan {
    /// Day segments ordered by `day_index`, without gaps.
    pub schedule: Vec<DaySegment>,
    /// Fuel stops in increasing mile order.
    pub fuel_stops: Vec<FuelStop>,
    /// Total trip distance in miles.
    pub total_miles: f64,
    /// Hours reserved for the pickup.
    pub pickup_duration_hours: u32,
    /// Hours reserved for the dropoff.
    pub dropoff_duration_hours: u32,
}

impl TripPlan {
    /// Assemble a plan with the standard pickup and dropoff durations.
    #[must_use]
    pub const fn new(schedule: Vec<DaySegment>, fuel_stops: Vec<FuelStop>, total_miles: f64) -> Self {
        Self {
            schedule,
            fuel_stops,
            total_miles,
            pickup_duration_hours: PICKUP_DURATION_HOURS,
            dropoff_duration_hours: DROPOFF_DURATION_HOURS,
        }
    }

    /// Number of simulated days.
    #[must_use]
    pub fn days(&self) -> usize {
        self.schedule.len()
    }

    /// Sum of reported driving hours across all days.
    #[must_use]
    pub fn total_driving_hours(&self) -> f64 {
        self.schedule.iter().map(|day| day.driving_hours).sum()
    }

    /// Sum of reported on-duty hours across all days.
    #[must_use]
    pub fn total_on_duty_hours(&self) -> f64 {
        self.schedule.iter().map(|day| day.total_on_duty_hours).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn two_day_plan() -> TripPlan {
        TripPlan::new(
            vec![
                DaySegment {
                    day_index: 1,
                    driving_hours: 11.0,
                    break_required: true,
                    total_on_duty_hours: 14.0,
                },
                DaySegment {
                    day_index: 2,
                    driving_hours: 4.5,
                    break_required: false,
                    total_on_duty_hours: 14.0,
                },
            ],
            vec![FuelStop::at_mile(1000)],
            930.0,
        )
    }

    #[rstest]
    fn new_uses_standard_durations(two_day_plan: TripPlan) {
        assert_eq!(two_day_plan.pickup_duration_hours, 1);
        assert_eq!(two_day_plan.dropoff_duration_hours, 1);
    }

    #[rstest]
    fn totals_sum_reported_hours(two_day_plan: TripPlan) {
        assert_eq!(two_day_plan.days(), 2);
        assert!((two_day_plan.total_driving_hours() - 15.5).abs() < 1e-9);
        assert!((two_day_plan.total_on_duty_hours() - 28.0).abs() < 1e-9);
    }

    #[rstest]
    fn fuel_stop_serialises_as_bare_mile() {
        let json = serde_json::to_string(&FuelStop::at_mile(3000)).expect("serialise");
        assert_eq!(json, "3000");
    }
}

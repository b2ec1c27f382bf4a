//! Behavioural coverage for the schedule planner.

use std::cell::RefCell;

use haulplan_core::{FuelStop, PlanningError, TripPlan, TripRequest, plan};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};

/// World state shared by planner scenarios.
#[derive(Debug, Default)]
pub struct PlannerWorld {
    request: RefCell<Option<TripRequest>>,
    outcome: RefCell<Option<Result<TripPlan, PlanningError>>>,
}

impl PlannerWorld {
    fn set_request(&self, distance: f64, hours: f64) {
        let request = TripRequest::new(distance, hours).expect("scenario inputs are valid");
        self.request.replace(Some(request));
    }

    fn accepted(&self) -> TripPlan {
        let borrowed = self.outcome.borrow();
        match borrowed.as_ref() {
            Some(Ok(trip)) => trip.clone(),
            Some(Err(err)) => panic!("expected an accepted plan, got {err:?}"),
            None => panic!("the trip has not been planned"),
        }
    }

    fn rejection(&self) -> PlanningError {
        let borrowed = self.outcome.borrow();
        match borrowed.as_ref() {
            Some(Err(err)) => *err,
            Some(Ok(trip)) => panic!("expected a rejection, got {trip:?}"),
            None => panic!("the trip has not been planned"),
        }
    }
}

/// Fresh world for each scenario.
#[fixture]
pub fn world() -> PlannerWorld {
    PlannerWorld::default()
}

#[given("a 300 mile trip with no hours used")]
fn short_trip(#[from(world)] world: &PlannerWorld) {
    world.set_request(300.0, 0.0);
}

#[given("a 0 mile trip with no hours used")]
fn empty_trip(#[from(world)] world: &PlannerWorld) {
    world.set_request(0.0, 0.0);
}

#[given("a 2500 mile trip with no hours used")]
fn long_trip(#[from(world)] world: &PlannerWorld) {
    world.set_request(2500.0, 0.0);
}

#[given("a 300 mile trip with 70 hours used")]
fn exhausted_trip(#[from(world)] world: &PlannerWorld) {
    world.set_request(300.0, 70.0);
}

#[given("a 1500 mile trip with 65 hours used")]
fn overlong_trip(#[from(world)] world: &PlannerWorld) {
    world.set_request(1500.0, 65.0);
}

#[when("I plan the trip")]
fn plan_trip(#[from(world)] world: &PlannerWorld) {
    let request = world
        .request
        .borrow()
        .expect("a trip must be described first");
    world.outcome.replace(Some(plan(&request)));
}

#[then("the plan has 1 day")]
fn one_day(#[from(world)] world: &PlannerWorld) {
    assert_eq!(world.accepted().days(), 1);
}

#[then("the plan has 0 days")]
fn no_days(#[from(world)] world: &PlannerWorld) {
    assert_eq!(world.accepted().days(), 0);
}

#[then("the plan has 4 days")]
fn four_days(#[from(world)] world: &PlannerWorld) {
    let trip = world.accepted();
    assert_eq!(trip.days(), 4);
    let last = trip.schedule.last().expect("four days were scheduled");
    assert_eq!(last.driving_hours, 8.67);
}

#[then("day 1 drives 5 hours without a break and books 14 hours on duty")]
fn first_day_shape(#[from(world)] world: &PlannerWorld) {
    let trip = world.accepted();
    let day = trip.schedule.first().expect("one day was scheduled");
    assert_eq!(day.day_index, 1);
    assert_eq!(day.driving_hours, 5.0);
    assert!(!day.break_required, "5 hours is not more than the threshold");
    assert_eq!(day.total_on_duty_hours, 14.0);
}

#[then("no fuel stops are scheduled")]
fn no_fuel_stops(#[from(world)] world: &PlannerWorld) {
    assert!(world.accepted().fuel_stops.is_empty());
}

#[then("fuel stops are scheduled at miles 1000 and 2000")]
fn two_fuel_stops(#[from(world)] world: &PlannerWorld) {
    assert_eq!(
        world.accepted().fuel_stops,
        vec![FuelStop::at_mile(1000), FuelStop::at_mile(2000)]
    );
}

#[then("the trip is rejected because the cycle is exhausted")]
fn rejected_exhausted(#[from(world)] world: &PlannerWorld) {
    assert!(matches!(
        world.rejection(),
        PlanningError::CycleExhausted { .. }
    ));
}

#[then("the trip is rejected for insufficient hours")]
fn rejected_insufficient(#[from(world)] world: &PlannerWorld) {
    match world.rejection() {
        PlanningError::InsufficientHours {
            required_hours,
            remaining_hours,
        } => {
            assert_eq!(required_hours, 25.0);
            assert_eq!(remaining_hours, 5.0);
        }
        other => panic!("expected InsufficientHours, got {other:?}"),
    }
}

macro_rules! register_scenario {
    ($fn_name:ident, $title:literal) => {
        #[scenario(path = "tests/features/schedule_planner.feature", name = $title)]
        fn $fn_name(#[from(world)] world: PlannerWorld) {
            let _ = world;
        }
    };
}

register_scenario!(short_trip_single_day, "a short trip fits in a single day");
register_scenario!(zero_distance_trip, "a zero-distance trip has nothing to schedule");
register_scenario!(long_trip_fuel_stops, "a long trip refuels every thousand miles");
register_scenario!(exhausted_cycle, "an exhausted cycle is rejected");
register_scenario!(
    insufficient_hours,
    "a trip longer than the remaining hours is rejected"
);

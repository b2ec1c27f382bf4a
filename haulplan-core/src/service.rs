//! Trip service: validate, look up, plan, shape.
//!
//! Lookup failures never fail the call. An unresolved location is reported
//! at [`Coordinates::ORIGIN`] and an unknown distance becomes a zero-mile
//! trip, both with a warning in the log.

use log::{debug, warn};

use crate::{
    Coordinates, PlanResponse, PlanningError, RouteLookup, TripInput, TripInputError, TripRequest,
    plan,
};

/// Result of a trip request that passed validation.
#[derive(Debug, Clone, PartialEq)]
pub enum TripOutcome {
    /// The trip was scheduled.
    Accepted(PlanResponse),
    /// The planner rejected the trip.
    Rejected {
        /// Response body carrying the rejection message.
        response: PlanResponse,
        /// Why the planner refused.
        reason: PlanningError,
    },
}

impl TripOutcome {
    /// Whether the trip was scheduled.
    #[must_use]
    pub const fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted(_))
    }

    /// Borrow the response body.
    #[must_use]
    pub const fn response(&self) -> &PlanResponse {
        match self {
            Self::Accepted(response) | Self::Rejected { response, .. } => response,
        }
    }

    /// Take the response body.
    #[must_use]
    pub fn into_response(self) -> PlanResponse {
        match self {
            Self::Accepted(response) | Self::Rejected { response, .. } => response,
        }
    }
}

/// Plans trips described by free-text locations.
///
/// The planner is generic over the [`RouteLookup`] used to geocode locations
/// and measure the road distance between pickup and dropoff.
///
/// # Examples
///
/// ```
/// use haulplan_core::{Coordinates, LookupError, RouteLookup, TripInput, TripPlanner};
///
/// struct Lakeshore;
///
/// impl RouteLookup for Lakeshore {
///     fn geocode(&self, query: &str) -> Result<Coordinates, LookupError> {
///         match query {
///             "Gary, IN" => Ok(Coordinates::new(41.59, -87.35)),
///             "Toledo, OH" => Ok(Coordinates::new(41.65, -83.54)),
///             _ => Err(LookupError::NoMatch { query: query.to_owned() }),
///         }
///     }
///
///     fn route_distance_miles(
///         &self,
///         _from: Coordinates,
///         _to: Coordinates,
///     ) -> Result<f64, LookupError> {
///         Ok(300.0)
///     }
/// }
///
/// # fn main() -> Result<(), haulplan_core::TripInputError> {
/// let planner = TripPlanner::new(Lakeshore);
/// let outcome = planner.plan_trip(&TripInput {
///     current_location: "Chicago, IL".into(),
///     pickup_location: "Gary, IN".into(),
///     dropoff_location: "Toledo, OH".into(),
///     hours_used: 0.0,
/// })?;
/// assert!(outcome.is_accepted());
/// assert_eq!(outcome.response().pickup_coords, Some([41.59, -87.35]));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct TripPlanner<L> {
    lookup: L,
}

impl<L: RouteLookup> TripPlanner<L> {
    /// Construct a planner around `lookup`.
    pub const fn new(lookup: L) -> Self {
        Self { lookup }
    }

    /// Borrow the underlying lookup.
    pub const fn lookup(&self) -> &L {
        &self.lookup
    }

    /// Validate `input`, resolve its route and schedule the trip.
    ///
    /// # Errors
    ///
    /// Returns [`TripInputError`] when the request fails validation. No
    /// lookup is attempted in that case. Planner rejections are not errors;
    /// they come back as [`TripOutcome::Rejected`].
    pub fn plan_trip(&self, input: &TripInput) -> Result<TripOutcome, TripInputError> {
        input.validate()?;
        debug!(
            "planning trip from {:?} via {:?} to {:?} with {} hours used",
            input.current_location, input.pickup_location, input.dropoff_location, input.hours_used
        );

        let pickup = self.locate(&input.pickup_location);
        let dropoff = self.locate(&input.dropoff_location);
        let distance_miles = self.distance_between(pickup, dropoff);

        let request = TripRequest::new(distance_miles, input.hours_used)?;
        let outcome = plan(&request);
        let response = PlanResponse::from_outcome(distance_miles, &outcome);
        Ok(match outcome {
            Ok(_) => TripOutcome::Accepted(response.with_coordinates(pickup, dropoff)),
            Err(reason) => {
                debug!("trip rejected: {}", reason.code());
                TripOutcome::Rejected { response, reason }
            }
        })
    }

    fn locate(&self, query: &str) -> Coordinates {
        match self.lookup.geocode(query) {
            Ok(coordinates) => coordinates,
            Err(err) => {
                warn!("geocoding {query:?} failed, using the origin instead: {err}");
                Coordinates::ORIGIN
            }
        }
    }

    fn distance_between(&self, from: Coordinates, to: Coordinates) -> f64 {
        match self.lookup.route_distance_miles(from, to) {
            Ok(miles) if miles.is_finite() && miles >= 0.0 => miles,
            Ok(miles) => {
                warn!("route lookup returned an unusable distance ({miles}), planning 0 miles");
                0.0
            }
            Err(err) => {
                warn!("route lookup failed, planning 0 miles: {err}");
                0.0
            }
        }
    }
}

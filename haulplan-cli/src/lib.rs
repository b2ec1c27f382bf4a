//! Command-line interface for the Haulplan trip planner.
//!
//! Two subcommands are provided:
//!
//! - `schedule` runs the Hours-of-Service planner on a known distance.
//! - `plan` reads a trip request from a JSON file, resolves its route
//!   through OpenRouteService and schedules it.
//!
//! Both print the response body as pretty JSON on stdout, including when
//! the planner rejects the trip.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod error;
mod fs;
mod plan;
mod schedule;

pub use error::CliError;

use plan::{PlanArgs, run_plan};
use schedule::{ScheduleArgs, run_schedule};

pub(crate) const ARG_PLAN_REQUEST: &str = "request";
pub(crate) const ARG_PLAN_ORS_BASE_URL: &str = "ors-base-url";
pub(crate) const ARG_PLAN_ORS_API_KEY: &str = "ors-api-key";
pub(crate) const ARG_PLAN_TIMEOUT_SECS: &str = "timeout-secs";
pub(crate) const ENV_PLAN_REQUEST: &str = "HAULPLAN_CMDS_PLAN_REQUEST_PATH";
pub(crate) const ENV_PLAN_ORS_API_KEY: &str = "HAULPLAN_CMDS_PLAN_ORS_API_KEY";
pub(crate) const ARG_SCHEDULE_DISTANCE_MILES: &str = "distance-miles";
pub(crate) const ARG_SCHEDULE_HOURS_USED: &str = "hours-used";
pub(crate) const ENV_SCHEDULE_DISTANCE_MILES: &str = "HAULPLAN_CMDS_SCHEDULE_DISTANCE_MILES";
pub(crate) const ENV_SCHEDULE_HOURS_USED: &str = "HAULPLAN_CMDS_SCHEDULE_HOURS_USED";

/// Run the Haulplan CLI with the current process arguments and environment.
///
/// # Errors
///
/// Returns [`CliError`] when arguments or configuration are invalid, the
/// request cannot be loaded, output cannot be written, or the planner
/// rejects the trip. A rejected trip has already printed its response body
/// by the time the error is returned.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Schedule(args) => run_schedule(args),
        Command::Plan(args) => run_plan(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "haulplan",
    about = "Hours-of-Service trip scheduling for property-carrying drivers",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Schedule a trip of known length.
    Schedule(ScheduleArgs),
    /// Resolve a trip request's route and schedule it.
    Plan(PlanArgs),
}

#[cfg(test)]
mod tests;

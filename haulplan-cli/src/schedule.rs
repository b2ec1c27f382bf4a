//! Schedule command implementation for the Haulplan CLI.

use clap::Parser;
use haulplan_core::{PlanResponse, TripRequest, plan};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::plan::write_plan_response;
use crate::{
    ARG_SCHEDULE_DISTANCE_MILES, ARG_SCHEDULE_HOURS_USED, CliError, ENV_SCHEDULE_DISTANCE_MILES,
    ENV_SCHEDULE_HOURS_USED,
};

/// CLI arguments for the `schedule` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Compute the Hours-of-Service schedule for a trip whose \
                 driving distance is already known. No network lookups \
                 are made.",
    about = "Schedule a trip of known length"
)]
#[ortho_config(prefix = "HAULPLAN")]
pub(crate) struct ScheduleArgs {
    /// Driving distance in miles.
    #[arg(long = ARG_SCHEDULE_DISTANCE_MILES, value_name = "miles")]
    #[serde(default)]
    pub(crate) distance_miles: Option<f64>,
    /// On-duty hours already used in the current 8-day cycle.
    #[arg(long = ARG_SCHEDULE_HOURS_USED, value_name = "hours")]
    #[serde(default)]
    pub(crate) hours_used: Option<f64>,
}

impl ScheduleArgs {
    pub(crate) fn into_config(self) -> Result<ScheduleConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        ScheduleConfig::try_from(merged)
    }
}

/// Resolved `schedule` command configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct ScheduleConfig {
    pub(crate) distance_miles: f64,
    pub(crate) hours_used: f64,
}

impl TryFrom<ScheduleArgs> for ScheduleConfig {
    type Error = CliError;

    fn try_from(args: ScheduleArgs) -> Result<Self, Self::Error> {
        let distance_miles = args.distance_miles.ok_or(CliError::MissingArgument {
            field: ARG_SCHEDULE_DISTANCE_MILES,
            env: ENV_SCHEDULE_DISTANCE_MILES,
        })?;
        let hours_used = args.hours_used.ok_or(CliError::MissingArgument {
            field: ARG_SCHEDULE_HOURS_USED,
            env: ENV_SCHEDULE_HOURS_USED,
        })?;
        Ok(Self {
            distance_miles,
            hours_used,
        })
    }
}

pub(crate) fn run_schedule(args: ScheduleArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_schedule_with(args, &mut stdout)
}

/// Schedule the trip and write its response body, then report a rejection.
pub(crate) fn run_schedule_with(args: ScheduleArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    schedule_with_config(config, writer)
}

pub(crate) fn schedule_with_config(
    config: ScheduleConfig,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let request = TripRequest::new(config.distance_miles, config.hours_used)
        .map_err(CliError::InvalidScheduleInput)?;
    let outcome = plan(&request);
    let response = PlanResponse::from_outcome(request.distance_miles(), &outcome);
    write_plan_response(writer, &response)?;
    outcome
        .map(|_| ())
        .map_err(|source| CliError::PlanRejected { source })
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<ScheduleConfig, CliError> {
    let merged = ScheduleArgs::merge_from_layers(layers).map_err(CliError::from)?;
    ScheduleConfig::try_from(merged)
}

//! Plan command implementation for the Haulplan CLI.

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use haulplan_core::{PlanResponse, RouteLookup, TripInput, TripOutcome, TripPlanner};
use haulplan_data::routing::{OrsRouteLookup, OrsRouteLookupConfig};
use log::info;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use std::io::{BufReader, Write};
use std::time::Duration;

use crate::fs::{file_is_file, open_utf8_file};
use crate::{
    ARG_PLAN_ORS_API_KEY, ARG_PLAN_ORS_BASE_URL, ARG_PLAN_REQUEST, ARG_PLAN_TIMEOUT_SECS, CliError,
    ENV_PLAN_ORS_API_KEY, ENV_PLAN_REQUEST,
};

/// CLI arguments for the `plan` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Plan a trip described by free-text locations. The pickup \
                 and dropoff are geocoded and the driving distance between \
                 them is fetched from OpenRouteService before the \
                 Hours-of-Service schedule is computed. The request itself \
                 is provided as a JSON file.",
    about = "Resolve a trip request's route and schedule it"
)]
#[ortho_config(prefix = "HAULPLAN")]
pub(crate) struct PlanArgs {
    /// Path to a JSON file containing the trip request.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) request_path: Option<Utf8PathBuf>,
    /// Base URL for OpenRouteService (e.g. "https://api.openrouteservice.org").
    #[arg(long = ARG_PLAN_ORS_BASE_URL, value_name = "url")]
    #[serde(default)]
    pub(crate) ors_base_url: Option<String>,
    /// OpenRouteService API key.
    #[arg(long = ARG_PLAN_ORS_API_KEY, value_name = "key")]
    #[serde(default)]
    pub(crate) ors_api_key: Option<String>,
    /// Timeout in seconds for each lookup request.
    #[arg(long = ARG_PLAN_TIMEOUT_SECS, value_name = "secs")]
    #[serde(default)]
    pub(crate) timeout_secs: Option<u64>,
}

impl PlanArgs {
    pub(crate) fn into_config(self) -> Result<PlanConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        PlanConfig::try_from(merged)
    }
}

/// Resolved `plan` command configuration.
#[derive(Clone, PartialEq, Eq)]
pub(crate) struct PlanConfig {
    /// Path to the JSON request file.
    pub(crate) request_path: Utf8PathBuf,
    /// Base URL for OpenRouteService.
    pub(crate) ors_base_url: String,
    /// OpenRouteService API key.
    pub(crate) ors_api_key: String,
    /// Per-request timeout.
    pub(crate) timeout: Duration,
}

impl std::fmt::Debug for PlanConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlanConfig")
            .field("request_path", &self.request_path)
            .field("ors_base_url", &self.ors_base_url)
            .field("ors_api_key", &"<redacted>")
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl PlanConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        Self::require_existing(&self.request_path, ARG_PLAN_REQUEST)
    }

    fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
        match file_is_file(path) {
            Ok(true) => Ok(()),
            Ok(false) => Err(CliError::SourcePathNotFile {
                field,
                path: path.to_path_buf(),
            }),
            Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
                Err(CliError::MissingSourceFile {
                    field,
                    path: path.to_path_buf(),
                })
            }
            Err(source) => Err(CliError::InspectSourcePath {
                field,
                path: path.to_path_buf(),
                source,
            }),
        }
    }
}

impl TryFrom<PlanArgs> for PlanConfig {
    type Error = CliError;

    fn try_from(args: PlanArgs) -> Result<Self, Self::Error> {
        let request_path = args.request_path.ok_or(CliError::MissingArgument {
            field: ARG_PLAN_REQUEST,
            env: ENV_PLAN_REQUEST,
        })?;
        let ors_api_key = args.ors_api_key.ok_or(CliError::MissingArgument {
            field: ARG_PLAN_ORS_API_KEY,
            env: ENV_PLAN_ORS_API_KEY,
        })?;

        let defaults = OrsRouteLookupConfig::default();
        let ors_base_url = args.ors_base_url.unwrap_or(defaults.base_url);
        let timeout = args
            .timeout_secs
            .map_or(defaults.timeout, Duration::from_secs);

        Ok(Self {
            request_path,
            ors_base_url,
            ors_api_key,
            timeout,
        })
    }
}

/// Builds the route lookup for the current plan invocation.
pub(crate) trait LookupBuilder {
    fn build(&self, config: &PlanConfig) -> Result<Box<dyn RouteLookup>, CliError>;
}

pub(crate) struct OrsLookupBuilder;

impl LookupBuilder for OrsLookupBuilder {
    fn build(&self, config: &PlanConfig) -> Result<Box<dyn RouteLookup>, CliError> {
        let ors = OrsRouteLookupConfig::new(config.ors_api_key.clone())
            .with_base_url(config.ors_base_url.clone())
            .with_timeout(config.timeout);
        let lookup =
            OrsRouteLookup::with_config(ors).map_err(|source| CliError::BuildRouteLookup {
                base_url: config.ors_base_url.clone(),
                source,
            })?;
        Ok(Box::new(lookup))
    }
}

pub(crate) fn run_plan(args: PlanArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    let builder = OrsLookupBuilder;
    run_plan_with(args, &builder, &mut stdout)
}

/// Plan the trip and write its response body, then report a rejection.
pub(crate) fn run_plan_with(
    args: PlanArgs,
    builder: &dyn LookupBuilder,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let outcome = execute_plan(args, builder)?;
    write_plan_response(writer, outcome.response())?;
    match outcome {
        TripOutcome::Accepted(_) => Ok(()),
        TripOutcome::Rejected { reason, .. } => Err(CliError::PlanRejected { source: reason }),
    }
}

fn execute_plan(args: PlanArgs, builder: &dyn LookupBuilder) -> Result<TripOutcome, CliError> {
    let config = resolve_plan_config(args)?;
    let input = load_trip_input(&config.request_path)?;
    let invalid = |source| CliError::InvalidTripRequest {
        path: config.request_path.clone(),
        source,
    };
    input.validate().map_err(invalid)?;
    let lookup = builder.build(&config)?;
    info!("planning trip from {}", config.request_path);
    TripPlanner::new(lookup).plan_trip(&input).map_err(invalid)
}

fn resolve_plan_config(args: PlanArgs) -> Result<PlanConfig, CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    Ok(config)
}

/// Loads a JSON-encoded [`TripInput`] from disk.
pub(crate) fn load_trip_input(path: &Utf8Path) -> Result<TripInput, CliError> {
    let file = open_utf8_file(path).map_err(|source| CliError::OpenTripRequest {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader).map_err(|source| CliError::ParseTripRequest {
        path: path.to_path_buf(),
        source,
    })
}

/// Write `response` as pretty JSON followed by a newline.
pub(crate) fn write_plan_response(
    writer: &mut dyn Write,
    response: &PlanResponse,
) -> Result<(), CliError> {
    let payload =
        serde_json::to_string_pretty(response).map_err(CliError::SerialisePlanResponse)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WritePlanOutput)?;
    writer.write_all(b"\n").map_err(CliError::WritePlanOutput)?;
    Ok(())
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<PlanConfig, CliError> {
    let merged = PlanArgs::merge_from_layers(layers).map_err(CliError::from)?;
    PlanConfig::try_from(merged)
}

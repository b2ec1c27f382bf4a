//! Error types emitted by the Haulplan CLI.
//!
//! Keep this error type reasonably small, as every CLI helper returns
//! `Result<_, CliError>`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use haulplan_core::{PlanningError, TripInputError, TripRequestError};
use haulplan_data::routing::LookupBuildError;
use thiserror::Error;

/// Errors emitted by the Haulplan CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        field: &'static str,
        env: &'static str,
    },
    /// A referenced input path does not exist.
    #[error("{field} path {path:?} does not exist")]
    MissingSourceFile {
        field: &'static str,
        path: Utf8PathBuf,
    },
    /// A referenced input path exists but is not a file.
    #[error("{field} path {path:?} exists but is not a file")]
    SourcePathNotFile {
        field: &'static str,
        path: Utf8PathBuf,
    },
    /// A referenced input path could not be inspected due to an IO error.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectSourcePath {
        field: &'static str,
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Opening the trip request file failed.
    #[error("failed to open trip request at {path:?}: {source}")]
    OpenTripRequest {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Trip request JSON could not be decoded.
    #[error("failed to parse trip request JSON at {path:?}: {source}")]
    ParseTripRequest {
        path: Utf8PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// The trip request payload failed validation.
    #[error("trip request in {path:?} failed validation: {source}")]
    InvalidTripRequest {
        path: Utf8PathBuf,
        #[source]
        source: TripInputError,
    },
    /// The `schedule` inputs were out of range.
    #[error("invalid schedule input: {0}")]
    InvalidScheduleInput(#[source] TripRequestError),
    /// Constructing the route lookup failed.
    #[error("failed to build route lookup for {base_url:?}: {source}")]
    BuildRouteLookup {
        base_url: String,
        #[source]
        source: LookupBuildError,
    },
    /// The planner rejected the trip. The response body has been written.
    #[error("trip rejected: {source}")]
    PlanRejected { source: PlanningError },
    /// Serializing the plan response failed.
    #[error("failed to serialize plan response: {0}")]
    SerialisePlanResponse(#[source] serde_json::Error),
    /// Writing the plan output failed.
    #[error("failed to write plan output: {0}")]
    WritePlanOutput(#[source] std::io::Error),
}

//! Test helpers for writing trip requests into temporary workspaces.

use camino::{Utf8Path, Utf8PathBuf};
use haulplan_core::test_support::FixedRouteLookup;
use haulplan_core::{Coordinates, RouteLookup, TripInput};
use tempfile::TempDir;

use crate::CliError;
use crate::plan::{LookupBuilder, PlanConfig};

pub(super) const GARY: Coordinates = Coordinates::new(41.59, -87.35);
pub(super) const DENVER: Coordinates = Coordinates::new(39.74, -104.99);

/// Create a temporary directory and return it with its UTF-8 path.
pub(super) fn utf8_workspace() -> (TempDir, Utf8PathBuf) {
    let tmp = TempDir::new().expect("tempdir");
    let root = Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf-8 workspace");
    (tmp, root)
}

/// Write `contents` to `path`, panicking on failure.
pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    std::fs::write(path, contents).unwrap_or_else(|err| panic!("write {path}: {err}"));
}

/// A Gary to Denver request with the given hours already used.
pub(super) fn trip_input(hours_used: f64) -> TripInput {
    TripInput {
        current_location: "Chicago, IL".to_owned(),
        pickup_location: "Gary, IN".to_owned(),
        dropoff_location: "Denver, CO".to_owned(),
        hours_used,
    }
}

/// Serialise `input` as the request file at `path`.
pub(super) fn write_trip_input(path: &Utf8Path, input: &TripInput) {
    let payload = serde_json::to_string_pretty(input).expect("serialize request");
    write_utf8(path, payload.as_bytes());
}

/// Hands out a fixed lookup instead of reaching OpenRouteService.
#[derive(Debug, Clone)]
pub(super) struct FixedLookupBuilder {
    lookup: FixedRouteLookup,
}

impl FixedLookupBuilder {
    /// A builder whose lookup knows Gary and Denver and reports `miles`.
    pub(super) fn with_distance(miles: f64) -> Self {
        Self {
            lookup: FixedRouteLookup::with_distance(miles)
                .with_location("Gary, IN", GARY)
                .with_location("Denver, CO", DENVER),
        }
    }
}

impl LookupBuilder for FixedLookupBuilder {
    fn build(&self, _config: &PlanConfig) -> Result<Box<dyn RouteLookup>, CliError> {
        Ok(Box::new(self.lookup.clone()))
    }
}

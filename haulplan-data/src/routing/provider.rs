//! `RouteLookup` backed by the OpenRouteService HTTP APIs.
//!
//! This module provides [`OrsRouteLookup`], which resolves free-text
//! locations through `GET /geocode/search` and measures road distances
//! through `GET /v2/directions/driving-car`.
//!
//! # Architecture
//!
//! The [`RouteLookup`] trait is synchronous to keep the core library
//! embeddable in synchronous contexts. This lookup bridges the async HTTP
//! calls to the sync interface by blocking on a Tokio runtime internally.
//!
//! The API key travels as the `api_key` query parameter for geocoding and
//! as the `Authorization` header for directions. Errors never echo it: every
//! URL reported in a [`LookupError`] has its query string removed.
//!
//! # Example
//!
//! ```no_run
//! use haulplan_data::routing::OrsRouteLookup;
//! use haulplan_core::RouteLookup;
//!
//! let lookup = OrsRouteLookup::new("my-api-key")?;
//! let gary = lookup.geocode("Gary, IN")?;
//! println!("{}, {}", gary.lat, gary.lon);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use std::future::Future;
use std::time::Duration;

use haulplan_core::{Coordinates, LookupError, RouteLookup, metres_to_miles};
use log::debug;
use reqwest::Client;
use reqwest::header::AUTHORIZATION;
use thiserror::Error;
use tokio::runtime::{Handle, Runtime, RuntimeFlavor};
use url::Url;

use super::ors::{DirectionsResponse, GeocodeResponse};

/// Error type for [`OrsRouteLookup`] construction failures.
#[derive(Debug, Error)]
pub enum LookupBuildError {
    /// Failed to build the HTTP client.
    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),
    /// Failed to build the Tokio runtime.
    #[error("failed to build Tokio runtime: {0}")]
    Runtime(#[source] std::io::Error),
}

/// Public OpenRouteService endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.openrouteservice.org";

/// Default user agent for OpenRouteService requests.
pub const DEFAULT_USER_AGENT: &str = "haulplan-routing/0.1";

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

const GEOCODE_PATH: &str = "geocode/search";
const DIRECTIONS_PATH: &str = "v2/directions/driving-car";

/// Configuration for [`OrsRouteLookup`].
///
/// The `Debug` output never includes the API key.
#[derive(Clone)]
pub struct OrsRouteLookupConfig {
    /// OpenRouteService API key.
    pub api_key: String,
    /// Base URL for the service (e.g., `"https://api.openrouteservice.org"`).
    pub base_url: String,
    /// Request timeout duration.
    pub timeout: Duration,
    /// User agent string for requests.
    pub user_agent: String,
}

impl std::fmt::Debug for OrsRouteLookupConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OrsRouteLookupConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

impl Default for OrsRouteLookupConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: DEFAULT_BASE_URL.to_owned(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_owned(),
        }
    }
}

impl OrsRouteLookupConfig {
    /// Create a new configuration with the given API key.
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            ..Default::default()
        }
    }

    /// Point the lookup at a different deployment.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the user agent string.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

/// Route lookup using the OpenRouteService geocoding and directions APIs.
///
/// This lookup implements the synchronous [`RouteLookup`] trait by
/// internally blocking on asynchronous HTTP requests. It owns a Tokio
/// runtime that is reused across calls.
///
/// # Runtime behaviour
///
/// When called from outside any Tokio runtime, the lookup uses its own
/// stored runtime. When called from within a multi-threaded Tokio runtime
/// it uses that runtime's handle with [`tokio::task::block_in_place`] to
/// avoid nested runtime panics. Inside a `current_thread` runtime it falls
/// back to its own runtime, which may deadlock if the caller's runtime is
/// driving IO this request depends on.
pub struct OrsRouteLookup {
    client: Client,
    config: OrsRouteLookupConfig,
    runtime: Runtime,
}

impl std::fmt::Debug for OrsRouteLookup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OrsRouteLookup")
            .field("client", &self.client)
            .field("config", &self.config)
            .field("runtime", &"<tokio::runtime::Runtime>")
            .finish()
    }
}

impl OrsRouteLookup {
    /// Create a lookup against the public service with default settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client or Tokio runtime fails to build.
    pub fn new(api_key: impl Into<String>) -> Result<Self, LookupBuildError> {
        Self::with_config(OrsRouteLookupConfig::new(api_key))
    }

    /// Create a lookup with explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client or Tokio runtime fails to build.
    pub fn with_config(config: OrsRouteLookupConfig) -> Result<Self, LookupBuildError> {
        let client = Client::builder()
            .user_agent(&config.user_agent)
            .connect_timeout(config.timeout)
            .timeout(config.timeout)
            .build()
            .map_err(LookupBuildError::HttpClient)?;
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(LookupBuildError::Runtime)?;
        Ok(Self {
            client,
            config,
            runtime,
        })
    }

    /// Borrow the active configuration.
    #[must_use]
    pub const fn config(&self) -> &OrsRouteLookupConfig {
        &self.config
    }

    /// Join `path` onto the base URL and append `params` as a query string.
    fn build_url(&self, path: &str, params: &[(&str, &str)]) -> Result<Url, LookupError> {
        let raw = format!("{}/{path}", self.config.base_url.trim_end_matches('/'));
        Url::parse_with_params(&raw, params).map_err(|err| LookupError::InvalidUrl {
            url: raw.clone(),
            message: err.to_string(),
        })
    }

    fn geocode_url(&self, query: &str) -> Result<Url, LookupError> {
        self.build_url(
            GEOCODE_PATH,
            &[
                ("api_key", self.config.api_key.as_str()),
                ("text", query),
                ("size", "1"),
            ],
        )
    }

    fn directions_url(&self, from: Coordinates, to: Coordinates) -> Result<Url, LookupError> {
        let start = lon_lat(from);
        let end = lon_lat(to);
        self.build_url(
            DIRECTIONS_PATH,
            &[("start", start.as_str()), ("end", end.as_str())],
        )
    }

    /// Resolve a location asynchronously.
    async fn geocode_async(&self, query: &str) -> Result<Coordinates, LookupError> {
        let url = self.geocode_url(query)?;
        let endpoint = strip_query(&url);
        debug!("geocoding {query:?} via {endpoint}");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|err| self.convert_reqwest_error(err, &endpoint))?
            .error_for_status()
            .map_err(|err| self.convert_reqwest_error(err, &endpoint))?;

        let body: GeocodeResponse = response.json().await.map_err(parse_error)?;
        convert_geocode(query, body)
    }

    /// Measure the driving distance asynchronously.
    async fn distance_async(&self, from: Coordinates, to: Coordinates) -> Result<f64, LookupError> {
        let url = self.directions_url(from, to)?;
        let endpoint = strip_query(&url);
        debug!("requesting driving route via {endpoint}");

        let response = self
            .client
            .get(url)
            .header(AUTHORIZATION, self.config.api_key.as_str())
            .send()
            .await
            .map_err(|err| self.convert_reqwest_error(err, &endpoint))?
            .error_for_status()
            .map_err(|err| self.convert_reqwest_error(err, &endpoint))?;

        let body: DirectionsResponse = response.json().await.map_err(parse_error)?;
        convert_directions(body)
    }

    /// Convert a reqwest error to a `LookupError`.
    ///
    /// The URL reqwest attaches to its errors carries the API key, so it is
    /// dropped and the bare `endpoint` reported instead.
    fn convert_reqwest_error(&self, raw: reqwest::Error, endpoint: &str) -> LookupError {
        let error = raw.without_url();
        if error.is_timeout() {
            return LookupError::Timeout {
                url: endpoint.to_owned(),
                timeout_secs: self.config.timeout.as_secs(),
            };
        }

        if let Some(status) = error.status() {
            return LookupError::Http {
                url: endpoint.to_owned(),
                status: status.as_u16(),
                message: error.to_string(),
            };
        }

        LookupError::Network {
            url: endpoint.to_owned(),
            message: error.to_string(),
        }
    }

    /// Drive `future` to completion from synchronous code.
    fn block_on<F: Future>(&self, future: F) -> F::Output {
        // block_in_place requires a multi-threaded runtime; for current_thread
        // runtimes we fall back to our own stored runtime.
        match Handle::try_current() {
            Ok(handle) if handle.runtime_flavor() == RuntimeFlavor::MultiThread => {
                tokio::task::block_in_place(|| handle.block_on(future))
            }
            _ => self.runtime.block_on(future),
        }
    }
}

impl RouteLookup for OrsRouteLookup {
    fn geocode(&self, query: &str) -> Result<Coordinates, LookupError> {
        let trimmed = query.trim();
        if trimmed.is_empty() {
            return Err(LookupError::EmptyQuery);
        }
        self.block_on(self.geocode_async(trimmed))
    }

    fn route_distance_miles(&self, from: Coordinates, to: Coordinates) -> Result<f64, LookupError> {
        self.block_on(self.distance_async(from, to))
    }
}

/// Format a position the way ORS expects it: `lon,lat`.
fn lon_lat(position: Coordinates) -> String {
    format!("{},{}", position.lon, position.lat)
}

/// The URL without its query string, safe to log and report.
fn strip_query(url: &Url) -> String {
    let mut bare = url.clone();
    bare.set_query(None);
    bare.into()
}

fn parse_error(raw: reqwest::Error) -> LookupError {
    LookupError::Parse {
        message: raw.without_url().to_string(),
    }
}

/// Take the first geocoding match, swapping GeoJSON `[lon, lat]` order.
fn convert_geocode(query: &str, response: GeocodeResponse) -> Result<Coordinates, LookupError> {
    let Some(feature) = response.features.into_iter().next() else {
        return Err(LookupError::NoMatch {
            query: query.to_owned(),
        });
    };
    match feature.geometry.coordinates.as_slice() {
        [lon, lat, ..] if lon.is_finite() && lat.is_finite() => Ok(Coordinates::new(*lat, *lon)),
        other => Err(LookupError::Parse {
            message: format!("geocode match has unusable coordinates {other:?}"),
        }),
    }
}

/// Take the first route's length and convert it to whole miles.
fn convert_directions(response: DirectionsResponse) -> Result<f64, LookupError> {
    let route = response
        .features
        .into_iter()
        .next()
        .ok_or(LookupError::NoRoute)?;
    let metres = route.properties.summary.distance;
    if !metres.is_finite() || metres < 0.0 {
        return Err(LookupError::Parse {
            message: format!("route distance {metres} is not a usable length"),
        });
    }
    Ok(metres_to_miles(metres))
}

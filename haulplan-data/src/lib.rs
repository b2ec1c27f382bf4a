//! Data access for the Haulplan trip planner.
//!
//! Responsibilities:
//! - Provide network-backed implementations of the lookup traits defined in
//!   `haulplan-core`.
//! - Encapsulate third-party wire formats so they never leak into the core.
//!
//! Boundaries:
//! - Do not encode Hours-of-Service rules (they live in `haulplan-core`).
//! - Keep blocking I/O off async executors.
//!
//! Invariants:
//! - Thread-safe by default where feasible.
//! - No global mutable state.

#![forbid(unsafe_code)]

pub mod routing;

//! Shared test harness modules for the Haulplan CLI.

use super::*;

mod helpers;
mod plan_unit;

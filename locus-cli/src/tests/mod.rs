//! Shared test harness modules for the locus CLI.

use super::*;

mod analyze_unit;
mod helpers;

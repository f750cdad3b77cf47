//! Integration tests for sectime acceptance testing.
//!
//! Covers time value arithmetic, clock sources, and configuration loading.
//! None of these need privileges or external tools.

mod clock_test;
mod common;
mod config_test;

//! Developer checks for the devcheck project repository
//!
//! The binary runs a fixed sequence of repository checks: a ruff lint pass
//! over the Python sources, then a consistency check over every file that
//! declares the project version. The first failing check aborts the run.

pub mod check;
pub mod config;

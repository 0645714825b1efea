//! Epidemiological association, impact and power statistics for 2x2 tables.
//!
//! The [`metrics`] module holds the pure engine; [`cli`], [`api`] and
//! [`display`] are callers that validate input and format output.

pub mod api;
pub mod cli;
pub mod config;
pub mod display;
pub mod logging;
pub mod metrics;

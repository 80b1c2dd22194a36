//! Prayer Times Companion Library
//!
//! Fetches prayer timings and calendar data from the AlAdhan API and builds
//! the display model rendered by the companion binary.

pub mod api;
pub mod display;
pub mod error;
pub mod holidays;
pub mod location;
pub mod logging;
pub mod methods;
pub mod settings;

pub use error::{AppError, Result};

//! Settings record and persistence

pub mod config;

pub use config::{LocationMode, Settings, SettingsStore};

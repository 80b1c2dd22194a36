//! AlAdhan API client and payload types

pub mod client;
pub mod types;

pub use client::{ApiClient, API_BASE};

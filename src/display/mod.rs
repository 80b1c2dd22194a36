//! Display model and terminal rendering

pub mod model;
pub mod render;

pub use model::{DisplayModel, FastingWindow, PrayerCard, PRAYER_ORDER};
pub use render::{flash_status, render, render_error};

//! Location resolution for API queries

pub mod provider;
pub mod resolver;

pub use provider::{Coordinates, GeoProvider, IpGeoProvider};
pub use resolver::{resolve_location, Location};

//! Geocoding and map-artifact rendering.

pub mod map;
pub mod nominatim;

pub use map::MapRenderer;
pub use nominatim::Geocoder;

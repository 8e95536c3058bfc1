//! Value Objects - Immutable, identity-less domain primitives

mod geo_location;

pub use geo_location::{GeoLocation, InvalidCoordinates};

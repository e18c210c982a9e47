//! Value Objects - Immutable, identity-less domain primitives

mod geo_point;

pub use geo_point::GeoPoint;

//! Domain layer for the geocoding client
//!
//! Contains the value objects shared by the integration and presentation crates.
//! This layer has no knowledge of HTTP or wire formats.

pub mod value_objects;

pub use value_objects::*;

//! Geographic vector geometries and their Well-Known Binary (WKB) codec.
//!
//! The [`wkb`] module converts between the geometry model and the
//! little-endian WKB wire format used by spatial databases and GIS tooling.

mod geo;
pub mod wkb;

pub use geo::*;

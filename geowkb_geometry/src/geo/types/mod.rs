// This module defines the core geometric types used throughout the
// `geowkb_geometry` crate: `PointGeometry`, `LineStringGeometry`,
// `PolygonGeometry` and their multi-geometry counterparts. The types share the
// `SingleGeometryTrait` and `CompositeGeometryTrait` traits for consistent
// construction and sequence access across geometry kinds.

mod coordinates;
mod linestring;
mod macros;
mod multi_linestring;
mod multi_point;
mod multi_polygon;
mod point;
mod polygon;
mod ring;
mod traits;

pub use coordinates::*;
pub use linestring::*;
pub use multi_linestring::*;
pub use multi_point::*;
pub use multi_polygon::*;
pub use point::*;
pub use polygon::*;
pub use ring::*;
pub use traits::*;

use crate::geo::Geometry;
use anyhow::{Result, bail};

/// Byte-order marker of a little-endian WKB record. The format also defines
/// `0x00` for big-endian, which this codec rejects on input and never emits.
pub(crate) const MARKER_LITTLE_ENDIAN: u8 = 0x01;

/// The standard WKB type tags for the seven 2D geometry kinds.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum WkbType {
	Point = 1,
	LineString = 2,
	Polygon = 3,
	MultiPoint = 4,
	MultiLineString = 5,
	MultiPolygon = 6,
	GeometryCollection = 7,
}

impl WkbType {
	pub fn as_u32(self) -> u32 {
		self as u32
	}

	/// Maps a wire tag back to a geometry kind.
	///
	/// # Errors
	/// Fails for any value outside 1..=7.
	pub fn from_u32(value: u32) -> Result<Self> {
		Ok(match value {
			1 => WkbType::Point,
			2 => WkbType::LineString,
			3 => WkbType::Polygon,
			4 => WkbType::MultiPoint,
			5 => WkbType::MultiLineString,
			6 => WkbType::MultiPolygon,
			7 => WkbType::GeometryCollection,
			_ => bail!("unsupported WKB geometry type {value}"),
		})
	}
}

impl From<&Geometry> for WkbType {
	fn from(geometry: &Geometry) -> Self {
		use Geometry::*;
		match geometry {
			Point(_) => WkbType::Point,
			LineString(_) => WkbType::LineString,
			Polygon(_) => WkbType::Polygon,
			MultiPoint(_) => WkbType::MultiPoint,
			MultiLineString(_) => WkbType::MultiLineString,
			MultiPolygon(_) => WkbType::MultiPolygon,
			GeometryCollection(_) => WkbType::GeometryCollection,
		}
	}
}

use super::geometry_type::{MARKER_LITTLE_ENDIAN, WkbType};
use crate::geo::*;
use anyhow::{Context, Result, ensure};
use byteorder::LE;
use geowkb_core::io::{ValueReader, ValueReaderSlice};

/// Parses a little-endian WKB record into a geometry, the inverse of
/// [`super::geometry_to_wkb`].
///
/// Big-endian input (marker `0x00`) is rejected, not transcoded. Unknown type
/// tags, tag mismatches inside nested records and truncated buffers all fail
/// the whole call; there is no partial result.
pub fn wkb_to_geometry(wkb: &[u8]) -> Result<Geometry> {
	let mut reader = ValueReaderSlice::new_le(wkb);
	read_geometry(&mut reader)
}

/// Reads and validates a record header: byte-order marker, then type tag.
fn read_header(reader: &mut dyn ValueReader<'_, LE>) -> Result<WkbType> {
	let marker = reader.read_u8().context("failed to read byte-order marker")?;
	ensure!(
		marker == MARKER_LITTLE_ENDIAN,
		"unsupported byte order 0x{marker:02X}: only little-endian WKB is supported"
	);
	let tag = reader.read_u32().context("failed to read geometry type tag")?;
	WkbType::from_u32(tag)
}

/// Reads a record header and checks it announces the expected kind. Guards
/// against corrupt or truncated nested records.
fn expect_header(reader: &mut dyn ValueReader<'_, LE>, expected: WkbType) -> Result<()> {
	let found = read_header(reader)?;
	ensure!(
		found == expected,
		"invalid object type: expected {expected:?}, found {found:?}"
	);
	Ok(())
}

fn read_count(reader: &mut dyn ValueReader<'_, LE>) -> Result<u32> {
	reader.read_u32().context("failed to read element count")
}

fn read_coordinates(reader: &mut dyn ValueReader<'_, LE>) -> Result<Coordinates> {
	let x = reader.read_f64().context("failed to read x coordinate")?;
	let y = reader.read_f64().context("failed to read y coordinate")?;
	Ok(Coordinates::new(x, y))
}

fn read_point(reader: &mut dyn ValueReader<'_, LE>) -> Result<PointGeometry> {
	expect_header(reader, WkbType::Point)?;
	Ok(PointGeometry::new(read_coordinates(reader)?))
}

fn read_line_string(reader: &mut dyn ValueReader<'_, LE>) -> Result<LineStringGeometry> {
	expect_header(reader, WkbType::LineString)?;
	let count = read_count(reader)?;
	let mut line = LineStringGeometry::new();
	for _ in 0..count {
		line.push(read_coordinates(reader)?);
	}
	Ok(line)
}

fn read_polygon(reader: &mut dyn ValueReader<'_, LE>) -> Result<PolygonGeometry> {
	expect_header(reader, WkbType::Polygon)?;
	let ring_count = read_count(reader)?;
	let mut polygon = PolygonGeometry::new();
	for _ in 0..ring_count {
		// rings are framed by a bare count, not a nested record header
		let point_count = read_count(reader)?;
		let mut ring = RingGeometry::new();
		for _ in 0..point_count {
			ring.push(read_coordinates(reader)?);
		}
		polygon.push(ring);
	}
	Ok(polygon)
}

fn read_multi_point(reader: &mut dyn ValueReader<'_, LE>) -> Result<MultiPointGeometry> {
	expect_header(reader, WkbType::MultiPoint)?;
	let count = read_count(reader)?;
	let mut multi = MultiPointGeometry::new();
	for _ in 0..count {
		multi.push(read_point(reader)?);
	}
	Ok(multi)
}

fn read_multi_line_string(reader: &mut dyn ValueReader<'_, LE>) -> Result<MultiLineStringGeometry> {
	expect_header(reader, WkbType::MultiLineString)?;
	let count = read_count(reader)?;
	let mut multi = MultiLineStringGeometry::new();
	for _ in 0..count {
		multi.push(read_line_string(reader)?);
	}
	Ok(multi)
}

fn read_multi_polygon(reader: &mut dyn ValueReader<'_, LE>) -> Result<MultiPolygonGeometry> {
	expect_header(reader, WkbType::MultiPolygon)?;
	let count = read_count(reader)?;
	let mut multi = MultiPolygonGeometry::new();
	for _ in 0..count {
		multi.push(read_polygon(reader)?);
	}
	Ok(multi)
}

fn read_geometry_collection(reader: &mut dyn ValueReader<'_, LE>) -> Result<GeometryCollectionGeometry> {
	expect_header(reader, WkbType::GeometryCollection)?;
	let count = read_count(reader)?;
	let mut collection = GeometryCollectionGeometry::new();
	for _ in 0..count {
		collection.push(read_geometry(reader)?);
	}
	Ok(collection)
}

/// The shared dispatch routine: sniffs marker and tag at the current cursor
/// position, rewinds, and hands off to the per-kind parser, which re-reads and
/// re-validates the header itself. Multi*/collection children recurse through
/// this same routine, so nested records are framed uniformly.
pub(super) fn read_geometry(reader: &mut dyn ValueReader<'_, LE>) -> Result<Geometry> {
	let start = reader.position();
	let wkb_type = read_header(reader)?;
	reader.set_position(start)?;

	Ok(match wkb_type {
		WkbType::Point => Geometry::Point(read_point(reader)?),
		WkbType::LineString => Geometry::LineString(read_line_string(reader)?),
		WkbType::Polygon => Geometry::Polygon(read_polygon(reader)?),
		WkbType::MultiPoint => Geometry::MultiPoint(read_multi_point(reader)?),
		WkbType::MultiLineString => Geometry::MultiLineString(read_multi_line_string(reader)?),
		WkbType::MultiPolygon => Geometry::MultiPolygon(read_multi_polygon(reader)?),
		WkbType::GeometryCollection => Geometry::GeometryCollection(read_geometry_collection(reader)?),
	})
}

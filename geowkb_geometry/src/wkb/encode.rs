use super::geometry_type::{MARKER_LITTLE_ENDIAN, WkbType};
use crate::geo::*;
use anyhow::{Result, ensure};
use byteorder::LE;
use geowkb_core::{
	Blob,
	io::{ValueWriter, ValueWriterBlob},
};

/// Serializes a geometry into a little-endian WKB record.
///
/// Every record starts with the byte-order marker and the u32 type tag.
/// LineString and Polygon payloads inline raw coordinate pairs behind plain
/// counts, while the Multi* kinds and GeometryCollection embed each element as
/// a full nested record with its own marker and tag. This asymmetry is part of
/// the WKB standard and must be preserved for wire compatibility.
pub fn geometry_to_wkb(geometry: &Geometry) -> Result<Blob> {
	let mut writer = ValueWriterBlob::new_le();
	write_geometry(&mut writer, geometry)?;
	Ok(writer.into_blob())
}

fn write_header(writer: &mut ValueWriterBlob<LE>, wkb_type: WkbType) -> Result<()> {
	writer.write_u8(MARKER_LITTLE_ENDIAN)?;
	writer.write_u32(wkb_type.as_u32())
}

fn write_count(writer: &mut ValueWriterBlob<LE>, count: usize) -> Result<()> {
	ensure!(
		count <= u32::MAX as usize,
		"sequence of {count} elements exceeds the 32-bit WKB count range"
	);
	writer.write_u32(count as u32)
}

fn write_coordinates(writer: &mut ValueWriterBlob<LE>, coord: &Coordinates) -> Result<()> {
	writer.write_f64(coord.x())?;
	writer.write_f64(coord.y())
}

fn write_point(writer: &mut ValueWriterBlob<LE>, point: &PointGeometry) -> Result<()> {
	write_header(writer, WkbType::Point)?;
	write_coordinates(writer, point.as_coord())
}

fn write_line_string(writer: &mut ValueWriterBlob<LE>, line: &LineStringGeometry) -> Result<()> {
	write_header(writer, WkbType::LineString)?;
	write_count(writer, line.len())?;
	for coord in line.as_vec() {
		write_coordinates(writer, coord)?;
	}
	Ok(())
}

fn write_polygon(writer: &mut ValueWriterBlob<LE>, polygon: &PolygonGeometry) -> Result<()> {
	write_header(writer, WkbType::Polygon)?;
	write_count(writer, polygon.len())?;

	// rings carry no marker or tag of their own, just a count and raw pairs
	for ring in polygon.as_vec() {
		write_count(writer, ring.len())?;
		for coord in ring.as_vec() {
			write_coordinates(writer, coord)?;
		}
	}
	Ok(())
}

fn write_multi_point(writer: &mut ValueWriterBlob<LE>, multi: &MultiPointGeometry) -> Result<()> {
	write_header(writer, WkbType::MultiPoint)?;
	write_count(writer, multi.len())?;
	for point in multi.as_vec() {
		write_point(writer, point)?;
	}
	Ok(())
}

fn write_multi_line_string(
	writer: &mut ValueWriterBlob<LE>,
	multi: &MultiLineStringGeometry,
) -> Result<()> {
	write_header(writer, WkbType::MultiLineString)?;
	write_count(writer, multi.len())?;
	for line in multi.as_vec() {
		write_line_string(writer, line)?;
	}
	Ok(())
}

fn write_multi_polygon(writer: &mut ValueWriterBlob<LE>, multi: &MultiPolygonGeometry) -> Result<()> {
	write_header(writer, WkbType::MultiPolygon)?;
	write_count(writer, multi.len())?;
	for polygon in multi.as_vec() {
		write_polygon(writer, polygon)?;
	}
	Ok(())
}

fn write_geometry_collection(
	writer: &mut ValueWriterBlob<LE>,
	collection: &GeometryCollectionGeometry,
) -> Result<()> {
	write_header(writer, WkbType::GeometryCollection)?;
	write_count(writer, collection.len())?;
	for geometry in collection.as_vec() {
		write_geometry(writer, geometry)?;
	}
	Ok(())
}

pub(super) fn write_geometry(writer: &mut ValueWriterBlob<LE>, geometry: &Geometry) -> Result<()> {
	match geometry {
		Geometry::Point(g) => write_point(writer, g),
		Geometry::LineString(g) => write_line_string(writer, g),
		Geometry::Polygon(g) => write_polygon(writer, g),
		Geometry::MultiPoint(g) => write_multi_point(writer, g),
		Geometry::MultiLineString(g) => write_multi_line_string(writer, g),
		Geometry::MultiPolygon(g) => write_multi_polygon(writer, g),
		Geometry::GeometryCollection(g) => write_geometry_collection(writer, g),
	}
}

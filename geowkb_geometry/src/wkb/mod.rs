//! The Well-Known Binary (WKB) codec.
//!
//! # Overview
//!
//! Converts between [`Geometry`](crate::Geometry) trees and the little-endian
//! WKB subset covering the seven 2D geometry kinds (type tags 1..=7). There is
//! no SRID prefix and no Z/M coordinate support; big-endian input is rejected.
//!
//! Encoding and decoding are pure, synchronous transformations: each call owns
//! its cursor and buffer, so calls are independent and freely reentrant.
//!
//! The feature-level wrappers operate on a feature's geometry only and pass
//! its identifier and property bag through untouched. They are the entire
//! surface a database adapter layer needs; the wire format stays private to
//! this module.

mod decode;
mod encode;
mod geometry_type;

pub use decode::wkb_to_geometry;
pub use encode::geometry_to_wkb;
pub use geometry_type::WkbType;

use crate::geo::{GeoFeature, GeoProperties};
use anyhow::{Context, Result};
use geowkb_core::Blob;
use log::trace;

/// Encodes the geometry of a feature as WKB. The feature's id and properties
/// are not part of the wire format and are left untouched.
pub fn feature_to_wkb(feature: &GeoFeature) -> Result<Blob> {
	trace!("encoding {} feature as WKB", feature.geometry.type_name());
	geometry_to_wkb(&feature.geometry).context("failed to encode feature geometry")
}

/// Builds a feature around a geometry decoded from WKB, attaching the supplied
/// property bag and optional identifier untouched.
pub fn feature_from_wkb(wkb: &[u8], properties: GeoProperties, id: Option<u64>) -> Result<GeoFeature> {
	let geometry = wkb_to_geometry(wkb).context("failed to decode feature geometry")?;
	trace!("decoded {} feature from WKB", geometry.type_name());

	let mut feature = GeoFeature::new(geometry);
	feature.set_properties(properties);
	if let Some(id) = id {
		feature.set_id(id);
	}
	Ok(feature)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::geo::*;

	fn round_trip(geometry: Geometry) -> Result<()> {
		let wkb = geometry_to_wkb(&geometry)?;
		assert_eq!(wkb_to_geometry(wkb.as_slice())?, geometry);
		Ok(())
	}

	#[test]
	fn point_round_trip() -> Result<()> {
		round_trip(Geometry::new_point([13.404954, 52.520008]))
	}

	#[test]
	fn line_string_round_trip() -> Result<()> {
		round_trip(Geometry::new_line_string(&[[30, 10], [10, 30], [40, 40]]))
	}

	#[test]
	fn empty_line_string_round_trip() -> Result<()> {
		round_trip(Geometry::new_line_string(Vec::<[f64; 2]>::new()))
	}

	#[test]
	fn polygon_round_trip() -> Result<()> {
		round_trip(Geometry::new_polygon(&vec![
			vec![[35, 10], [45, 45], [15, 40], [10, 20], [35, 10]],
			vec![[20, 30], [35, 35], [30, 20], [20, 30]],
		]))
	}

	#[test]
	fn unclosed_polygon_round_trip() -> Result<()> {
		// ring closure is not enforced anywhere in the codec
		round_trip(Geometry::new_polygon(&[[[0, 0], [4, 0], [4, 4]]]))
	}

	#[test]
	fn multi_point_round_trip() -> Result<()> {
		round_trip(Geometry::new_multi_point(&[[10, 40], [40, 30], [20, 20], [30, 10]]))
	}

	#[test]
	fn multi_line_string_round_trip() -> Result<()> {
		round_trip(Geometry::new_multi_line_string(&[
			vec![[10, 10], [20, 20], [10, 40]],
			vec![[40, 40], [30, 30], [40, 20], [30, 10]],
		]))
	}

	#[test]
	fn multi_polygon_round_trip() -> Result<()> {
		round_trip(Geometry::new_multi_polygon(&vec![
			vec![
				vec![[0.0, 0.0], [5.0, 0.0], [2.5, 4.0], [0.0, 0.0]],
				vec![[2.0, 1.0], [2.5, 2.0], [3.0, 1.0], [2.0, 1.0]],
			],
			vec![vec![[6.0, 0.0], [9.0, 0.0], [9.0, 4.0], [6.0, 4.0], [6.0, 0.0]]],
		]))
	}

	#[test]
	fn geometry_collection_round_trip() -> Result<()> {
		round_trip(Geometry::new_geometry_collection(vec![
			Geometry::new_point([4.0, 6.0]),
			Geometry::new_line_string(&[[4, 6], [7, 10]]),
		]))
	}

	#[test]
	fn nested_geometry_collection_round_trip() -> Result<()> {
		let inner = Geometry::new_geometry_collection(vec![
			Geometry::new_multi_point(&[[1, 2], [3, 4]]),
			Geometry::new_polygon(&[[[0, 0], [1, 0], [1, 1], [0, 0]]]),
		]);
		round_trip(Geometry::new_geometry_collection(vec![
			Geometry::new_point([9.0, 9.0]),
			inner,
		]))
	}

	#[test]
	fn empty_geometry_collection_round_trip() -> Result<()> {
		round_trip(Geometry::new_geometry_collection(vec![]))
	}

	#[test]
	fn feature_wrappers_pass_properties_through() -> Result<()> {
		let feature = GeoFeature::new_example();
		let wkb = feature_to_wkb(&feature)?;

		let decoded = feature_from_wkb(wkb.as_slice(), feature.properties.clone(), feature.id)?;
		assert_eq!(decoded, feature);
		Ok(())
	}

	#[test]
	fn feature_from_wkb_without_id() -> Result<()> {
		let wkb = geometry_to_wkb(&Geometry::new_point([1.0, 2.0]))?;
		let feature = feature_from_wkb(wkb.as_slice(), GeoProperties::new(), None)?;

		assert_eq!(feature.id, None);
		assert!(feature.properties.is_empty());
		assert_eq!(feature.geometry, Geometry::new_point([1.0, 2.0]));
		Ok(())
	}

	#[test]
	fn feature_from_wkb_propagates_decode_errors() {
		let result = feature_from_wkb(&[0x00], GeoProperties::new(), None);
		assert!(result.is_err());
	}
}

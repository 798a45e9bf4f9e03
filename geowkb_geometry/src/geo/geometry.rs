#![allow(dead_code)]

use super::*;
use std::fmt::Debug;

/// A closed union over the seven geometry kinds.
///
/// Each variant carries exactly the payload shape its kind allows, so a
/// `Point` can never hold more than one position and a `Polygon` always holds
/// rings. Values are pure data: no identity, no back-references, no cycles.
#[derive(Clone, PartialEq)]
pub enum Geometry {
	Point(PointGeometry),
	LineString(LineStringGeometry),
	Polygon(PolygonGeometry),
	MultiPoint(MultiPointGeometry),
	MultiLineString(MultiLineStringGeometry),
	MultiPolygon(MultiPolygonGeometry),
	GeometryCollection(GeometryCollectionGeometry),
}

impl Geometry {
	pub fn new_point<T>(value: T) -> Self
	where
		PointGeometry: From<T>,
	{
		Self::Point(PointGeometry::from(value))
	}
	pub fn new_line_string<T>(value: T) -> Self
	where
		LineStringGeometry: From<T>,
	{
		Self::LineString(LineStringGeometry::from(value))
	}
	pub fn new_polygon<T>(value: T) -> Self
	where
		PolygonGeometry: From<T>,
	{
		Self::Polygon(PolygonGeometry::from(value))
	}
	pub fn new_multi_point<T>(value: T) -> Self
	where
		MultiPointGeometry: From<T>,
	{
		Self::MultiPoint(MultiPointGeometry::from(value))
	}
	pub fn new_multi_line_string<T>(value: T) -> Self
	where
		MultiLineStringGeometry: From<T>,
	{
		Self::MultiLineString(MultiLineStringGeometry::from(value))
	}
	pub fn new_multi_polygon<T>(value: T) -> Self
	where
		MultiPolygonGeometry: From<T>,
	{
		Self::MultiPolygon(MultiPolygonGeometry::from(value))
	}
	pub fn new_geometry_collection(geometries: Vec<Geometry>) -> Self {
		Self::GeometryCollection(GeometryCollectionGeometry(geometries))
	}

	/// Returns the name of the geometry kind, e.g. for error messages.
	pub fn type_name(&self) -> &'static str {
		match self {
			Geometry::Point(_) => "Point",
			Geometry::LineString(_) => "LineString",
			Geometry::Polygon(_) => "Polygon",
			Geometry::MultiPoint(_) => "MultiPoint",
			Geometry::MultiLineString(_) => "MultiLineString",
			Geometry::MultiPolygon(_) => "MultiPolygon",
			Geometry::GeometryCollection(_) => "GeometryCollection",
		}
	}

	/// Promotes a single geometry to its multi-geometry counterpart.
	/// Multi-geometries and collections are returned unchanged.
	pub fn into_multi(self) -> Self {
		match self {
			Geometry::Point(g) => Geometry::MultiPoint(g.into_multi()),
			Geometry::LineString(g) => Geometry::MultiLineString(g.into_multi()),
			Geometry::Polygon(g) => Geometry::MultiPolygon(g.into_multi()),
			Geometry::MultiPoint(_) => self,
			Geometry::MultiLineString(_) => self,
			Geometry::MultiPolygon(_) => self,
			Geometry::GeometryCollection(_) => self,
		}
	}

	pub fn new_example() -> Self {
		Self::new_multi_polygon(&vec![
			vec![
				vec![[0.0, 0.0], [5.0, 0.0], [2.5, 4.0], [0.0, 0.0]],
				vec![[2.0, 1.0], [2.5, 2.0], [3.0, 1.0], [2.0, 1.0]],
			],
			vec![
				vec![[6.0, 0.0], [9.0, 0.0], [9.0, 4.0], [6.0, 4.0], [6.0, 0.0]],
				vec![[7.0, 1.0], [7.0, 3.0], [8.0, 3.0], [8.0, 1.0], [7.0, 1.0]],
			],
		])
	}
}

impl Debug for Geometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let (type_name, inner): (&str, &dyn Debug) = match self {
			Geometry::Point(g) => ("Point", g),
			Geometry::LineString(g) => ("LineString", g),
			Geometry::Polygon(g) => ("Polygon", g),
			Geometry::MultiPoint(g) => ("MultiPoint", g),
			Geometry::MultiLineString(g) => ("MultiLineString", g),
			Geometry::MultiPolygon(g) => ("MultiPolygon", g),
			Geometry::GeometryCollection(g) => ("GeometryCollection", g),
		};
		f.debug_tuple(type_name).field(inner).finish()
	}
}

/// An ordered sequence of geometries of any kind, including nested collections.
#[derive(Clone, PartialEq)]
pub struct GeometryCollectionGeometry(pub Vec<Geometry>);

impl CompositeGeometryTrait<Geometry> for GeometryCollectionGeometry {
	fn new() -> Self {
		Self(Vec::new())
	}
	fn as_vec(&self) -> &Vec<Geometry> {
		&self.0
	}
	fn as_mut_vec(&mut self) -> &mut Vec<Geometry> {
		&mut self.0
	}
	fn into_inner(self) -> Vec<Geometry> {
		self.0
	}
}

impl Debug for GeometryCollectionGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn type_name() {
		assert_eq!(Geometry::new_point([1.0, 2.0]).type_name(), "Point");
		assert_eq!(Geometry::new_geometry_collection(vec![]).type_name(), "GeometryCollection");
	}

	#[test]
	fn into_multi_promotes_single_kinds() {
		let point = Geometry::new_point([1.0, 2.0]);
		let multi = point.into_multi();
		assert_eq!(multi, Geometry::new_multi_point(&[[1.0, 2.0]]));

		let line = Geometry::new_line_string(&[[0, 1], [2, 3]]);
		assert!(matches!(line.into_multi(), Geometry::MultiLineString(_)));

		let polygon = Geometry::new_polygon(&[[[0, 0], [1, 0], [1, 1], [0, 0]]]);
		assert!(matches!(polygon.into_multi(), Geometry::MultiPolygon(_)));
	}

	#[test]
	fn into_multi_keeps_multi_kinds() {
		let multi = Geometry::new_multi_point(&[[1, 2]]);
		assert_eq!(multi.clone().into_multi(), multi);

		let collection = Geometry::new_geometry_collection(vec![Geometry::new_point([1.0, 2.0])]);
		assert_eq!(collection.clone().into_multi(), collection);
	}

	#[test]
	fn collection_nests_any_kind() {
		let inner = Geometry::new_geometry_collection(vec![Geometry::new_point([3.0, 4.0])]);
		let outer = Geometry::new_geometry_collection(vec![
			Geometry::new_line_string(&[[0, 0], [1, 1]]),
			inner,
		]);
		if let Geometry::GeometryCollection(collection) = &outer {
			assert_eq!(collection.len(), 2);
		} else {
			panic!("expected a collection");
		}
	}

	#[test]
	fn debug_format() {
		let g = Geometry::new_point([1.0, 2.0]);
		assert_eq!(format!("{g:?}"), "Point([1.0, 2.0])");
	}
}

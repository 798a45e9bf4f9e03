use super::{CompositeGeometryTrait, Coordinates, MultiLineStringGeometry, SingleGeometryTrait};
use std::fmt::Debug;

/// Represents a sequence of connected coordinates forming a line, typically used for polylines or paths.
///
/// A line string may be empty; no minimum length is enforced.
#[derive(Clone, PartialEq)]
pub struct LineStringGeometry(pub Vec<Coordinates>);

impl CompositeGeometryTrait<Coordinates> for LineStringGeometry {
	/// Creates a new, empty `LineStringGeometry`.
	fn new() -> Self {
		Self(Vec::new())
	}
	/// Returns a reference to the internal vector of coordinates representing the points of the line.
	fn as_vec(&self) -> &Vec<Coordinates> {
		&self.0
	}
	/// Returns a mutable reference to the internal vector of coordinates representing the points of the line.
	fn as_mut_vec(&mut self) -> &mut Vec<Coordinates> {
		&mut self.0
	}

	/// Consumes the `LineStringGeometry` and returns the internal vector of coordinates.
	fn into_inner(self) -> Vec<Coordinates> {
		self.0
	}
}

impl SingleGeometryTrait<MultiLineStringGeometry> for LineStringGeometry {
	/// Converts this single line into a `MultiLineStringGeometry` containing just this one line.
	fn into_multi(self) -> MultiLineStringGeometry {
		MultiLineStringGeometry(vec![self])
	}
}

impl Debug for LineStringGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}

crate::impl_from_array!(LineStringGeometry, Coordinates);

impl From<geo::LineString<f64>> for LineStringGeometry {
	fn from(geometry: geo::LineString<f64>) -> Self {
		LineStringGeometry(geometry.into_iter().map(Coordinates::from).collect())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn composite_access() {
		let mut line = LineStringGeometry::from(&[[0, 0], [1, 1], [2, 0]]);
		assert_eq!(line.len(), 3);
		assert!(!line.is_empty());
		assert_eq!(line.first().unwrap().x(), 0.0);
		assert_eq!(line.last().unwrap().x(), 2.0);
		line.push(Coordinates::new(3.0, 1.0));
		assert_eq!(line.len(), 4);
	}

	#[test]
	fn empty_line_is_allowed() {
		let line = LineStringGeometry::new();
		assert!(line.is_empty());
		assert_eq!(line.len(), 0);
	}

	#[test]
	fn into_multi() {
		let line = LineStringGeometry::from(&[[0, 1], [2, 3]]);
		let multi = line.clone().into_multi();
		assert_eq!(multi.as_vec().len(), 1);
		assert_eq!(multi.as_vec()[0], line);
	}

	#[test]
	fn from_geo_linestring() {
		let ls = geo::LineString::from(vec![geo::Coord { x: 0.0, y: 0.0 }, geo::Coord { x: 1.0, y: 1.0 }]);
		let line = LineStringGeometry::from(ls);
		assert_eq!(line.len(), 2);
	}
}

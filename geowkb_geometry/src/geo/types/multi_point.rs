use super::{CompositeGeometryTrait, PointGeometry};
use std::fmt::Debug;

/// Represents a collection of points, used to store multiple discrete locations.
#[derive(Clone, PartialEq)]
pub struct MultiPointGeometry(pub Vec<PointGeometry>);

/// Provides methods to access and manage the internal vector of points for `MultiPointGeometry`.
impl CompositeGeometryTrait<PointGeometry> for MultiPointGeometry {
	/// Creates a new, empty `MultiPointGeometry`.
	fn new() -> Self {
		Self(Vec::new())
	}
	/// Returns an immutable reference to the internal vector of points.
	fn as_vec(&self) -> &Vec<PointGeometry> {
		&self.0
	}
	/// Returns a mutable reference to the internal vector of points.
	fn as_mut_vec(&mut self) -> &mut Vec<PointGeometry> {
		&mut self.0
	}
	/// Consumes self and returns the internal vector of points.
	fn into_inner(self) -> Vec<PointGeometry> {
		self.0
	}
}

/// Implements the `Debug` trait to print the list of contained points in a developer-friendly format.
impl Debug for MultiPointGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}

crate::impl_from_array!(MultiPointGeometry, PointGeometry);

#[cfg(test)]
mod tests {
	use super::*;

	fn sample() -> MultiPointGeometry {
		MultiPointGeometry::from(&[[1, 2], [3, 4], [5, 6]])
	}

	#[test]
	fn composite_new_is_empty() {
		let mp = MultiPointGeometry::new();
		assert!(mp.is_empty());
		assert_eq!(mp.len(), 0);
	}

	#[test]
	fn composite_push_and_len() {
		let mut mp = MultiPointGeometry::new();
		mp.push(PointGeometry::from(&[1, 2]));
		mp.push(PointGeometry::from(&[3, 4]));
		assert_eq!(mp.len(), 2);
		assert!(!mp.is_empty());
	}

	#[test]
	fn composite_first_last() {
		let mp = sample();
		assert_eq!(mp.first().unwrap().x(), 1.0);
		assert_eq!(mp.last().unwrap().x(), 5.0);
	}

	#[test]
	fn composite_pop() {
		let mut mp = sample();
		let popped = mp.pop().unwrap();
		assert_eq!(popped.x(), 5.0);
		assert_eq!(mp.len(), 2);
	}

	#[test]
	fn composite_into_iter() {
		let points: Vec<_> = sample().into_iter().collect();
		assert_eq!(points.len(), 3);
	}

	#[test]
	fn from_vec() {
		let mp = MultiPointGeometry::from(vec![(1.0, 2.0), (3.0, 4.0)]);
		assert_eq!(mp.len(), 2);
	}

	#[test]
	fn clone_and_eq() {
		let a = sample();
		assert_eq!(a.clone(), a);
	}
}

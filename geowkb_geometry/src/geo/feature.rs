#![allow(dead_code)]

use super::*;

/// A geometry together with an opaque property bag and an optional identifier.
#[derive(Clone, Debug, PartialEq)]
pub struct GeoFeature {
	pub id: Option<u64>,
	pub geometry: Geometry,
	pub properties: GeoProperties,
}

impl GeoFeature {
	pub fn new(geometry: Geometry) -> Self {
		Self {
			id: None,
			geometry,
			properties: GeoProperties::new(),
		}
	}

	pub fn set_id(&mut self, id: u64) {
		self.id = Some(id);
	}

	pub fn set_properties(&mut self, properties: GeoProperties) {
		self.properties = properties;
	}

	pub fn set_property<T>(&mut self, key: String, value: T)
	where
		GeoValue: From<T>,
	{
		self.properties.insert(key, GeoValue::from(value));
	}

	#[cfg(test)]
	pub fn new_example() -> Self {
		Self {
			id: Some(13),
			geometry: Geometry::new_example(),
			properties: GeoProperties::from(vec![
				("name", GeoValue::from("Nice")),
				("population", GeoValue::from(348085)),
				("is_nice", GeoValue::from(true)),
			]),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn new_has_no_id_and_no_properties() {
		let feature = GeoFeature::new(Geometry::new_point([1.0, 2.0]));
		assert_eq!(feature.id, None);
		assert!(feature.properties.is_empty());
	}

	#[test]
	fn set_id_and_property() {
		let mut feature = GeoFeature::new(Geometry::new_point([1.0, 2.0]));
		feature.set_id(42);
		feature.set_property("name".to_string(), "test");
		assert_eq!(feature.id, Some(42));
		assert_eq!(feature.properties.get("name"), Some(&GeoValue::from("test")));
	}
}

#![allow(dead_code)]

use super::GeoValue;
use std::{
	collections::{BTreeMap, btree_map},
	fmt::Debug,
};

/// An opaque property bag attached to a feature: an ordered map from string
/// keys to [`GeoValue`]s. The WKB codec never inspects it; it is passed
/// through feature conversions untouched.
#[derive(Clone, PartialEq)]
pub struct GeoProperties {
	properties: BTreeMap<String, GeoValue>,
}

impl Default for GeoProperties {
	fn default() -> Self {
		Self::new()
	}
}

impl GeoProperties {
	pub fn new() -> GeoProperties {
		GeoProperties {
			properties: BTreeMap::new(),
		}
	}
	pub fn insert(&mut self, key: String, value: GeoValue) {
		self.properties.insert(key, value);
	}
	pub fn get(&self, key: &str) -> Option<&GeoValue> {
		self.properties.get(key)
	}
	pub fn iter(&self) -> btree_map::Iter<String, GeoValue> {
		self.properties.iter()
	}
	pub fn len(&self) -> usize {
		self.properties.len()
	}
	pub fn is_empty(&self) -> bool {
		self.properties.is_empty()
	}
}

impl IntoIterator for GeoProperties {
	type Item = (String, GeoValue);
	type IntoIter = btree_map::IntoIter<String, GeoValue>;
	fn into_iter(self) -> Self::IntoIter {
		self.properties.into_iter()
	}
}

impl From<Vec<(&str, GeoValue)>> for GeoProperties {
	fn from(value: Vec<(&str, GeoValue)>) -> Self {
		GeoProperties {
			properties: value.into_iter().map(|(k, v)| (k.to_string(), v)).collect(),
		}
	}
}

impl FromIterator<(String, GeoValue)> for GeoProperties {
	fn from_iter<T: IntoIterator<Item = (String, GeoValue)>>(iter: T) -> Self {
		GeoProperties {
			properties: BTreeMap::from_iter(iter),
		}
	}
}

impl Debug for GeoProperties {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_map().entries(self.properties.iter()).finish()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn insert_and_get() {
		let mut props = GeoProperties::new();
		props.insert("name".to_string(), GeoValue::from("Nice"));
		assert_eq!(props.get("name"), Some(&GeoValue::from("Nice")));
		assert_eq!(props.get("missing"), None);
		assert_eq!(props.len(), 1);
		assert!(!props.is_empty());
	}

	#[test]
	fn from_vec() {
		let props = GeoProperties::from(vec![
			("population", GeoValue::from(348085)),
			("is_nice", GeoValue::from(true)),
		]);
		assert_eq!(props.len(), 2);
		assert_eq!(props.get("is_nice"), Some(&GeoValue::Bool(true)));
	}

	#[test]
	fn iteration_is_ordered() {
		let props = GeoProperties::from(vec![
			("b", GeoValue::from(2u64)),
			("a", GeoValue::from(1u64)),
		]);
		let keys: Vec<_> = props.iter().map(|(k, _)| k.as_str()).collect();
		assert_eq!(keys, vec!["a", "b"]);
	}
}

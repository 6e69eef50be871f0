// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Ordered key/value mapping used for visitor, client, event and config data.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// An insertion-ordered mapping of property names to values.
///
/// Keys keep the position of their first insertion; overwriting a key
/// replaces the value in place. This keeps serialized query strings
/// deterministic for a given sequence of calls.
///
/// # Example
///
/// ```
/// use woopra_core::Properties;
///
/// let props = Properties::new()
///     .insert("plan", "pro")
///     .insert("seats", 12)
///     .insert("trial", false);
///
/// assert_eq!(props.len(), 3);
/// assert_eq!(props.get_str("plan"), Some("pro"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Properties {
	inner: Map<String, Value>,
}

impl Properties {
	/// Creates a new empty mapping.
	pub fn new() -> Self {
		Self { inner: Map::new() }
	}

	/// Inserts a key-value pair (builder style).
	pub fn insert<K, V>(mut self, key: K, value: V) -> Self
	where
		K: Into<String>,
		V: Into<Value>,
	{
		self.set(key, value);
		self
	}

	/// Inserts a key-value pair in place.
	pub fn set<K, V>(&mut self, key: K, value: V)
	where
		K: Into<String>,
		V: Into<Value>,
	{
		self.inner.insert(key.into(), value.into());
	}

	/// Merges another mapping into this one (builder style).
	///
	/// If both contain the same key, the value from `other` takes precedence.
	pub fn merge(mut self, other: Properties) -> Self {
		self.extend(other);
		self
	}

	/// Shallow-merges `other` into this mapping in place.
	pub fn extend(&mut self, other: Properties) {
		for (k, v) in other.inner {
			self.inner.insert(k, v);
		}
	}

	/// Returns true if the mapping is empty.
	pub fn is_empty(&self) -> bool {
		self.inner.is_empty()
	}

	/// Returns the number of keys.
	pub fn len(&self) -> usize {
		self.inner.len()
	}

	/// Gets a value by key.
	pub fn get(&self, key: &str) -> Option<&Value> {
		self.inner.get(key)
	}

	/// Gets a value by key if it is a string.
	pub fn get_str(&self, key: &str) -> Option<&str> {
		self.inner.get(key).and_then(Value::as_str)
	}

	/// Returns true if `key` is present.
	pub fn contains_key(&self, key: &str) -> bool {
		self.inner.contains_key(key)
	}

	/// Returns true if `key` holds something other than `null`, `false` or `""`.
	pub fn has_value(&self, key: &str) -> bool {
		match self.inner.get(key) {
			None | Some(Value::Null) | Some(Value::Bool(false)) => false,
			Some(Value::String(s)) => !s.is_empty(),
			Some(_) => true,
		}
	}

	/// Iterates over entries in insertion order.
	pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
		self.inner.iter()
	}

	/// Converts the mapping into a `serde_json::Value`.
	pub fn into_value(self) -> Value {
		Value::Object(self.inner)
	}
}

impl<'a> IntoIterator for &'a Properties {
	type Item = (&'a String, &'a Value);
	type IntoIter = serde_json::map::Iter<'a>;

	fn into_iter(self) -> Self::IntoIter {
		self.inner.iter()
	}
}

impl<K, V> FromIterator<(K, V)> for Properties
where
	K: Into<String>,
	V: Into<Value>,
{
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		let mut props = Properties::new();
		for (k, v) in iter {
			props.set(k, v);
		}
		props
	}
}

impl From<Properties> for Value {
	fn from(props: Properties) -> Self {
		props.into_value()
	}
}

impl From<Value> for Properties {
	fn from(value: Value) -> Self {
		match value {
			Value::Object(map) => Self { inner: map },
			_ => Self::new(),
		}
	}
}

impl From<Map<String, Value>> for Properties {
	fn from(map: Map<String, Value>) -> Self {
		Self { inner: map }
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;

	#[test]
	fn test_properties_new_is_empty() {
		let props = Properties::new();
		assert!(props.is_empty());
		assert_eq!(props.len(), 0);
	}

	#[test]
	fn test_properties_insert_values() {
		let props = Properties::new()
			.insert("name", "Bob")
			.insert("age", 30)
			.insert("active", true);

		assert_eq!(props.len(), 3);
		assert_eq!(props.get_str("name"), Some("Bob"));
		assert_eq!(props.get("age"), Some(&Value::Number(30.into())));
		assert_eq!(props.get("active"), Some(&Value::Bool(true)));
	}

	#[test]
	fn test_properties_merge_later_wins() {
		let props1 = Properties::new().insert("a", 1).insert("b", 2);
		let props2 = Properties::new().insert("b", 20).insert("c", 3);

		let merged = props1.merge(props2);

		assert_eq!(merged.len(), 3);
		assert_eq!(merged.get("a"), Some(&Value::Number(1.into())));
		assert_eq!(merged.get("b"), Some(&Value::Number(20.into())));
		assert_eq!(merged.get("c"), Some(&Value::Number(3.into())));
	}

	#[test]
	fn test_properties_overwrite_keeps_position() {
		let mut props = Properties::new().insert("first", 1).insert("second", 2);
		props.set("first", 10);

		let keys: Vec<&str> = props.iter().map(|(k, _)| k.as_str()).collect();
		assert_eq!(keys, vec!["first", "second"]);
		assert_eq!(props.get("first"), Some(&Value::Number(10.into())));
	}

	#[test]
	fn test_properties_iterates_in_insertion_order() {
		let props = Properties::new()
			.insert("zeta", 1)
			.insert("alpha", 2)
			.insert("mid", 3);

		let keys: Vec<&str> = props.iter().map(|(k, _)| k.as_str()).collect();
		assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
	}

	#[test]
	fn test_has_value() {
		let props = Properties::new()
			.insert("empty", "")
			.insert("null", Value::Null)
			.insert("no", false)
			.insert("zero", 0)
			.insert("cookie", "abc");

		assert!(!props.has_value("missing"));
		assert!(!props.has_value("empty"));
		assert!(!props.has_value("null"));
		assert!(!props.has_value("no"));
		assert!(props.has_value("zero"));
		assert!(props.has_value("cookie"));
	}

	#[test]
	fn test_properties_from_non_object_value() {
		let props = Properties::from(Value::String("not an object".to_string()));
		assert!(props.is_empty());
	}

	#[test]
	fn test_properties_from_iter() {
		let props: Properties = vec![("a", "1"), ("b", "2")].into_iter().collect();
		assert_eq!(props.get_str("b"), Some("2"));
	}

	proptest! {
		#[test]
		fn properties_len_matches_unique_keys(keys in proptest::collection::vec("[a-z]{1,10}", 0..20)) {
			let unique_keys: std::collections::HashSet<_> = keys.iter().cloned().collect();
			let mut props = Properties::new();
			for key in &keys {
				props.set(key.clone(), "value");
			}
			prop_assert_eq!(props.len(), unique_keys.len());
		}

		#[test]
		fn extend_keeps_unrelated_keys(
			left in proptest::collection::btree_map("[a-m]{1,6}", "[a-z0-9]{0,8}", 0..10),
			right in proptest::collection::btree_map("[h-z]{1,6}", "[a-z0-9]{0,8}", 0..10),
		) {
			let mut props: Properties = left.clone().into_iter().collect();
			props.extend(right.clone().into_iter().collect());

			for (k, v) in &right {
				prop_assert_eq!(props.get_str(k), Some(v.as_str()));
			}
			for (k, v) in &left {
				if !right.contains_key(k) {
					prop_assert_eq!(props.get_str(k), Some(v.as_str()));
				}
			}
		}
	}
}

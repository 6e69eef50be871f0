// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Query-string serialization for tracking requests.
//!
//! Each logical group of data (client, visitor, event) becomes a
//! *fragment* of `key=value` pairs joined by `&`. Visitor and event keys are
//! namespaced with [`VISITOR_PREFIX`] and [`EVENT_PREFIX`].

use serde_json::Value;

use crate::properties::Properties;

/// Prefix applied to every visitor property key.
pub const VISITOR_PREFIX: &str = "cv_";

/// Prefix applied to every custom event property key.
pub const EVENT_PREFIX: &str = "ce_";

/// Builds a `&`-joined, percent-encoded query fragment.
///
/// Returns `None` when `params` is `None`. Keys are emitted in insertion
/// order, each as `prefix + encode(key) + "=" + encode(value)`. The prefix is
/// not encoded.
///
/// ```
/// use woopra_core::{build_params, Properties};
///
/// let props = Properties::new().insert("email", "a@b.com").insert("plan", "pro plus");
/// assert_eq!(
///     build_params(Some(&props), Some("cv_")).as_deref(),
///     Some("cv_email=a%40b.com&cv_plan=pro%20plus"),
/// );
/// assert_eq!(build_params(None, None), None);
/// ```
pub fn build_params(params: Option<&Properties>, prefix: Option<&str>) -> Option<String> {
	let params = params?;
	let prefix = prefix.unwrap_or("");

	let pairs: Vec<String> = params
		.iter()
		.map(|(key, value)| {
			format!(
				"{prefix}{}={}",
				urlencoding::encode(key),
				urlencoding::encode(&value_to_param(value))
			)
		})
		.collect();

	Some(pairs.join("&"))
}

/// Renders a property value as the text sent on the wire.
///
/// Strings are sent verbatim, `null` as an empty value, and arrays or
/// objects as compact JSON. Whole-valued floats drop their fraction, so
/// `1.0` is sent as `1`.
pub fn value_to_param(value: &Value) -> String {
	match value {
		Value::String(s) => s.clone(),
		Value::Null => String::new(),
		Value::Bool(b) => b.to_string(),
		Value::Number(n) => match n.as_f64() {
			Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() < 1e21 => {
				// -0.0 renders as "0"
				format!("{:.0}", f + 0.0)
			}
			_ => n.to_string(),
		},
		other => other.to_string(),
	}
}

/// Joins non-empty fragments into a single query string.
pub fn join_fragments<I>(fragments: I) -> String
where
	I: IntoIterator<Item = Option<String>>,
{
	fragments
		.into_iter()
		.flatten()
		.filter(|f| !f.is_empty())
		.collect::<Vec<_>>()
		.join("&")
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;

	#[test]
	fn test_build_params_none_is_none() {
		assert_eq!(build_params(None, Some(VISITOR_PREFIX)), None);
	}

	#[test]
	fn test_build_params_empty_is_empty_string() {
		assert_eq!(build_params(Some(&Properties::new()), None), Some(String::new()));
	}

	#[test]
	fn test_build_params_without_prefix() {
		let props = Properties::new().insert("screen", "1024x768").insert("ip", "0.0.0.0");
		assert_eq!(
			build_params(Some(&props), None).unwrap(),
			"screen=1024x768&ip=0.0.0.0"
		);
	}

	#[test]
	fn test_build_params_encodes_keys_and_values() {
		let props = Properties::new().insert("a&b", "c=d e");
		assert_eq!(
			build_params(Some(&props), Some(EVENT_PREFIX)).unwrap(),
			"ce_a%26b=c%3Dd%20e"
		);
	}

	#[test]
	fn test_build_params_scalar_values() {
		let props = Properties::new()
			.insert("count", 3)
			.insert("price", 9.5)
			.insert("active", true)
			.insert("gone", Value::Null);
		assert_eq!(
			build_params(Some(&props), None).unwrap(),
			"count=3&price=9.5&active=true&gone="
		);
	}

	#[test]
	fn test_whole_floats_drop_fraction() {
		let props = Properties::new()
			.insert("x", 1.0)
			.insert("neg", -3.0)
			.insert("zero", -0.0)
			.insert("half", 0.5);
		assert_eq!(
			build_params(Some(&props), Some(EVENT_PREFIX)).unwrap(),
			"ce_x=1&ce_neg=-3&ce_zero=0&ce_half=0.5"
		);
	}

	#[test]
	fn test_build_params_nested_value_as_json() {
		let props = Properties::new().insert("tags", serde_json::json!(["a", "b"]));
		assert_eq!(
			build_params(Some(&props), None).unwrap(),
			"tags=%5B%22a%22%2C%22b%22%5D"
		);
	}

	#[test]
	fn test_join_fragments_skips_missing_and_empty() {
		let query = join_fragments([
			Some("website=x".to_string()),
			None,
			Some(String::new()),
			Some("cv_email=y".to_string()),
		]);
		assert_eq!(query, "website=x&cv_email=y");
	}

	proptest! {
		#[test]
		fn one_term_per_key(
			entries in proptest::collection::btree_map("[a-z]{1,8}", "[a-zA-Z0-9 @&=]{0,12}", 1..12),
			prefix in "[a-z]{0,3}_?",
		) {
			let props: Properties = entries.clone().into_iter().collect();
			let fragment = build_params(Some(&props), Some(prefix.as_str())).unwrap();
			let terms: Vec<&str> = fragment.split('&').collect();

			prop_assert_eq!(terms.len(), entries.len());
			for ((key, value), term) in entries.iter().zip(terms) {
				let expected = format!(
					"{prefix}{}={}",
					urlencoding::encode(key),
					urlencoding::encode(value)
				);
				prop_assert_eq!(term, expected.as_str());
			}
		}

		#[test]
		fn encoded_values_never_contain_separators(value in "[ -~]{0,24}") {
			let props = Properties::new().insert("k", value);
			let fragment = build_params(Some(&props), None).unwrap();
			let (_, encoded) = fragment.split_once('=').unwrap();
			prop_assert!(!encoded.contains('&'));
			prop_assert!(!encoded.contains('='));
			prop_assert!(!encoded.contains(' '));
		}
	}
}

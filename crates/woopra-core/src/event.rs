// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Custom events.

use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::params::{build_params, join_fragments, EVENT_PREFIX};
use crate::properties::Properties;

/// Query key carrying the event name.
pub const EVENT: &str = "event";
/// Query key carrying the explicit event time, in epoch milliseconds.
pub const TIMESTAMP: &str = "timestamp";

/// Per-call tracking options.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrackOptions {
	/// When the event happened. Defaults to the time the server receives it.
	pub timestamp: Option<DateTime<Utc>>,
}

/// A named event with optional properties and options.
///
/// ```
/// use woopra_core::Event;
///
/// let event = Event::new("checkout").property("total", 42).property("currency", "EUR");
/// assert_eq!(event.name(), "checkout");
/// assert_eq!(event.to_query(), "event=checkout&ce_total=42&ce_currency=EUR");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
	name: String,
	properties: Properties,
	options: TrackOptions,
}

impl Event {
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			properties: Properties::new(),
			options: TrackOptions::default(),
		}
	}

	pub fn property(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
		self.properties.set(key, value);
		self
	}

	pub fn properties(mut self, properties: Properties) -> Self {
		self.properties.extend(properties);
		self
	}

	pub fn timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
		self.options.timestamp = Some(timestamp);
		self
	}

	pub fn options(mut self, options: TrackOptions) -> Self {
		self.options = options;
		self
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	pub fn event_properties(&self) -> &Properties {
		&self.properties
	}

	pub fn track_options(&self) -> &TrackOptions {
		&self.options
	}

	/// Serializes the event part of a tracking query.
	///
	/// The name and timestamp are unprefixed; custom properties carry
	/// [`EVENT_PREFIX`].
	pub fn to_query(&self) -> String {
		let mut head = Properties::new().insert(EVENT, self.name.clone());
		if let Some(ts) = self.options.timestamp {
			head.set(TIMESTAMP, ts.timestamp_millis());
		}

		join_fragments([
			build_params(Some(&head), None),
			build_params(Some(&self.properties), Some(EVENT_PREFIX)),
		])
	}
}

impl From<&str> for Event {
	fn from(name: &str) -> Self {
		Event::new(name)
	}
}

impl From<String> for Event {
	fn from(name: String) -> Self {
		Event::new(name)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use chrono::TimeZone;

	#[test]
	fn test_name_only_query() {
		assert_eq!(Event::new("test").to_query(), "event=test");
	}

	#[test]
	fn test_properties_get_event_prefix() {
		let event = Event::new("test").property("property", true);
		assert_eq!(event.to_query(), "event=test&ce_property=true");
	}

	#[test]
	fn test_timestamp_is_unprefixed_millis() {
		let ts = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
		let event = Event::new("signup").property("x", 1).timestamp(ts);
		assert_eq!(
			event.to_query(),
			format!("event=signup&timestamp={}&ce_x=1", ts.timestamp_millis())
		);
	}

	#[test]
	fn test_event_name_is_encoded() {
		let event = Event::new("added to cart");
		assert_eq!(event.to_query(), "event=added%20to%20cart");
	}

	#[test]
	fn test_properties_merge() {
		let event = Event::new("e")
			.property("a", 1)
			.properties(Properties::new().insert("a", 2).insert("b", 3));
		assert_eq!(event.event_properties().get("a"), Some(&Value::from(2)));
		assert_eq!(event.event_properties().len(), 2);
	}

	#[test]
	fn test_options_replace_track_options() {
		let ts = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
		let event = Event::new("e")
			.timestamp(Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap())
			.options(TrackOptions { timestamp: Some(ts) });
		assert_eq!(event.track_options().timestamp, Some(ts));

		let cleared = event.options(TrackOptions::default());
		assert_eq!(cleared.track_options(), &TrackOptions::default());
		assert_eq!(cleared.to_query(), "event=e");
	}

	#[test]
	fn test_event_property_named_event_stays_prefixed() {
		let event = Event::new("e").property("event", "shadow");
		assert_eq!(event.to_query(), "event=e&ce_event=shadow");
	}
}

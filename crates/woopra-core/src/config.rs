// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Tracker configuration options.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::properties::Properties;

/// Option key holding the project key (usually the website domain).
pub const DOMAIN: &str = "domain";
/// Option key selecting `https` (true) or `http` (false).
pub const SSL: &str = "ssl";

/// Snapshot of the tracker configuration.
///
/// Configuration is an open mapping: besides [`DOMAIN`] and [`SSL`] it keeps
/// any extra option it is given. Updates are shallow merges.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Config {
	options: Properties,
}

impl Config {
	/// Creates a configuration holding only the defaults (`ssl = true`).
	pub fn new() -> Self {
		Self {
			options: Properties::new().insert(SSL, true),
		}
	}

	/// Creates a configuration for `domain` with default options.
	pub fn for_domain(domain: impl Into<String>) -> Self {
		let mut config = Self::new();
		config.options.set(DOMAIN, Value::String(domain.into()));
		config
	}

	/// Shallow-merges `options` into this configuration.
	pub fn merge(&mut self, options: Properties) {
		self.options.extend(options);
	}

	/// The configured project key, if it is a string.
	pub fn domain(&self) -> Option<&str> {
		self.options.get_str(DOMAIN)
	}

	/// Whether requests use `https`.
	///
	/// `ssl` is a boolean option: only an explicit `false` disables SSL.
	/// Any other value (`null`, `0`, `"no"`) is not treated as falsy and
	/// keeps `https`.
	pub fn ssl(&self) -> bool {
		!matches!(self.options.get(SSL), Some(Value::Bool(false)))
	}

	/// URL scheme derived from [`Config::ssl`].
	pub fn scheme(&self) -> &'static str {
		if self.ssl() {
			"https"
		} else {
			"http"
		}
	}

	/// Gets any option by key.
	pub fn get(&self, key: &str) -> Option<&Value> {
		self.options.get(key)
	}

	/// Borrows the raw option mapping.
	pub fn options(&self) -> &Properties {
		&self.options
	}
}

impl Default for Config {
	fn default() -> Self {
		Self::new()
	}
}

/// Builds a [`Properties`] update for [`Config`] with typed setters.
///
/// ```
/// use woopra_core::{Config, ConfigOptions};
///
/// let mut config = Config::for_domain("example.com");
/// config.merge(ConfigOptions::new().ssl(false).into());
/// assert!(!config.ssl());
/// assert_eq!(config.domain(), Some("example.com"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigOptions {
	options: Properties,
}

impl ConfigOptions {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn domain(mut self, domain: impl Into<String>) -> Self {
		self.options.set(DOMAIN, Value::String(domain.into()));
		self
	}

	pub fn ssl(mut self, ssl: bool) -> Self {
		self.options.set(SSL, ssl);
		self
	}

	/// Sets an arbitrary option.
	pub fn set(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
		self.options.set(key, value);
		self
	}
}

impl From<ConfigOptions> for Properties {
	fn from(options: ConfigOptions) -> Self {
		options.options
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_defaults_enable_ssl() {
		let config = Config::new();
		assert!(config.ssl());
		assert_eq!(config.scheme(), "https");
		assert_eq!(config.domain(), None);
	}

	#[test]
	fn test_merge_later_wins_and_keeps_unrelated_keys() {
		let mut config = Config::new();
		config.merge(ConfigOptions::new().domain("test-woopra.com").into());
		config.merge(
			ConfigOptions::new()
				.domain("woopra3.com")
				.set("domain2", "woopra2.com")
				.into(),
		);

		assert_eq!(config.domain(), Some("woopra3.com"));
		assert_eq!(config.get("domain2"), Some(&Value::from("woopra2.com")));
		assert!(config.ssl());
	}

	#[test]
	fn test_ssl_false_selects_http() {
		let mut config = Config::for_domain("example.com");
		config.merge(ConfigOptions::new().ssl(false).into());
		assert_eq!(config.scheme(), "http");
	}

	#[test]
	fn test_non_boolean_ssl_keeps_https() {
		for value in [Value::from("no"), Value::Null, Value::from(0)] {
			let mut config = Config::new();
			config.merge(Properties::new().insert(SSL, value));
			assert!(config.ssl());
		}
	}

	#[test]
	fn test_options_exposes_extra_keys_in_order() {
		let mut config = Config::for_domain("example.com");
		config.merge(ConfigOptions::new().set("region", "eu").into());

		let keys: Vec<&str> = config.options().iter().map(|(k, _)| k.as_str()).collect();
		assert_eq!(keys, vec![SSL, DOMAIN, "region"]);
	}
}

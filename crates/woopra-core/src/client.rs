// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Client (browser/environment) metadata sent with every request.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::properties::Properties;

/// Visitor's screen resolution, `<width>x<height>`.
pub const SCREEN: &str = "screen";
/// Visitor's language, e.g. `en-US`.
pub const LANGUAGE: &str = "language";
/// Referrer of the visitor.
pub const REFERER: &str = "referer";
/// Session ID of the visitor; identifies anonymous visitors.
pub const COOKIE: &str = "cookie";
/// IP address of the visitor.
pub const IP: &str = "ip";
/// Derived key carrying the project key.
pub const WEBSITE: &str = "website";
/// Derived key identifying this SDK.
pub const APP: &str = "app";

/// IP used when the server acts on behalf of the visitor.
pub const DEFAULT_IP: &str = "0.0.0.0";
/// Value of the [`APP`] key.
pub const APP_NAME: &str = "rust";

/// Client metadata.
///
/// `ClientData::new()` is empty and suited to building updates;
/// [`ClientData::defaults`] is the baseline a tracker starts from.
///
/// ```
/// use woopra_core::ClientData;
///
/// let update = ClientData::new().screen("1024x768").language("en-US");
/// assert_eq!(update.get_screen(), Some("1024x768"));
/// assert_eq!(ClientData::defaults().get_ip(), Some("0.0.0.0"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClientData {
	fields: Properties,
}

impl ClientData {
	pub fn new() -> Self {
		Self::default()
	}

	/// Baseline client data: only `ip = 0.0.0.0`.
	pub fn defaults() -> Self {
		Self {
			fields: Properties::new().insert(IP, DEFAULT_IP),
		}
	}

	pub fn screen(self, screen: impl Into<String>) -> Self {
		self.with(SCREEN, Value::String(screen.into()))
	}

	pub fn language(self, language: impl Into<String>) -> Self {
		self.with(LANGUAGE, Value::String(language.into()))
	}

	pub fn referer(self, referer: impl Into<String>) -> Self {
		self.with(REFERER, Value::String(referer.into()))
	}

	pub fn cookie(self, cookie: impl Into<String>) -> Self {
		self.with(COOKIE, Value::String(cookie.into()))
	}

	pub fn ip(self, ip: impl Into<String>) -> Self {
		self.with(IP, Value::String(ip.into()))
	}

	/// Sets an arbitrary client field.
	pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
		self.fields.set(key, value);
		self
	}

	/// Shallow-merges `properties` into the stored fields.
	pub fn merge(&mut self, properties: Properties) {
		self.fields.extend(properties);
	}

	/// Returns a copy overlaid with the derived `website` and `app` keys.
	pub fn with_derived(&self, website: Option<&str>) -> Self {
		let mut view = self.clone();
		view.fields.set(
			WEBSITE,
			website.map(Value::from).unwrap_or(Value::Null),
		);
		view.fields.set(APP, APP_NAME);
		view
	}

	pub fn get_screen(&self) -> Option<&str> {
		self.fields.get_str(SCREEN)
	}

	pub fn get_language(&self) -> Option<&str> {
		self.fields.get_str(LANGUAGE)
	}

	pub fn get_referer(&self) -> Option<&str> {
		self.fields.get_str(REFERER)
	}

	pub fn get_cookie(&self) -> Option<&str> {
		self.fields.get_str(COOKIE)
	}

	pub fn get_ip(&self) -> Option<&str> {
		self.fields.get_str(IP)
	}

	pub fn get_website(&self) -> Option<&str> {
		self.fields.get_str(WEBSITE)
	}

	pub fn get(&self, key: &str) -> Option<&Value> {
		self.fields.get(key)
	}

	pub fn contains_key(&self, key: &str) -> bool {
		self.fields.contains_key(key)
	}

	/// Returns true if a non-empty session cookie is set.
	pub fn has_cookie(&self) -> bool {
		self.fields.has_value(COOKIE)
	}

	pub fn properties(&self) -> &Properties {
		&self.fields
	}
}

impl From<ClientData> for Properties {
	fn from(client: ClientData) -> Self {
		client.fields
	}
}

impl From<Properties> for ClientData {
	fn from(fields: Properties) -> Self {
		Self { fields }
	}
}

// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Visitor identity and visitor properties.

use serde_json::Value;

use crate::client::COOKIE;
use crate::properties::Properties;

/// Visitor property holding a unique visitor identifier.
pub const ID: &str = "id";
/// Visitor property holding the visitor's email.
pub const EMAIL: &str = "email";

/// Arguments to an identify call.
///
/// ```
/// use woopra_core::{Identify, Properties};
///
/// // Email form: properties are merged first, then `email` is set.
/// let by_email = Identify::email("ada@example.com").with_properties(
///     Properties::new().insert("plan", "pro"),
/// );
///
/// // Mapping form: the identity travels inside the properties.
/// let by_props = Identify::from(Properties::new().insert("id", "u-42").insert("plan", "pro"));
/// # let _ = (by_email, by_props);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Identify {
	/// A property mapping expected to carry `id` or `email`.
	Properties(Properties),
	/// An explicit email identity with additional properties.
	Email { email: String, properties: Properties },
}

impl Identify {
	/// Identifies the visitor by email.
	pub fn email(email: impl Into<String>) -> Self {
		Identify::Email {
			email: email.into(),
			properties: Properties::new(),
		}
	}

	/// Identifies the visitor by an opaque id.
	pub fn id(id: impl Into<String>) -> Self {
		Identify::Properties(Properties::new().insert(ID, Value::String(id.into())))
	}

	/// Adds visitor properties to this call.
	pub fn with_properties(self, extra: Properties) -> Self {
		match self {
			Identify::Properties(props) => Identify::Properties(props.merge(extra)),
			Identify::Email { email, properties } => Identify::Email {
				email,
				properties: properties.merge(extra),
			},
		}
	}

	/// Adds one visitor property to this call.
	pub fn property(self, key: impl Into<String>, value: impl Into<Value>) -> Self {
		self.with_properties(Properties::new().insert(key, value))
	}

	/// Applies this call to a visitor store.
	pub fn apply_to(self, visitor: &mut Properties) {
		match self {
			Identify::Properties(props) => visitor.extend(props),
			Identify::Email { email, properties } => {
				visitor.extend(properties);
				visitor.set(EMAIL, email);
			}
		}
	}
}

impl From<&str> for Identify {
	fn from(email: &str) -> Self {
		Identify::email(email)
	}
}

impl From<String> for Identify {
	fn from(email: String) -> Self {
		Identify::email(email)
	}
}

impl From<Properties> for Identify {
	fn from(props: Properties) -> Self {
		Identify::Properties(props)
	}
}

/// Returns true if the visitor store carries an `id`, `email` or `cookie`.
pub fn has_identity(visitor: &Properties) -> bool {
	visitor.has_value(ID) || visitor.has_value(EMAIL) || visitor.has_value(COOKIE)
}

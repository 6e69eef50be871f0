// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Shared HTTP client with consistent User-Agent header.

use reqwest::{Client, ClientBuilder};

const SDK_NAME: &str = "woopra-rust";
const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Creates a new HTTP client builder with the standard SDK User-Agent header.
///
/// Use this when you need to customize the client (e.g., set timeout).
///
/// # Example
/// ```ignore
/// let client = woopra_common_http::builder()
///     .timeout(Duration::from_secs(30))
///     .build()?;
/// ```
pub fn builder() -> ClientBuilder {
	Client::builder().user_agent(user_agent())
}

/// Creates a new HTTP client builder with a custom User-Agent header.
///
/// Useful when requests are forwarded on behalf of a browser and the
/// original User-Agent should be preserved.
pub fn builder_with_user_agent(user_agent: impl Into<String>) -> ClientBuilder {
	Client::builder().user_agent(user_agent.into())
}

/// Returns the standard SDK User-Agent string.
///
/// Format: `woopra-rust/{version} ({os}-{arch})`
pub fn user_agent() -> String {
	format!(
		"{SDK_NAME}/{SDK_VERSION} ({}-{})",
		std::env::consts::OS,
		std::env::consts::ARCH
	)
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::time::Duration;

	#[test]
	fn user_agent_has_correct_format() {
		let ua = user_agent();
		assert!(ua.starts_with("woopra-rust/"));
		assert!(ua.contains(SDK_VERSION));
		assert!(ua.ends_with(')'));
	}

	#[test]
	fn builder_with_custom_user_agent() {
		let client = builder_with_user_agent("my-custom-agent/1.0").build();
		assert!(client.is_ok());
	}

	#[test]
	fn builder_accepts_timeout() {
		let client = builder().timeout(Duration::from_secs(5)).build();
		assert!(client.is_ok());
	}
}

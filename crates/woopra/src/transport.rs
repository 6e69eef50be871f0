// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Outbound HTTP transport.

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::error::Result;

/// Outcome of a completed tracking request.
///
/// Any HTTP status counts as completion; only failures to exchange a
/// request at all are errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackResponse {
	/// HTTP status code returned by the tracking service.
	pub status: u16,
	/// The URL that was requested.
	pub url: String,
}

impl TrackResponse {
	/// Returns true for 2xx statuses.
	pub fn is_success(&self) -> bool {
		(200..300).contains(&self.status)
	}
}

/// Sends a fully-built tracking URL.
///
/// Implement this to route requests through a custom client or to capture
/// them in tests.
#[async_trait]
pub trait Transport: Send + Sync {
	/// Issues a GET for `url`.
	async fn get(&self, url: &str) -> Result<TrackResponse>;
}

/// [`Transport`] backed by `reqwest`.
#[derive(Debug, Clone)]
pub struct HttpTransport {
	client: Client,
}

impl HttpTransport {
	pub fn new(client: Client) -> Self {
		Self { client }
	}
}

#[async_trait]
impl Transport for HttpTransport {
	async fn get(&self, url: &str) -> Result<TrackResponse> {
		let response = self.client.get(url).send().await?;
		let status = response.status().as_u16();

		debug!(status, "Tracking request completed");

		Ok(TrackResponse {
			status,
			url: url.to_string(),
		})
	}
}

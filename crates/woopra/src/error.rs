// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Error types for the tracking SDK.

use thiserror::Error;

/// Tracking SDK errors.
///
/// `Configuration`, `Identity`, `Validation` and `NoRuntime` are returned
/// synchronously by `push`/`track` before anything is sent. `RequestFailed`
/// and `Aborted` are only ever delivered through a
/// [`RequestHandle`](crate::RequestHandle).
#[derive(Debug, Error)]
pub enum TrackerError {
	/// Project key (domain) is missing or unusable.
	#[error("configuration error: {0}")]
	Configuration(String),

	/// The visitor has no `cookie`, `id` or `email`.
	#[error("missing `cookie`, `id` or `email` property for visitor")]
	Identity,

	/// Call arguments failed validation.
	#[error("validation failed: {0}")]
	Validation(String),

	/// HTTP request failed before a response arrived.
	#[error("HTTP request failed: {0}")]
	RequestFailed(#[from] reqwest::Error),

	/// The request task was cancelled or panicked.
	#[error("request was aborted")]
	Aborted,

	/// Dispatch happened outside a tokio runtime.
	#[error("no tokio runtime available to send the request")]
	NoRuntime,
}

impl TrackerError {
	/// Returns true for failures that happened after the request was sent.
	pub fn is_transport(&self) -> bool {
		matches!(self, TrackerError::RequestFailed(_) | TrackerError::Aborted)
	}
}

/// Result type alias for tracking operations.
pub type Result<T> = std::result::Result<T, TrackerError>;

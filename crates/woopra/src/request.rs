// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Handle to an in-flight tracking request.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tracing::warn;

use crate::error::{Result, TrackerError};
use crate::transport::{TrackResponse, Transport};

/// A request that has already been sent.
///
/// Awaiting the handle yields exactly one of a [`TrackResponse`] or a
/// transport error. Dropping it does not cancel the request; the request
/// completes in the background and its outcome is discarded.
#[derive(Debug)]
pub struct RequestHandle {
	task: JoinHandle<Result<TrackResponse>>,
}

impl RequestHandle {
	/// Spawns the GET for `url` on the current tokio runtime.
	pub(crate) fn spawn(transport: Arc<dyn Transport>, url: String) -> Result<Self> {
		let runtime = Handle::try_current().map_err(|_| TrackerError::NoRuntime)?;

		let task = runtime.spawn(async move {
			let result = transport.get(&url).await;
			if let Err(e) = &result {
				warn!(error = %e, "Tracking request failed");
			}
			result
		});

		Ok(Self { task })
	}

	/// Cancels the request if it has not completed yet.
	///
	/// Awaiting an aborted handle yields [`TrackerError::Aborted`].
	pub fn abort(&self) {
		self.task.abort();
	}

	/// Returns true once the request has completed, failed or been aborted.
	pub fn is_finished(&self) -> bool {
		self.task.is_finished()
	}
}

impl Future for RequestHandle {
	type Output = Result<TrackResponse>;

	fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
		match Pin::new(&mut self.task).poll(cx) {
			Poll::Ready(Ok(result)) => Poll::Ready(result),
			Poll::Ready(Err(_)) => Poll::Ready(Err(TrackerError::Aborted)),
			Poll::Pending => Poll::Pending,
		}
	}
}

// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Woopra tracking SDK for Rust.
//!
//! A [`Tracker`] accumulates client metadata and visitor properties, then
//! sends them to the tracking service as URL query parameters, either on
//! their own ([`Tracker::push`]) or together with a custom event
//! ([`Tracker::track`]).
//!
//! Precondition failures (no domain, no visitor identity, empty event name)
//! are returned immediately. Each sent request yields a [`RequestHandle`]
//! that resolves to exactly one of a [`TrackResponse`] or a transport error.
//!
//! # Example
//!
//! ```ignore
//! use woopra::{ClientData, Event, Identify, Tracker};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), woopra::TrackerError> {
//!     let mut tracker = Tracker::new("example.com")?;
//!
//!     tracker
//!         .set_client(ClientData::new().cookie("session-id").ip("203.0.113.7"))
//!         .identify(Identify::email("ada@example.com").property("plan", "pro"));
//!
//!     let response = tracker
//!         .track(Event::new("checkout").property("total", 42))?
//!         .await?;
//!     println!("tracked with status {}", response.status);
//!
//!     tracker.reset();
//!     Ok(())
//! }
//! ```

mod error;
mod request;
mod tracker;
mod transport;

pub use error::{Result, TrackerError};
pub use request::RequestHandle;
pub use tracker::{ClientConfig, Tracker, TrackerBuilder};
pub use transport::{HttpTransport, TrackResponse, Transport};

// Re-export core types for convenience
pub use woopra_core::identify::{EMAIL, ID};
pub use woopra_core::{
	build_params, ClientData, Config, ConfigOptions, Event, Identify, Properties, TrackOptions,
	EVENT_PREFIX, VISITOR_PREFIX,
};

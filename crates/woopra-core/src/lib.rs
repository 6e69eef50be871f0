// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Core types for the Woopra tracking SDK.
//!
//! This crate holds the data model shared by the tracker and its tooling:
//!
//! - [`Properties`]: insertion-ordered key/value mapping
//! - [`Config`], [`ClientData`]: mergeable configuration and client metadata
//! - [`Identify`], [`Event`]: arguments to identify and track calls
//! - [`build_params`]: flattens a mapping into a URL query fragment
//!
//! Nothing here performs I/O.

pub mod client;
pub mod config;
pub mod event;
pub mod identify;
pub mod params;
pub mod properties;

pub use client::ClientData;
pub use config::{Config, ConfigOptions};
pub use event::{Event, TrackOptions};
pub use identify::{has_identity, Identify};
pub use params::{build_params, join_fragments, EVENT_PREFIX, VISITOR_PREFIX};
pub use properties::Properties;

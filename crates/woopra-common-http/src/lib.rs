// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Shared HTTP utilities for the Woopra SDK.
//!
//! Every outbound request carries the same User-Agent so the tracking
//! service can attribute traffic to this SDK and its version.

mod client;

pub use client::{builder, builder_with_user_agent, user_agent};

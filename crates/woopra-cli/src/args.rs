// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Command-line arguments.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use clap::{Args as ClapArgs, Parser, Subcommand};
use serde_json::Value;

/// Send identify and track requests to Woopra
#[derive(Parser, Debug)]
#[command(name = "woopra", version)]
pub struct Args {
	/// Config file (default: $XDG_CONFIG_HOME/woopra/config.toml)
	#[arg(long, env = "WOOPRA_CONFIG")]
	pub config: Option<PathBuf>,

	/// Project key, generally the website domain
	#[arg(long, env = "WOOPRA_DOMAIN")]
	pub domain: Option<String>,

	/// Send over plain http
	#[arg(long, env = "WOOPRA_INSECURE")]
	pub no_ssl: bool,

	/// Tracking service base URL override
	#[arg(long, env = "WOOPRA_BASE_URL")]
	pub base_url: Option<String>,

	/// HTTP timeout in seconds
	#[arg(long)]
	pub timeout_secs: Option<u64>,

	/// Client field as key=value (repeatable)
	#[arg(long = "client", value_parser = parse_key_value)]
	pub client: Vec<(String, Value)>,

	/// Print the request URL instead of sending it
	#[arg(long)]
	pub dry_run: bool,

	#[command(subcommand)]
	pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
	/// Send visitor data without an event
	Push {
		#[command(flatten)]
		visitor: VisitorArgs,
	},
	/// Track a custom event
	Track {
		/// Event name
		name: String,

		/// Event property as key=value (repeatable)
		#[arg(long = "prop", id = "event_properties", value_parser = parse_key_value)]
		event_properties: Vec<(String, Value)>,

		/// Event time (RFC 3339)
		#[arg(long)]
		timestamp: Option<DateTime<Utc>>,

		#[command(flatten)]
		visitor: VisitorArgs,
	},
}

#[derive(ClapArgs, Debug, Clone, Default)]
pub struct VisitorArgs {
	/// Visitor email
	#[arg(long)]
	pub email: Option<String>,

	/// Visitor id
	#[arg(long)]
	pub id: Option<String>,

	/// Session cookie identifying an anonymous visitor
	#[arg(long)]
	pub cookie: Option<String>,

	/// Visitor property as key=value (repeatable)
	#[arg(long = "visitor", id = "visitor_properties", value_parser = parse_key_value)]
	pub properties: Vec<(String, Value)>,
}

/// Parses `key=value`, typing integers, floats and booleans.
pub fn parse_key_value(s: &str) -> Result<(String, Value), String> {
	let (key, raw) = s
		.split_once('=')
		.ok_or_else(|| format!("expected key=value, got `{s}`"))?;
	if key.is_empty() {
		return Err(format!("empty key in `{s}`"));
	}
	Ok((key.to_string(), typed_value(raw)))
}

fn typed_value(raw: &str) -> Value {
	if let Ok(i) = raw.parse::<i64>() {
		return Value::from(i);
	}
	if let Ok(f) = raw.parse::<f64>() {
		if f.is_finite() {
			return Value::from(f);
		}
	}
	match raw {
		"true" => Value::Bool(true),
		"false" => Value::Bool(false),
		_ => Value::String(raw.to_string()),
	}
}

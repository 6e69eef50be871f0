// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Layered CLI configuration: TOML file, then environment and flags.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use woopra::{ClientData, Properties};

use crate::args::Args;

/// `config.toml` format.
///
/// ```toml
/// domain = "example.com"
/// ssl = true
/// timeout_secs = 10
///
/// [client]
/// ip = "203.0.113.7"
/// language = "en-US"
/// ```
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
	pub domain: Option<String>,
	pub ssl: Option<bool>,
	pub base_url: Option<String>,
	pub timeout_secs: Option<u64>,
	#[serde(default)]
	pub client: BTreeMap<String, toml::Value>,
}

impl FileConfig {
	/// Loads `path`, returning defaults when the file does not exist.
	pub fn load(path: &Path) -> Result<Self> {
		if !path.exists() {
			tracing::debug!(path = %path.display(), "no config file");
			return Ok(Self::default());
		}

		let content = std::fs::read_to_string(path)
			.with_context(|| format!("failed to read {}", path.display()))?;
		toml::from_str(&content).with_context(|| format!("failed to parse {}", path.display()))
	}
}

/// Default config file location.
pub fn default_config_path() -> Option<PathBuf> {
	std::env::var_os("XDG_CONFIG_HOME")
		.map(PathBuf::from)
		.or_else(|| dirs::home_dir().map(|home| home.join(".config")))
		.map(|dir| dir.join("woopra").join("config.toml"))
}

/// Fully resolved settings for one invocation.
#[derive(Debug, Clone)]
pub struct Settings {
	pub domain: String,
	pub ssl: bool,
	pub base_url: Option<String>,
	pub timeout: Duration,
	pub client: ClientData,
}

impl Settings {
	/// Merges file values with flags; flags win.
	pub fn resolve(args: &Args, file: FileConfig) -> Result<Self> {
		let Some(domain) = args.domain.clone().or(file.domain) else {
			bail!("no domain configured; pass --domain, set WOOPRA_DOMAIN or add `domain` to the config file");
		};

		let ssl = if args.no_ssl {
			false
		} else {
			file.ssl.unwrap_or(true)
		};

		let mut client: Properties = file
			.client
			.into_iter()
			.map(|(k, v)| (k, toml_to_json(v)))
			.collect();
		client.extend(args.client.iter().cloned().collect());

		Ok(Self {
			domain,
			ssl,
			base_url: args.base_url.clone().or(file.base_url),
			timeout: Duration::from_secs(args.timeout_secs.or(file.timeout_secs).unwrap_or(30)),
			client: client.into(),
		})
	}
}

fn toml_to_json(value: toml::Value) -> serde_json::Value {
	match value {
		toml::Value::String(s) => serde_json::Value::String(s),
		toml::Value::Integer(i) => serde_json::Value::from(i),
		toml::Value::Float(f) => serde_json::Value::from(f),
		toml::Value::Boolean(b) => serde_json::Value::Bool(b),
		other => serde_json::Value::String(other.to_string()),
	}
}

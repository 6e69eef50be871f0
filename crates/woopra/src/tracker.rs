// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! The tracker: visitor, client and configuration stores plus request dispatch.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info};
use woopra_core::{
	build_params, has_identity, join_fragments, ClientData, Config, Event, Identify, Properties,
	VISITOR_PREFIX,
};

use crate::error::{Result, TrackerError};
use crate::request::RequestHandle;
use crate::transport::{HttpTransport, Transport};

/// SDK version for identification.
const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");
/// SDK name for identification.
const SDK_NAME: &str = "woopra-rust";

/// Host of the tracking service.
const API_HOST: &str = "www.woopra.com";
/// Endpoint for identity-only requests.
const IDENTIFY_ENDPOINT: &str = "identify";
/// Endpoint for custom events.
const EVENT_ENDPOINT: &str = "ce";

/// HTTP settings for the default transport.
#[derive(Debug, Clone)]
pub struct ClientConfig {
	/// Timeout for HTTP requests.
	pub request_timeout: Duration,
	/// User-Agent override. Defaults to the SDK User-Agent.
	pub user_agent: Option<String>,
}

impl Default for ClientConfig {
	fn default() -> Self {
		Self {
			request_timeout: Duration::from_secs(30),
			user_agent: None,
		}
	}
}

/// Builder for constructing a [`Tracker`].
pub struct TrackerBuilder {
	domain: Option<String>,
	ssl: Option<bool>,
	base_url: Option<String>,
	client: ClientData,
	config: ClientConfig,
	transport: Option<Arc<dyn Transport>>,
}

impl TrackerBuilder {
	/// Creates a new builder with default settings.
	pub fn new() -> Self {
		Self {
			domain: None,
			ssl: None,
			base_url: None,
			client: ClientData::new(),
			config: ClientConfig::default(),
			transport: None,
		}
	}

	/// Sets the project key, generally the website domain.
	pub fn domain(mut self, domain: impl Into<String>) -> Self {
		self.domain = Some(domain.into());
		self
	}

	/// Enables or disables `https` (default: enabled).
	pub fn ssl(mut self, ssl: bool) -> Self {
		self.ssl = Some(ssl);
		self
	}

	/// Sends requests to `base_url` instead of the public tracking host.
	///
	/// Example: `http://localhost:8080`. The scheme of `base_url` wins over
	/// the `ssl` option.
	pub fn base_url(mut self, url: impl Into<String>) -> Self {
		self.base_url = Some(url.into());
		self
	}

	/// Sets the initial client data, merged over the defaults.
	///
	/// This is not a new baseline: [`Tracker::reset`] drops it along with
	/// any later client updates.
	pub fn client(mut self, client: ClientData) -> Self {
		self.client = client;
		self
	}

	/// Sets the HTTP request timeout.
	pub fn request_timeout(mut self, timeout: Duration) -> Self {
		self.config.request_timeout = timeout;
		self
	}

	/// Overrides the User-Agent sent by the default transport.
	pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
		self.config.user_agent = Some(user_agent.into());
		self
	}

	/// Uses a custom transport instead of the built-in HTTP client.
	pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
		self.transport = Some(transport);
		self
	}

	/// Builds the Tracker.
	pub fn build(self) -> Result<Tracker> {
		let domain = self
			.domain
			.filter(|d| !d.trim().is_empty())
			.ok_or_else(|| TrackerError::Configuration("`domain` needs to be configured".to_string()))?;

		let base_url = self
			.base_url
			.map(|url| url.trim_end_matches('/').to_string());

		let transport = match self.transport {
			Some(transport) => transport,
			None => {
				let builder = match &self.config.user_agent {
					Some(ua) => woopra_common_http::builder_with_user_agent(ua.clone()),
					None => woopra_common_http::builder(),
				};
				let http_client = builder
					.timeout(self.config.request_timeout)
					.build()
					.map_err(|e| TrackerError::Configuration(format!("failed to build HTTP client: {e}")))?;
				Arc::new(HttpTransport::new(http_client))
			}
		};

		let mut config = Config::for_domain(domain.clone());
		if let Some(ssl) = self.ssl {
			config.merge(Properties::new().insert(woopra_core::config::SSL, ssl));
		}

		let mut client = ClientData::defaults();
		client.merge(self.client.into());

		info!(domain = %domain, sdk_name = SDK_NAME, sdk_version = SDK_VERSION, "Tracker initialized");

		Ok(Tracker {
			config,
			client,
			visitor: Properties::new(),
			base_url,
			transport,
		})
	}
}

impl Default for TrackerBuilder {
	fn default() -> Self {
		Self::new()
	}
}

/// Accumulates visitor, client and configuration data and sends it to the
/// tracking service.
///
/// Mutating calls take `&mut self` and return the tracker for chaining.
/// Read accessors return snapshots.
///
/// # Example
///
/// ```ignore
/// use woopra::{Event, Identify, Tracker};
///
/// let mut tracker = Tracker::new("example.com")?;
///
/// tracker
///     .identify(Identify::email("ada@example.com").property("plan", "pro"))
///     .push()?
///     .await?;
///
/// let response = tracker
///     .track(Event::new("checkout").property("total", 42))?
///     .await?;
/// ```
pub struct Tracker {
	config: Config,
	client: ClientData,
	visitor: Properties,
	base_url: Option<String>,
	transport: Arc<dyn Transport>,
}

impl Tracker {
	/// Creates a tracker for `domain` with the default HTTP transport.
	pub fn new(domain: impl Into<String>) -> Result<Self> {
		Self::builder().domain(domain).build()
	}

	/// Creates a new builder for constructing a Tracker.
	pub fn builder() -> TrackerBuilder {
		TrackerBuilder::new()
	}

	/// Returns a snapshot of the configuration.
	pub fn config(&self) -> Config {
		self.config.clone()
	}

	/// Shallow-merges configuration options.
	///
	/// No validation happens here; a missing domain surfaces on the next
	/// `push` or `track`.
	pub fn configure(&mut self, options: impl Into<Properties>) -> &mut Self {
		self.config.merge(options.into());
		self
	}

	/// Returns the client data overlaid with `website` and `app`.
	pub fn client(&self) -> ClientData {
		self.client.with_derived(self.config.domain())
	}

	/// Shallow-merges client data.
	pub fn set_client(&mut self, properties: impl Into<Properties>) -> &mut Self {
		self.client.merge(properties.into());
		self
	}

	/// Merges visitor identity and properties. Sends nothing.
	pub fn identify(&mut self, identify: impl Into<Identify>) -> &mut Self {
		identify.into().apply_to(&mut self.visitor);
		self
	}

	/// Returns a snapshot of the visitor properties.
	pub fn visitor(&self) -> Properties {
		self.visitor.clone()
	}

	/// Sends the client and visitor data without an event.
	///
	/// Fails immediately when no domain or visitor identity is set.
	pub fn push(&self) -> Result<RequestHandle> {
		let url = self.identify_url()?;
		self.dispatch(IDENTIFY_ENDPOINT, url)
	}

	/// Tracks an event along with the client and visitor data.
	///
	/// Fails immediately when the event name is empty, or when no domain or
	/// visitor identity is set.
	pub fn track(&self, event: impl Into<Event>) -> Result<RequestHandle> {
		let event = event.into();
		let url = self.track_url(&event)?;
		self.dispatch(EVENT_ENDPOINT, url)
	}

	/// Clears client data and visitor properties. Configuration is kept.
	///
	/// Client data returns to `{ip: 0.0.0.0}`, including fields given to
	/// [`TrackerBuilder::client`].
	pub fn reset(&mut self) {
		self.client = ClientData::defaults();
		self.visitor = Properties::new();
		debug!("Tracker state reset");
	}

	/// Builds the URL `push` would request.
	pub fn identify_url(&self) -> Result<String> {
		self.request_url(IDENTIFY_ENDPOINT, None)
	}

	/// Builds the URL `track` would request for `event`.
	pub fn track_url(&self, event: &Event) -> Result<String> {
		if event.name().is_empty() {
			return Err(TrackerError::Validation(
				"track() requires a non-empty event name".to_string(),
			));
		}
		self.request_url(EVENT_ENDPOINT, Some(event))
	}

	fn request_url(&self, endpoint: &str, event: Option<&Event>) -> Result<String> {
		let domain = self
			.config
			.domain()
			.filter(|d| !d.trim().is_empty())
			.ok_or_else(|| TrackerError::Configuration("`domain` needs to be configured".to_string()))?;

		if !has_identity(&self.visitor) && !self.client.has_cookie() {
			return Err(TrackerError::Identity);
		}

		let client = self.client.with_derived(Some(domain));
		let query = join_fragments([
			build_params(Some(client.properties()), None),
			build_params(Some(&self.visitor), Some(VISITOR_PREFIX)),
			event.map(Event::to_query),
		]);

		let base = match &self.base_url {
			Some(url) => url.clone(),
			None => format!("{}://{API_HOST}", self.config.scheme()),
		};

		Ok(format!("{base}/track/{endpoint}?{query}"))
	}

	fn dispatch(&self, endpoint: &str, url: String) -> Result<RequestHandle> {
		debug!(
			endpoint,
			domain = self.config.domain().unwrap_or_default(),
			"Sending tracking request"
		);
		RequestHandle::spawn(Arc::clone(&self.transport), url)
	}
}

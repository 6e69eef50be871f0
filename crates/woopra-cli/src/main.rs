// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

mod args;
mod config;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;
use woopra::{ClientData, Event, Identify, Properties, Tracker};

use args::{Args, Command, VisitorArgs};
use config::{default_config_path, FileConfig, Settings};

#[tokio::main]
async fn main() -> Result<()> {
	tracing_subscriber::fmt()
		.with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
		.with_writer(std::io::stderr)
		.init();

	let args = Args::parse();

	let file = match args.config.clone().or_else(default_config_path) {
		Some(path) => FileConfig::load(&path)?,
		None => FileConfig::default(),
	};
	let settings = Settings::resolve(&args, file)?;

	let mut builder = Tracker::builder()
		.domain(settings.domain.clone())
		.ssl(settings.ssl)
		.request_timeout(settings.timeout)
		.client(settings.client.clone());
	if let Some(url) = &settings.base_url {
		builder = builder.base_url(url.clone());
	}
	let mut tracker = builder.build().context("failed to create tracker")?;

	let (visitor, event) = match args.command {
		Command::Push { visitor } => (visitor, None),
		Command::Track {
			name,
			event_properties,
			timestamp,
			visitor,
		} => {
			let mut event = Event::new(name).properties(event_properties.into_iter().collect());
			if let Some(ts) = timestamp {
				event = event.timestamp(ts);
			}
			(visitor, Some(event))
		}
	};
	apply_visitor(&mut tracker, visitor);

	if args.dry_run {
		let url = match &event {
			Some(event) => tracker.track_url(event)?,
			None => tracker.identify_url()?,
		};
		println!("{url}");
		return Ok(());
	}

	let handle = match event {
		Some(event) => tracker.track(event)?,
		None => tracker.push()?,
	};
	let response = handle.await.context("tracking request failed")?;

	info!(status = response.status, "Request completed");
	if !response.is_success() {
		anyhow::bail!("tracking service answered with status {}", response.status);
	}
	Ok(())
}

fn apply_visitor(tracker: &mut Tracker, visitor: VisitorArgs) {
	let properties: Properties = visitor.properties.into_iter().collect();

	let identify = match (visitor.email, visitor.id) {
		(Some(email), id) => {
			let identify = Identify::email(email).with_properties(properties);
			match id {
				Some(id) => identify.property(woopra::ID, id),
				None => identify,
			}
		}
		(None, Some(id)) => Identify::id(id).with_properties(properties),
		(None, None) => Identify::Properties(properties),
	};
	tracker.identify(identify);

	if let Some(cookie) = visitor.cookie {
		tracker.set_client(ClientData::new().cookie(cookie));
	}
}

// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use knus::Decode;
use miette::{IntoDiagnostic, Result};
use tokio::fs::read_to_string;

pub async fn parse_config(config_path: &str) -> Result<ConfigData> {
	let config_file_contents = read_to_string(config_path).await.into_diagnostic()?;
	let config = knus::parse(config_path, &config_file_contents)?;
	Ok(config)
}

#[derive(Debug, Decode)]
pub struct ConfigData {
	#[knus(child)]
	pub web: WebConfig,
	#[knus(child)]
	pub backend: BackendConfig,
}

#[derive(Debug, Decode)]
pub struct WebConfig {
	/// The address the web server listens on.
	#[knus(child, unwrap(argument))]
	pub bind_addr: String,
}

#[derive(Debug, Decode)]
pub struct BackendConfig {
	/// Base URL of the remote ticket backend; the API paths are appended to this.
	#[knus(child, unwrap(argument))]
	pub base_url: String,
}

// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() -> miette::Result<()> {
	use std::sync::Arc;
	use support_desk::config::parse_config;
	use support_desk::web::server::run_server;

	tracing_subscriber::fmt().init();

	let config = parse_config("config.kdl").await?;
	let config = Arc::new(config);

	run_server(config).await
}

#[cfg(not(feature = "ssr"))]
fn main() {
	// The server binary requires the ssr feature; the hydrate build enters through lib.rs.
}

//! GuestVoice server entry point.

use guestvoice_core::app::VERSION;
use guestvoice_core::config::AppConfig;
use guestvoice_types::prelude::*;

mod bootstrap;
mod routes;

#[tokio::main]
async fn main() -> GvResult<()> {
	tracing_subscriber::fmt()
		.with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
		.with_target(false)
		.init();

	info!("GuestVoice v{}", VERSION);

	let config = AppConfig::from_env();
	let app = bootstrap::init(config).await?;

	let router = routes::init(app.clone());
	let listener = tokio::net::TcpListener::bind(app.config.listen.as_str()).await?;
	info!("Listening on {}", app.config.listen);

	axum::serve(listener, router).await?;
	Ok(())
}

// vim: ts=4

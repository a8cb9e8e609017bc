use std::error::Error;

use ai_llm_service::telemetry;
use tracing::{Level, debug};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // A missing .env is fine; variables may come from the process environment.
    let dotenv = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(telemetry::env_filter_with_level("info", Level::DEBUG))
        .with(telemetry::layer())
        .init();

    if let Err(err) = dotenv {
        debug!(error = %err, "no .env loaded");
    }

    api::start().await?;

    Ok(())
}

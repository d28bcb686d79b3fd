//! drone-plain - Serve CI secrets from a plain JSON file.

use std::sync::Arc;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use drone_plain::core::constants::LOG_ENV;
use drone_plain::server::{self, AppState};
use drone_plain::{Config, SecretStore};

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    let config = Config::parse();

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        if config.debug {
            EnvFilter::new("drone_plain=debug,tower_http=debug")
        } else {
            EnvFilter::new("drone_plain=info")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .init();

    if let Err(e) = run(config).await {
        error!("{}", e);
        std::process::exit(1);
    }
}

async fn run(config: Config) -> drone_plain::Result<()> {
    let addr = config.validate()?;

    let store = SecretStore::open(&config.source)?;
    info!(
        source = %config.source.display(),
        records = store.len(),
        "secret store loaded"
    );

    let state = AppState::new(Arc::new(store), config.secret);
    server::serve(addr, state).await
}

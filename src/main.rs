use std::{error::Error, process, sync::Arc};

use booost::{
    api::{self, AppState},
    config::{CliArgs, Command, Config, LoggingConfig},
    report, responses,
    storage::open_store,
    Backend,
};
use clap::Parser;
use metrics_exporter_prometheus::PrometheusBuilder;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = CliArgs::parse();
    let config = Config::load(&cli);
    init_tracing(&config.logging);

    if let Err(err) = run(cli.command.unwrap_or(Command::Serve), config) {
        tracing::error!(error = %err, "Exiting");
        eprintln!("Error: {}", err);
        process::exit(1);
    }
}

fn init_tracing(logging: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&logging.level));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    if logging.json {
        builder.json().init();
    } else {
        builder.init();
    }
}

// The store is opened outside any async runtime: the PostgreSQL client drives
// its own.
fn run(command: Command, config: Config) -> Result<(), Box<dyn Error>> {
    let store = open_store(&config.storage)?;
    let backend = Backend::new(store);

    match command {
        Command::Init => {
            tracing::info!("Setting up Booost sheets");
            let seeded = backend.bootstrap.initialize_sheets()?;
            tracing::info!(seeded = ?seeded, "Setup complete");
        }
        Command::Dashboard => {
            let dashboard = responses::dashboard_response(
                backend.aggregator.get_dashboard_data(),
                &config.dashboard,
            );
            print!("{}", report::render_dashboard(&dashboard));
        }
        Command::Serve => {
            let metrics = PrometheusBuilder::new().install_recorder()?;
            let addr = config.listen_addr()?;
            let state = Arc::new(AppState {
                backend,
                dashboard: config.dashboard.clone(),
                metrics: Some(metrics),
            });

            // `state` outlives the runtime so the store is dropped outside it.
            let app = api::router(state.clone());
            let runtime = tokio::runtime::Runtime::new()?;
            runtime.block_on(async move {
                tracing::info!(%addr, "API listening");
                axum::Server::bind(&addr)
                    .serve(app.into_make_service())
                    .with_graceful_shutdown(shutdown_signal())
                    .await
            })?;
        }
    }

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
    }
    tracing::info!("Shutting down");
}

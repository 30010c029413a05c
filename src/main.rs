use anyhow::Context;
use clap::Parser;
use jokester::config::LogFormat;
use jokester::core::ConfigProvider;
use jokester::utils::{logger, validation::Validate};
use jokester::{
    router, serve, shutdown_signal, CliConfig, HttpJokeProvider, HttpNameProvider, JokeService,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    match config.log_format {
        LogFormat::Compact => logger::init_cli_logger(config.verbose),
        LogFormat::Json => logger::init_json_logger(),
    }

    tracing::info!("Starting jokester v{}", env!("CARGO_PKG_VERSION"));

    let config = match config.resolve() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };
    tracing::debug!("Config: {:?}", config);

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        std::process::exit(1);
    }

    let names = HttpNameProvider::new(config.name_service_url(), config.request_timeout())?;
    let jokes = HttpJokeProvider::new(config.joke_service_url(), config.request_timeout())?;
    let app = router(JokeService::new(names, jokes));

    let listener = tokio::net::TcpListener::bind(config.server_addr())
        .await
        .with_context(|| format!("failed to bind {}", config.server_addr()))?;

    tracing::info!("Listening on http://{}", listener.local_addr()?);
    tracing::info!("Name service: {}", config.name_service_url());
    tracing::info!("Joke service: {}", config.joke_service_url());

    serve(listener, app, shutdown_signal()).await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

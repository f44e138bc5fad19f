//! EcoLogic terminal client entry point.

use clap::Parser;
use ecologic::app::App;
use ecologic::cli::Config;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(std::io::stderr)
        .init();

    let config = Config::parse();

    let (app, events) = match App::new(&config) {
        Ok(built) => built,
        Err(err) => {
            eprintln!("failed to start: {err}");
            std::process::exit(1);
        }
    };

    if let Err(err) = app.run(events).await {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

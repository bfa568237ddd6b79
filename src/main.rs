//! Entry point: parse CLI and dispatch to command handlers.

use clap::Parser;
use sporty::{
    cli::{Commands, Sporty},
    commands::{dispatch, handle_config},
    config::{default_config_path, Config, Defaults},
    football::ApiClient,
    logging::init_logger,
    Result, SportyError,
};
use tracing::debug;

/// Run the CLI.
#[tokio::main(flavor = "current_thread")]
async fn main() {
    let app = Sporty::parse();
    init_logger(app.debug);

    // Dropping the pending future on Ctrl-C aborts the request.
    let outcome = tokio::select! {
        result = run(app) => result,
        _ = tokio::signal::ctrl_c() => Err(SportyError::Interrupted),
    };

    match outcome {
        Ok(text) => println!("{}", text),
        Err(err) => {
            eprintln!("Error: {}", err);
            std::process::exit(err.exit_code());
        }
    }
}

async fn run(app: Sporty) -> Result<String> {
    let path = default_config_path();
    let config = Config::load_with_env(&path);
    debug!("config file: {}", path.display());

    if let Commands::Config { cmd } = app.command {
        return handle_config(cmd, &config, &path);
    }

    let defaults = Defaults::from_config(&config, chrono::Local::now().date_naive());
    let api = ApiClient::from_config(&config)?;
    dispatch(&api, &defaults, app.command).await
}

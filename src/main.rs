//! c2c - terminal client for the Care2Connect foster-care case system

use clap::Parser;

mod auth;
mod cli;
mod client;
mod config;
mod dashboard;
mod error;
mod models;
mod notifications;
mod output;
mod routes;
mod session;

use cli::args::GlobalOptions;
use cli::{Cli, Commands};
use error::Result;

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.debug);

    let opts = GlobalOptions::from_cli(&cli);

    match cli.command {
        Commands::Login {
            username,
            password_stdin,
        } => cli::login::run(&opts, username, password_stdin).await,
        Commands::Logout => cli::logout::run(&opts),
        Commands::Status => cli::status::run(&opts),
        Commands::Dashboard { once } => cli::dashboard::run(&opts, once).await,
        Commands::Cases { filter } => cli::cases::list(&opts, filter.as_deref()).await,
        Commands::Notifications => cli::notifications::run(&opts).await,
        Commands::Version => {
            println!("c2c version {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}

/// `RUST_LOG` wins; `--debug` raises the default to debug
fn init_logging(debug: bool) {
    let default = if debug { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default))
        .format_timestamp(None)
        .init();
}

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use azscope::cli::{self, Cli, Commands};
use azscope::errors::AzscopeError;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.quiet {
        "warn"
    } else {
        match cli.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(!cli.no_color)
        .init();

    if cli.no_color {
        console::set_colors_enabled(false);
    }

    let config_path = cli.config.as_ref().map(PathBuf::from);
    let config_path = config_path.as_deref();

    let result = match cli.command {
        Commands::Subscriptions(args) => {
            cli::subscriptions::handle_subscriptions(args, config_path).await
        }
        Commands::Analyze(args) => cli::analyze::handle_analyze(args, config_path, cli.quiet).await,
        Commands::Check => cli::check::handle_check(config_path).await,
        Commands::Interactive => cli::interactive::handle_interactive(config_path).await,
    };

    match result {
        Ok(()) => {}
        Err(e) => {
            eprintln!("Error: {}", e);
            let exit_code = match &e {
                AzscopeError::Config(_) => 2,
                AzscopeError::Authentication(_) => 3,
                AzscopeError::Api(_) => 4,
                AzscopeError::UnknownSubscription(_) => 5,
                _ => 1,
            };
            std::process::exit(exit_code);
        }
    }
}

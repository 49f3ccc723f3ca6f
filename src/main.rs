//! access-policy - inspect the console access policy from the command line

use clap::Parser;
use std::process::ExitCode;
use tracker_access::cli::Cli;
use tracker_access::config::Config;
use tracker_access::utils::logging::init_logging;

#[tokio::main]
async fn main() -> ExitCode {
    // A missing .env file is fine
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let config = match Config::load(cli.config.as_deref()).await {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = init_logging(config.logging()) {
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }

    let mut stdout = std::io::stdout().lock();
    match cli.command.execute(&config, &mut stdout) {
        Ok(outcome) => ExitCode::from(outcome.exit_status()),
        Err(e) => {
            // Print error using Display (not Debug) to preserve newlines
            eprintln!("Error: {}", e);
            if e.is_input_error() {
                ExitCode::from(2)
            } else {
                ExitCode::FAILURE
            }
        }
    }
}

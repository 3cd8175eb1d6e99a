//! Main entry point for the application.
//!
//! This module initializes logging, loads environment variables and configuration,
//! and either runs the requested agents on a profile or starts the HTTP API.

mod api;
mod cli;
mod config;
mod constants;
mod crew;
mod engine;
mod errors;
mod llm;
mod profile;
mod service;
mod tools;
mod utils;

use clap::Parser;
use colored::*;
use config::AppConfig;
use crew::AgentType;
use indicatif::{ProgressBar, ProgressStyle};
use service::FreelanceCrew;
use std::path::Path;
use std::time::Duration;
use tracing::{error, info, warn};

/// Main entry point that initializes and runs the application.
///
/// # Initialization steps:
/// 1. Parse CLI arguments
/// 2. Initialize logging system
/// 3. Load environment variables and configuration
/// 4. Build the crew
/// 5. Serve the API, or run the agents and print their results
#[tokio::main]
async fn main() {
    let cli = cli::Cli::parse();
    utils::init_logging(&cli.logging_level, cli.log_file);

    if let Err(e) = dotenvy::dotenv() {
        warn!("Failed to load .env file: {}", e);
    }

    let config = match cli.config.as_deref() {
        Some(path) => match config::load_app_config(path) {
            Ok(config) => config,
            Err(e) => {
                error!("Failed to load configuration {}: {}", path, e);
                std::process::exit(1);
            }
        },
        None => AppConfig::default(),
    }
    .with_env_overrides();

    let crew = match FreelanceCrew::new(&config) {
        Ok(crew) => crew,
        Err(e) => {
            error!("Failed to initialize the crew: {}", e);
            std::process::exit(1);
        }
    };

    if cli.serve {
        let port = cli.api_port.unwrap_or(config.api_port);
        info!("Starting API server on port {}", port);
        if let Err(e) = api::server::launch_server(port, crew).await {
            error!("Failed to start server: {}", e);
            std::process::exit(1);
        }
        return;
    }

    let profile = match cli.build_profile() {
        Ok(profile) => profile,
        Err(e) => {
            error!("Failed to load profile: {}", e);
            std::process::exit(1);
        }
    };

    let message = match cli.agent {
        AgentType::All => "Analyse complète en cours... (peut prendre 2-3 minutes)",
        AgentType::Single(_) => "L'agent analyse votre profil...",
    };
    let spinner = spinner(message);
    let results = cli::dispatch(&crew, &profile, cli.agent).await;
    spinner.finish_and_clear();

    for result in &results {
        println!("\n{}\n", result.title.bold().cyan());
        println!("{}", result.text);

        if let Some(dir) = &cli.output_dir {
            let file_name = utils::output_file_name(result.file_prefix, &chrono::Local::now());
            let path = Path::new(dir).join(file_name);
            match std::fs::create_dir_all(dir).and_then(|_| std::fs::write(&path, &result.text)) {
                Ok(()) => println!("{} {}", "Résultats enregistrés:".green(), path.display()),
                Err(e) => error!("Failed to write {}: {}", path.display(), e),
            }
        }
    }
}

fn spinner(message: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner:.cyan} {msg}") {
        spinner.set_style(style);
    }
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(Duration::from_millis(120));
    spinner
}

//! CLI module for Profile Registry
//!
//! Provides subcommands:
//! - `serve`: run the HTTP API
//! - `list`: print the stored profiles as JSON

pub mod list;
pub mod serve;

use clap::{Args, Parser, Subcommand};

use crate::config::AppConfig;

/// Profile Registry - register and edit user profiles
#[derive(Parser)]
#[command(name = "profile-registry")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the HTTP API server
    Serve(serve::ServeArgs),

    /// Print all stored profiles as JSON
    List(list::ListArgs),
}

/// Storage overrides shared by every subcommand
#[derive(Args, Debug, Clone, Default)]
pub struct StorageArgs {
    /// JSON file holding the profiles (overrides `storage.path`)
    #[arg(long)]
    pub data_file: Option<String>,
}

impl StorageArgs {
    fn apply(&self, config: &mut AppConfig) {
        if let Some(path) = &self.data_file {
            config.storage.backend = "file".to_string();
            config.storage.path = path.clone();
        }
    }
}

/// Load `.env` and configuration files, falling back to defaults
pub(crate) fn load_config() -> AppConfig {
    dotenvy::dotenv().ok();

    match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration, using defaults: {}", e);
            AppConfig::default()
        }
    }
}

pub mod commands;
pub mod utils;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

use crate::config::AppConfig;

#[derive(Parser)]
#[command(name = "talker")]
#[command(about = "Talker CLI - maintenance commands for the talker API and its data file")]
#[command(version)]
pub struct Cli {
    #[arg(long, global = true, help = "Output in human-readable text format")]
    pub text: bool,

    #[arg(long, global = true, help = "Output in JSON format")]
    pub json: bool,

    #[arg(long, global = true, env = "TALKER_FILE", help = "Path of the talker JSON document")]
    pub file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Print a freshly minted login token")]
    Token {
        #[arg(long, help = "Token length (defaults to TOKEN_LENGTH or 16)")]
        length: Option<usize>,
    },

    #[command(about = "Print every stored talker")]
    List,

    #[command(about = "Report stored talkers the API would reject")]
    Check,

    #[command(about = "Run the HTTP API")]
    Serve {
        #[arg(long, help = "Port to listen on (defaults to PORT or 3001)")]
        port: Option<u16>,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub fn from_cli(cli: &Cli) -> Self {
        if cli.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

/// Run a parsed command line; the returned value is the process exit code
pub async fn run(cli: Cli) -> anyhow::Result<i32> {
    let output_format = OutputFormat::from_cli(&cli);

    let mut config = AppConfig::from_env();
    if let Some(file) = cli.file {
        config.storage.talker_file = file;
    }

    match cli.command {
        Commands::Token { length } => {
            let length = length.unwrap_or(config.auth.token_length);
            commands::token::handle(length, &output_format)
        }
        Commands::List => commands::list::handle(&config, &output_format).await,
        Commands::Check => commands::check::handle(&config, &output_format).await,
        Commands::Serve { port } => {
            if let Some(port) = port {
                config.server.port = port;
            }
            crate::serve(config).await?;
            Ok(0)
        }
    }
}

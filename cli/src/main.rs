mod client;
mod import;
mod seed;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "recetario")]
#[command(about = "Recetario CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Ping the server (unauthenticated)
    Ping {
        /// Server URL (default: http://localhost:3000)
        #[arg(long, default_value = "http://localhost:3000")]
        server: String,
    },
    /// Seed the catalog with sample recipes
    Seed {
        /// Server URL (default: http://localhost:3000)
        #[arg(long, default_value = "http://localhost:3000")]
        server: String,
        /// API token for mutating endpoints
        #[arg(long)]
        token: String,
    },
    /// Import a recipe from a JSON file and store it
    Import {
        /// Path to the recipe JSON file
        file: PathBuf,
        /// Server URL (default: http://localhost:3000)
        #[arg(long, default_value = "http://localhost:3000")]
        server: String,
        /// API token for mutating endpoints
        #[arg(long)]
        token: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Ping { server } => {
            ping(&server).await?;
        }
        Commands::Seed { server, token } => {
            seed::seed(&server, &token).await?;
        }
        Commands::Import {
            file,
            server,
            token,
        } => {
            import::import(&file, &server, &token).await?;
        }
    }

    Ok(())
}

#[derive(serde::Deserialize)]
struct PingResponse {
    message: String,
}

async fn ping(server: &str) -> Result<()> {
    let response = reqwest::get(format!("{}/api/test/unauthed-ping", server))
        .await
        .context("Failed to reach server")?;

    if !response.status().is_success() {
        anyhow::bail!("Ping failed with status {}", response.status());
    }

    let ping: PingResponse = response.json().await?;
    println!("{}", ping.message);

    Ok(())
}

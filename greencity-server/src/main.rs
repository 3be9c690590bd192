//! GreenCity gateway server binary

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

use greencity_server::{Server, ServerConfig};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Configuration file path (JSON or YAML)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Server bind address, overrides the config file
    #[arg(short, long)]
    bind: Option<String>,

    /// Print default configuration and exit
    #[arg(long)]
    print_config: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.print_config {
        let default_config = ServerConfig::default();
        println!("{}", serde_json::to_string_pretty(&default_config)?);
        return Ok(());
    }

    let mut config = match &cli.config {
        Some(path) => ServerConfig::from_file(path).await?,
        None => ServerConfig::default(),
    };

    if let Some(bind) = &cli.bind {
        config.server.bind_address = bind
            .parse()
            .with_context(|| format!("Invalid bind address '{}'", bind))?;
    }

    let server = Server::new(config)?;
    server.start().await
}

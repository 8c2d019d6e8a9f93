use anyhow::Result;
use clap::Parser;
use log::info;

use orchestra_client::cli::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    info!("Starting Orchestra API client");
    cli.execute().await?;

    Ok(())
}

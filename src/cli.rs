use anyhow::Result;
use clap::{Parser, Subcommand};
use log::info;
use std::path::PathBuf;
use std::sync::Arc;

use crate::auth::{CredentialProvider, EnvCredential, StaticCredential, Token};
use crate::client::OrchestraClient;
use crate::config::Config;
use crate::response::{ApiResponse, Pagination};

#[derive(Parser)]
#[command(name = "orchestra")]
#[command(author, version, about = "Orchestra API client", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(short, long, global = true, env = "ORCHESTRA_API_KEY")]
    token: Option<String>,

    #[arg(short, long, global = true)]
    url: Option<String>,

    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[arg(short, long, global = true)]
    output: Option<PathBuf>,

    #[arg(short, long, global = true, default_value_t = false)]
    pretty: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch one page of pipeline runs
    PipelineRuns {
        #[arg(long)]
        page: Option<u32>,

        #[arg(long)]
        per_page: Option<u32>,
    },

    /// Fetch one page of task runs
    TaskRuns {
        #[arg(long)]
        page: Option<u32>,

        #[arg(long)]
        per_page: Option<u32>,
    },

    /// Fetch operations
    Operations,
}

impl Cli {
    fn build_client(&self, config: &Config) -> Result<OrchestraClient> {
        let credentials: Arc<dyn CredentialProvider> = match self
            .token
            .as_deref()
            .or(config.token.as_deref())
        {
            Some(token) => Arc::new(StaticCredential::new(Token::from(token))),
            None => Arc::new(EnvCredential),
        };

        let base_url = self.url.as_deref().unwrap_or(&config.base_url);

        let client = OrchestraClient::with_base_url(base_url, credentials)?
            .with_secret_key(&config.secret_key);

        Ok(client)
    }

    fn pagination(config: &Config, page: Option<u32>, per_page: Option<u32>) -> Pagination {
        Pagination::new(
            page.unwrap_or(config.page),
            per_page.unwrap_or(config.per_page),
        )
    }

    fn emit(&self, response: ApiResponse) -> Result<()> {
        let value = response.into_value();

        let json_output = if self.pretty {
            serde_json::to_string_pretty(&value)?
        } else {
            serde_json::to_string(&value)?
        };

        if let Some(output_path) = &self.output {
            std::fs::write(output_path, json_output)?;
            info!("Response written to: {}", output_path.display());
        } else {
            println!("{}", json_output);
        }

        Ok(())
    }

    pub async fn execute(&self) -> Result<()> {
        let config = Config::load(self.config.as_deref())?;
        let client = self.build_client(&config)?;

        let response = match &self.command {
            Commands::PipelineRuns { page, per_page } => {
                info!("Fetching pipeline runs");
                client
                    .get_pipeline_runs(Self::pagination(&config, *page, *per_page))
                    .await
            }
            Commands::TaskRuns { page, per_page } => {
                info!("Fetching task runs");
                client
                    .get_task_runs(Self::pagination(&config, *page, *per_page))
                    .await
            }
            Commands::Operations => {
                info!("Fetching operations");
                client.get_operations().await
            }
        };

        self.emit(response)
    }
}

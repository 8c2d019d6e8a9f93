//! Client for the Orchestra pipeline-orchestration public REST API.
//!
//! [`OrchestraClient`] exposes three read-only operations (pipeline
//! runs, task runs, operations) as authenticated GET requests against
//! `https://app.getorchestra.io`. Operations never fail with `Err`;
//! every transport or API failure is normalized into the uniform
//! [`ApiResponse::Failure`] envelope.
//!
//! ```no_run
//! use std::sync::Arc;
//! use orchestra_client::{OrchestraClient, Pagination, StaticCredential, Token};
//!
//! # async fn run() -> orchestra_client::Result<()> {
//! let credentials = Arc::new(StaticCredential::new(Token::from("my-api-key")));
//! let client = OrchestraClient::new(credentials)?;
//!
//! let runs = client.get_pipeline_runs(Pagination::default()).await;
//! println!("{}", runs.into_value());
//! # Ok(())
//! # }
//! ```

pub mod auth;
pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod response;

pub use auth::{CredentialProvider, EnvCredential, StaticCredential, Token};
pub use client::{OrchestraClient, DEFAULT_BASE_URL, DEFAULT_SECRET_KEY};
pub use config::Config;
pub use error::{OrchestraError, Result};
pub use response::{ApiResponse, Pagination, Resource, API_ERROR_CODE};

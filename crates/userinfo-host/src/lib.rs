//! # userinfo-host
//!
//! Minimal host runtime: builds the tool registry, resolves the data layer
//! (PostgreSQL, or a JSON fixture served from memory) and invokes a tool on
//! behalf of an authenticated caller.

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use tracing::{info, instrument};

use userinfo_common::{AppConfig, AppError, ConfigError};
use userinfo_core::ConnectionProvider;
use userinfo_db::{create_pool, MemoryConnectionProvider, PgConnectionProvider};
use userinfo_service::{Caller, GetMyUserInformation, ServiceContext, ToolRegistry};

#[derive(Debug, Parser)]
#[command(name = "userinfo-host", version, about = "Discover and invoke user information tools")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Parse `args` after loading environment variables from `env_file`, or
    /// from `.env` in the working directory when `None`.
    ///
    /// Variables already set in the process environment take precedence.
    /// A missing env file is not an error.
    ///
    /// # Errors
    /// Returns the clap error for invalid arguments
    pub fn parse_with_env_file<I, T>(env_file: Option<&Path>, args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let _ = match env_file {
            Some(path) => dotenvy::from_path(path),
            None => dotenvy::dotenv().map(|_| ()),
        };
        Self::try_parse_from(args)
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the registered tools as JSON
    List,
    /// Invoke a tool on behalf of a caller
    Invoke(InvokeArgs),
}

#[derive(Debug, Args)]
pub struct InvokeArgs {
    /// Name of the tool to invoke
    #[arg(long, default_value = GetMyUserInformation::NAME)]
    pub tool: String,

    /// Email of the authenticated caller
    #[arg(long, env = "USERINFO_CALLER_EMAIL")]
    pub email: String,

    /// Free-form tool input
    #[arg(long, default_value = "")]
    pub input: String,

    /// Serve users from a JSON file instead of PostgreSQL
    #[arg(long)]
    pub fixture: Option<PathBuf>,
}

/// Execute a command and return what should be written to stdout
///
/// Configuration comes from the process environment.
pub async fn run(cli: Cli) -> anyhow::Result<String> {
    run_with_config(cli, AppConfig::from_env).await
}

/// Execute a command, loading configuration through `load_config` when the
/// PostgreSQL data layer is needed
pub async fn run_with_config<F>(cli: Cli, load_config: F) -> anyhow::Result<String>
where
    F: FnOnce() -> Result<AppConfig, ConfigError>,
{
    let registry = ToolRegistry::with_builtin_tools().map_err(AppError::from)?;

    match cli.command {
        Command::List => Ok(serde_json::to_string_pretty(&registry.specs())?),
        Command::Invoke(args) => {
            let ctx = build_context(args.fixture.as_deref(), load_config).await?;
            let output = registry
                .invoke(&args.tool, &ctx, &Caller::new(args.email), &args.input)
                .await
                .map_err(AppError::from)?;
            Ok(output.content)
        }
    }
}

#[instrument(skip(load_config))]
async fn build_context<F>(fixture: Option<&Path>, load_config: F) -> anyhow::Result<ServiceContext>
where
    F: FnOnce() -> Result<AppConfig, ConfigError>,
{
    let provider: Arc<dyn ConnectionProvider> = match fixture {
        Some(path) => {
            let json = tokio::fs::read_to_string(path)
                .await
                .with_context(|| format!("failed to read fixture {}", path.display()))?;
            let provider = MemoryConnectionProvider::from_json(&json)
                .with_context(|| format!("malformed fixture {}", path.display()))?;
            Arc::new(provider)
        }
        None => {
            let config = load_config().map_err(AppError::from)?;
            info!(app = %config.app.name, env = ?config.app.env, "Configuration loaded");

            let pool = create_pool(&config.database)
                .await
                .map_err(|e| AppError::Database(e.to_string()))?;
            Arc::new(PgConnectionProvider::new(pool))
        }
    };

    Ok(ServiceContext::new(provider))
}

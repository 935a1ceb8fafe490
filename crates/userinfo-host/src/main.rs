//! User information host entry point
//!
//! Run with:
//! ```bash
//! cargo run -p userinfo-host -- invoke --email a@x.com
//! ```
//!
//! Configuration is loaded from environment variables (or a `.env` file).

use std::process::ExitCode;

use tracing::error;
use userinfo_common::{try_init_tracing_with_config, Environment, ErrorResponse, TracingConfig};
use userinfo_host::{run, Cli};

#[tokio::main]
async fn main() -> ExitCode {
    // .env has to be loaded first so it can supply argument fallbacks
    let cli = match Cli::parse_with_env_file(None, std::env::args_os()) {
        Ok(cli) => cli,
        Err(e) => e.exit(),
    };

    // Initialize tracing
    let tracing_config = TracingConfig::for_environment(Environment::from_env());
    if let Err(e) = try_init_tracing_with_config(tracing_config) {
        eprintln!("Warning: Failed to initialize tracing: {e}");
    }

    match run(cli).await {
        Ok(content) => {
            if content.ends_with('\n') {
                print!("{content}");
            } else {
                println!("{content}");
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            let response = ErrorResponse::from_anyhow(&e);
            error!(error = %response.message, code = response.code, "Invocation failed");
            ExitCode::FAILURE
        }
    }
}

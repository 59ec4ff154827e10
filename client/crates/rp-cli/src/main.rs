//! rapport - relationship-advice content client
//!
//! # Examples
//!
//! ```bash
//! # Log in once; the session is remembered in ~/.rapport/storage.json
//! rapport login --email me@example.com --password hunter22
//!
//! # Browse and contribute
//! rapport techniques list --pretty
//! rapport videos create --data '{"title":"Opening lines","url":"https://..."}'
//!
//! # Forget the session
//! rapport logout
//! ```

use rp_cli::{Cli, CliResult, Client, dispatch, logger, session_store};
use rp_config::Config;
use rp_session::SessionManager;

use std::process::ExitCode;

use clap::Parser;
use serde_json::Value;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> CliResult<String> {
    let config = Config::load()?;
    config.validate()?;

    logger::initialize(
        config.logging.level,
        config.log_path()?,
        config.logging.colored,
    )?;
    config.log_summary();

    let storage_path = if cli.ephemeral {
        None
    } else {
        Some(config.storage_path()?)
    };
    let store = session_store::open(storage_path);
    let mut session = SessionManager::with_key(store, config.storage.session_key.as_str());

    let base_url = cli.server.as_deref().unwrap_or(&config.api.base_url);
    let client = Client::new(base_url, config.api.timeout())?;

    let value = dispatch::run(cli.command, &client, &mut session).await?;

    Ok(render(&value, cli.pretty))
}

fn render(value: &Value, pretty: bool) -> String {
    let rendered = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };

    rendered.unwrap_or_else(|_| value.to_string())
}

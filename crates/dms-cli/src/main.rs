//! DMS chat CLI: entry point.
//!
//! # Commands
//!
//! - `dms init-session`: open a new chat session and remember its id
//! - `dms send-message <TEXT>`: send a message in the active session
//! - `dms get-messages`: print the messages of the active session
//! - `dms end-session`: terminate the active session
//! - `dms status`: show configuration and the active session
//! - `dms health`: query the API health endpoint
//!
//! Configuration comes only from `DMS_API_URL`, `DMS_JWT` and `DMS_CHANNEL_ID`.

mod helpers;
mod session_cmd;
mod status;

use anyhow::Result;
use clap::{Parser, Subcommand};

use dms_core::config::{load_config, Config};
use dms_core::SessionStore;

// ─────────────────────────────────────────────
// CLI definition
// ─────────────────────────────────────────────

/// Interact with the Client Channel API.
#[derive(Parser)]
#[command(name = "dms", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable debug logging (stderr)
    #[arg(long, global = true, default_value_t = false)]
    logs: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a new chat session
    InitSession,

    /// Send a message in the current session
    SendMessage {
        /// Message text
        text: String,
    },

    /// Fetch messages for the current session
    GetMessages,

    /// Terminate the current session
    EndSession,

    /// Show configuration and the active session
    Status,

    /// Check that the API is reachable
    Health,
}

// ─────────────────────────────────────────────
// Entrypoint
// ─────────────────────────────────────────────

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.logs);

    let config = load_config();
    let store = SessionStore::default();

    if let Err(e) = run(cli.command, &config, &store).await {
        helpers::print_error(&e);
        std::process::exit(1);
    }
}

async fn run(command: Commands, config: &Config, store: &SessionStore) -> Result<()> {
    let output = match command {
        Commands::InitSession => session_cmd::init_session(config, store).await?,
        Commands::SendMessage { text } => session_cmd::send_message(config, store, &text).await?,
        Commands::GetMessages => session_cmd::get_messages(config, store).await?,
        Commands::EndSession => session_cmd::end_session(config, store).await?,
        Commands::Health => session_cmd::health(config).await?,
        Commands::Status => return status::run(config, store),
    };

    println!("{output}");
    Ok(())
}

/// Initialize tracing/logging.
///
/// Logs go to stderr so stdout stays plain JSON.
fn init_logging(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = if verbose {
        EnvFilter::new("dms_cli=debug,dms_client=debug,dms_core=debug,info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────

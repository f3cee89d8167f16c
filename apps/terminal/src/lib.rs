//! # MediPOS Terminal Library
//!
//! Core library for the MediPOS terminal shell. It reads one JSON command
//! per line on stdin and writes one JSON response per line on stdout, the
//! same calls a browser front end would make.
//!
//! ## Module Organization
//! ```text
//! medipos_terminal_lib/
//! ├── lib.rs          ◄─── You are here (tracing setup & command loop)
//! ├── seed.rs         ◄─── Demo pharmacy data
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports, States bundle
//! │   ├── billing.rs  ◄─── Billing session (Arc<Mutex>)
//! │   ├── catalog.rs  ◄─── Catalog + customer directory (RwLock)
//! │   ├── session.rs  ◄─── Logged-in user, settings toggles
//! │   ├── sales.rs    ◄─── Historical sales (read-only)
//! │   └── config.rs   ◄─── Configuration state
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command enum + dispatcher
//! │   └── ...         ◄─── One file per page
//! └── error.rs        ◄─── API error type for commands
//! ```
//!
//! ## Output Streams
//! stdout carries responses only. Logs go to stderr so a client can read
//! stdout line by line without filtering.

pub mod commands;
pub mod error;
pub mod seed;
pub mod state;

use std::io;

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use state::{ConfigState, States};

/// Runs the terminal shell until stdin closes.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Application Startup                               │
/// │                                                                         │
/// │  1. Initialize Logging ───────────────────────────────────────────────► │
/// │     • tracing-subscriber with env filter, writing to stderr             │
/// │     • Default: info,medipos=debug, can be overridden with RUST_LOG      │
/// │                                                                         │
/// │  2. Load Configuration ───────────────────────────────────────────────► │
/// │     • MEDIPOS_* environment variables over defaults                     │
/// │                                                                         │
/// │  3. Initialize State Objects ─────────────────────────────────────────► │
/// │     • Catalog, customers, sales: seeded demo data                       │
/// │     • Billing session: empty cart                                       │
/// │     • Session: nobody logged in                                         │
/// │                                                                         │
/// │  4. Serve ────────────────────────────────────────────────────────────► │
/// │     • One command line in, one response line out                        │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub async fn run() -> io::Result<()> {
    init_tracing();

    info!("Starting MediPOS terminal");

    let config = ConfigState::from_env();
    info!(store = %config.store_name, today = %config.today(), "configuration loaded");

    let states = States::seeded(config);
    let stdin = BufReader::new(tokio::io::stdin());
    let stdout = tokio::io::stdout();

    serve(&states, stdin, stdout).await?;

    info!("stdin closed, shutting down");
    Ok(())
}

/// Answers every command line from `reader` on `writer`.
///
/// Blank lines are skipped. Returns when `reader` reaches EOF.
pub async fn serve<R, W>(states: &States, reader: R, mut writer: W) -> io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = reader.lines();

    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let response = commands::dispatch(states, line);
        debug!(ok = response.ok, "command handled");

        let mut encoded = serde_json::to_vec(&response)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        encoded.push(b'\n');
        writer.write_all(&encoded).await?;
        writer.flush().await?;
    }

    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=medipos=trace` - Show trace for medipos crates only
/// - Default: `info,medipos=debug`
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,medipos=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn responses(output: Vec<u8>) -> Vec<Value> {
        String::from_utf8(output)
            .unwrap()
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect()
    }

    #[tokio::test]
    async fn test_serve_answers_each_line() {
        let states = States::seeded(ConfigState::default());
        let input = concat!(
            r#"{"cmd":"login","username":"cashier","password":"pw","role":"employee"}"#,
            "\n\n",
            r#"{"cmd":"add_to_cart","productId":"4"}"#,
            "\n",
            "garbage\n",
            r#"{"cmd":"update_cart_item","productId":"4","quantity":500}"#,
            "\n",
        );
        let mut output = Vec::new();

        serve(&states, input.as_bytes(), &mut output).await.unwrap();

        let responses = responses(output);
        assert_eq!(responses.len(), 4);
        assert_eq!(responses[0]["data"]["user"]["role"], "employee");
        assert_eq!(responses[1]["data"]["totalCents"], 850);
        assert_eq!(responses[2]["error"]["code"], "BAD_REQUEST");
        assert_eq!(responses[3]["error"]["code"], "INSUFFICIENT_STOCK");
        assert_eq!(
            responses[3]["notifications"][0]["message"],
            "Only 120 items available in stock"
        );
    }

    #[tokio::test]
    async fn test_serve_stops_at_eof() {
        let states = States::seeded(ConfigState::default());
        let mut output = Vec::new();

        serve(&states, &b""[..], &mut output).await.unwrap();
        assert!(output.is_empty());
    }
}

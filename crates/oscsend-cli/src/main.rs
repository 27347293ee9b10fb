use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use oscsend_core::{Framing, encode_message, send_message, type_tags};
use serde::Serialize;

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (commit ",
    env!("OSCSEND_BUILD_COMMIT"),
    ", ",
    env!("OSCSEND_BUILD_DATE"),
    ")"
);

#[derive(Parser, Debug)]
#[command(name = "oscsend")]
#[command(version, long_version = LONG_VERSION)]
#[command(
    about = "Encode a command line as an OSC 1.0 message and send it over UDP.",
    long_about = None,
    after_help = "Examples:\n  oscsend /field/scroll/start\n  oscsend /vol 0.5\n  oscsend /cue/go \"main stage\" --host 10.0.0.5 --port 9000\n  oscsend /mix -1.5 bar --dry-run --json"
)]
struct Cli {
    /// OSC address pattern (e.g. /cue/go)
    address: String,

    /// Message arguments; numeric-looking tokens are sent as float32,
    /// everything else as strings
    #[arg(allow_negative_numbers = true)]
    tokens: Vec<String>,

    /// Destination hostname or IP
    #[arg(long, env = "OSC_HOST", default_value = oscsend_core::DEFAULT_HOST)]
    host: String,

    /// Destination UDP port
    #[arg(long, env = "OSC_PORT", default_value_t = oscsend_core::DEFAULT_PORT)]
    port: u16,

    /// NUL-terminate address and type tags even when already 4-byte aligned
    /// (OSC 1.0 conformant; default framing matches the historical sender)
    #[arg(long)]
    strict_framing: bool,

    /// Encode and print the payload without opening a socket
    #[arg(long)]
    dry_run: bool,

    /// Print a machine-readable JSON summary on stdout
    #[arg(long, conflicts_with = "quiet")]
    json: bool,

    /// Suppress the confirmation line
    #[arg(long)]
    quiet: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cmd_send(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err.message);
            if let Some(hint) = err.hint {
                eprintln!("hint: {}", hint);
            }
            ExitCode::from(2)
        }
    }
}

#[derive(Debug)]
struct CliError {
    message: String,
    hint: Option<String>,
}

impl CliError {
    fn new(message: impl Into<String>, hint: Option<String>) -> Self {
        Self {
            message: message.into(),
            hint,
        }
    }
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

impl From<anyhow::Error> for CliError {
    fn from(err: anyhow::Error) -> Self {
        CliError::new(err.to_string(), None)
    }
}

/// JSON summary emitted by `--json`.
#[derive(Debug, Serialize)]
struct MessageSummary {
    destination: String,
    address: String,
    type_tags: String,
    size: usize,
    payload_hex: String,
    sent: bool,
}

fn cmd_send(cli: Cli) -> Result<(), CliError> {
    let framing = if cli.strict_framing {
        Framing::Strict
    } else {
        Framing::Compat
    };

    let args = cli
        .tokens
        .iter()
        .map(|token| oscsend_core::classify_token(token))
        .collect::<Result<Vec<_>, _>>()
        .map_err(|err| {
            CliError::new(
                err.to_string(),
                Some("numeric-looking tokens must parse as a float32".to_string()),
            )
        })?;

    let payload = encode_message(&cli.address, &args, framing);

    if !cli.dry_run {
        send_message(&cli.host, cli.port, &payload).map_err(|err| {
            CliError::new(
                format!("send to {}:{} failed: {err}", cli.host, cli.port),
                Some("check the destination host and port".to_string()),
            )
        })?;
    }

    if cli.json {
        let summary = MessageSummary {
            destination: format!("{}:{}", cli.host, cli.port),
            address: cli.address.clone(),
            type_tags: type_tags(&args),
            size: payload.len(),
            payload_hex: hex_dump(&payload),
            sent: !cli.dry_run,
        };
        let json = serde_json::to_string(&summary).context("JSON serialization failed")?;
        println!("{}", json);
        return Ok(());
    }

    if cli.dry_run {
        println!("{}", hex_dump(&payload));
        return Ok(());
    }

    if !cli.quiet {
        println!("Sent: {} {}", cli.address, cli.tokens.join(" "));
    }
    Ok(())
}

fn hex_dump(payload: &[u8]) -> String {
    payload
        .iter()
        .map(|byte| format!("{byte:02x}"))
        .collect::<Vec<_>>()
        .join(" ")
}

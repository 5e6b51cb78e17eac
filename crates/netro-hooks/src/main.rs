mod capture;
mod config;
mod directive;
mod error;
mod event;
mod handlers;

use std::io::{Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use chrono::{DateTime, Local};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

use crate::config::CaptureConfig;
use crate::directive::HookOutput;
use crate::error::CaptureError;
use crate::event::{CaptureIntent, HookEvent};

/// Environment variable holding an optional `tracing` filter directive.
const LOG_ENV: &str = "NETRO_HOOKS_LOG";

/// Entry point for the netro-hooks binary.
///
/// Reads a PostToolUse event from stdin. Large test/build output from Bash
/// is saved under `~/.claude/output-logs` and replaced with a short summary
/// on stdout; anything else passes through untouched.
///
/// CRITICAL: Always exits 0. A non-zero exit could block Claude Code operations.
fn main() -> ExitCode {
    // Diagnostics go to stderr; stdout carries the hook response only
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::default().add_directive(LevelFilter::WARN.into()));
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .compact()
        .init();

    if let Err(e) = run() {
        tracing::warn!("netro-hooks: {e:#}");
    }

    ExitCode::SUCCESS
}

fn run() -> anyhow::Result<()> {
    let mut input = Vec::new();
    std::io::stdin().read_to_end(&mut input)?;

    // Parse event (bail silently on malformed input)
    let event = match HookEvent::from_slice(&input) {
        Ok(e) => e,
        Err(e) => {
            tracing::debug!("failed to parse hook event: {e}");
            return Ok(());
        }
    };

    let config = CaptureConfig::default();

    if let Some(output) = intercept(&event, &config, dirs::home_dir, &Local::now())? {
        let json = serde_json::to_string(&output)?;
        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "{json}")?;
        stdout.flush()?;
    }

    Ok(())
}

/// Decide what to do with one event. Returns the response to print, or
/// `None` to let the output through unchanged.
///
/// `home` is only consulted once an event is going to be captured.
fn intercept(
    event: &HookEvent,
    config: &CaptureConfig,
    home: impl FnOnce() -> Option<PathBuf>,
    now: &DateTime<Local>,
) -> anyhow::Result<Option<HookOutput>> {
    match handlers::classify(event, config) {
        CaptureIntent::Skip { reason } => {
            tracing::debug!("skipping: {reason}");
            Ok(None)
        }
        CaptureIntent::Capture { command, text } => {
            let home = home().ok_or(CaptureError::NoHomeDir)?;
            let log_dir = crate::config::log_dir(&home);
            let path = capture::write_log(&log_dir, &command, &text, now)?;
            tracing::info!(
                "captured {} chars from '{command}' to {}",
                text.chars().count(),
                path.display()
            );
            Ok(Some(HookOutput::summary(&path, &text, config.tail_lines)))
        }
    }
}

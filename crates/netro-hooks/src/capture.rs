use std::fs::OpenOptions;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, TimeZone};

use crate::error::{CaptureError, Result};

/// Upper bound on `-N` suffixes tried when a same-second log already exists.
const MAX_NAME_ATTEMPTS: usize = 1000;

/// Width of the `=` rule between the command line and the output.
const SEPARATOR_WIDTH: usize = 80;

/// Full log file body: command line, separator, then the raw output.
pub fn render_log(command: &str, text: &str) -> String {
    format!(
        "Command: {command}\n{}\n{text}",
        "=".repeat(SEPARATOR_WIDTH)
    )
}

/// Write the full output to a new file in `log_dir` and return its path.
///
/// The directory is created if missing. The file name is
/// `output-YYYYMMDD-HHMMSS.log`; if that already exists (two captures in the
/// same second) a `-1`, `-2`, ... suffix is appended so earlier logs are
/// never overwritten.
pub fn write_log<Tz: TimeZone>(
    log_dir: &Path,
    command: &str,
    text: &str,
    now: &DateTime<Tz>,
) -> Result<PathBuf>
where
    Tz::Offset: std::fmt::Display,
{
    std::fs::create_dir_all(log_dir).map_err(|source| CaptureError::CreateDir {
        path: log_dir.to_path_buf(),
        source,
    })?;

    let stamp = now.format("%Y%m%d-%H%M%S").to_string();
    let body = render_log(command, text);

    for attempt in 0..MAX_NAME_ATTEMPTS {
        let name = if attempt == 0 {
            format!("output-{stamp}.log")
        } else {
            format!("output-{stamp}-{attempt}.log")
        };
        let path = log_dir.join(name);

        let mut file = match OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(f) => f,
            Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                tracing::debug!("log file {} exists, trying next suffix", path.display());
                continue;
            }
            Err(source) => return Err(CaptureError::WriteLog { path, source }),
        };

        if let Err(source) = file.write_all(body.as_bytes()).and_then(|()| file.flush()) {
            // Leave no partial snapshot behind.
            drop(file);
            std::fs::remove_file(&path).ok();
            return Err(CaptureError::WriteLog { path, source });
        }

        tracing::debug!("wrote {} bytes to {}", body.len(), path.display());
        return Ok(path);
    }

    Err(CaptureError::NameExhausted(stamp, MAX_NAME_ATTEMPTS))
}

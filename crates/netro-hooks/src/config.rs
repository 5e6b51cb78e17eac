use std::path::{Path, PathBuf};

/// The tool whose output is intercepted.
pub const BASH_TOOL: &str = "Bash";

/// Outputs longer than this many characters are candidates for capture.
pub const MAX_INLINE_CHARS: usize = 8000;

/// Number of trailing lines handed back to the agent.
pub const TAIL_LINES: usize = 30;

/// Lowercase substrings that mark a command as test/build related.
pub const CAPTURE_KEYWORDS: &[&str] = &[
    "test",
    "e2e",
    "vitest",
    "playwright",
    "jest",
    "build",
    "coverage",
];

/// Fixed capture thresholds.
#[derive(Debug, Clone)]
pub struct CaptureConfig {
    pub max_inline_chars: usize,
    pub tail_lines: usize,
    pub keywords: &'static [&'static str],
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            max_inline_chars: MAX_INLINE_CHARS,
            tail_lines: TAIL_LINES,
            keywords: CAPTURE_KEYWORDS,
        }
    }
}

/// Logs live under `<home>/.claude/output-logs`.
pub fn log_dir(home: &Path) -> PathBuf {
    home.join(".claude").join("output-logs")
}

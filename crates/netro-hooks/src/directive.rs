use std::path::Path;

use serde::Serialize;

/// Response written to stdout when output was captured.
#[derive(Debug, Clone, Serialize)]
pub struct HookOutput {
    #[serde(rename = "continue")]
    pub continue_: bool,
    #[serde(rename = "hookSpecificOutput")]
    pub hook_specific_output: HookSpecificOutput,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HookSpecificOutput {
    pub additional_context: String,
}

impl HookOutput {
    /// Build the summary handed back to the agent in place of the full output.
    pub fn summary(log_path: &Path, text: &str, tail_lines: usize) -> Self {
        let size = group_thousands(text.chars().count());
        let tail = tail(text, tail_lines);
        let additional_context = format!(
            "\nLarge output captured to: {}\nOutput size: {size} chars\nLast {tail_lines} lines:\n{tail}\n",
            log_path.display()
        );
        Self {
            continue_: true,
            hook_specific_output: HookSpecificOutput { additional_context },
        }
    }
}

/// The last `n` newline-separated lines of `text`, joined back with `\n`.
pub fn tail(text: &str, n: usize) -> String {
    let lines: Vec<&str> = text.split('\n').collect();
    let start = lines.len().saturating_sub(n);
    lines[start..].join("\n")
}

/// Format an integer with `,` between groups of three digits.
pub fn group_thousands(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbered(n: usize) -> String {
        (1..=n)
            .map(|i| format!("line {i}"))
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(9000), "9,000");
        assert_eq!(group_thousands(123456), "123,456");
        assert_eq!(group_thousands(1234567), "1,234,567");
    }

    #[test]
    fn test_tail_takes_last_lines_in_order() {
        let text = numbered(100);
        let tail = tail(&text, 30);
        let lines: Vec<&str> = tail.split('\n').collect();
        assert_eq!(lines.len(), 30);
        assert_eq!(lines[0], "line 71");
        assert_eq!(lines[29], "line 100");
    }

    #[test]
    fn test_tail_shorter_than_limit() {
        let text = numbered(5);
        assert_eq!(tail(&text, 30), text);
    }

    #[test]
    fn test_tail_single_line() {
        assert_eq!(tail(&"x".repeat(9000), 30), "x".repeat(9000));
    }

    #[test]
    fn test_summary_json_shape() {
        let text = format!("{}\n{}", "a".repeat(8995), "ok");
        let output = HookOutput::summary(Path::new("/tmp/output-1.log"), &text, 30);
        let json = serde_json::to_value(&output).unwrap();

        assert_eq!(json["continue"], true);
        let ctx = json["hookSpecificOutput"]["additionalContext"]
            .as_str()
            .unwrap();
        assert!(ctx.starts_with("\nLarge output captured to: /tmp/output-1.log\n"));
        assert!(ctx.contains("Output size: 8,998 chars\n"));
        assert!(ctx.ends_with(&format!("Last 30 lines:\n{text}\n")));
    }
}

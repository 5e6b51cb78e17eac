use crate::config::{CaptureConfig, BASH_TOOL};
use crate::event::{CaptureIntent, HookEvent};

/// Classify a PostToolUse event.
///
/// Captures only Bash output that is both longer than the inline limit and
/// produced by a test/build command. Everything else passes through.
pub fn classify(event: &HookEvent, config: &CaptureConfig) -> CaptureIntent {
    let tool = event.tool_name.as_deref().unwrap_or("");
    if tool != BASH_TOOL {
        return CaptureIntent::Skip {
            reason: format!("untracked tool: {tool}"),
        };
    }

    let text = event.tool_response.text();
    let size = text.chars().count();
    if size <= config.max_inline_chars {
        return CaptureIntent::Skip {
            reason: format!("output is {size} chars, under the {} limit", config.max_inline_chars),
        };
    }

    let command = event.command();
    if !is_test_command(command, config.keywords) {
        return CaptureIntent::Skip {
            reason: "command is not test/build related".into(),
        };
    }

    CaptureIntent::Capture {
        command: command.to_string(),
        text: text.to_string(),
    }
}

/// Case-insensitive substring match against the keyword list.
fn is_test_command(command: &str, keywords: &[&str]) -> bool {
    let lower = command.to_lowercase();
    keywords.iter().any(|kw| lower.contains(kw))
}

use serde::Deserialize;

/// JSON payload received from Claude Code's PostToolUse hook on stdin.
///
/// Only the fields the interceptor reads are modelled; everything else in the
/// payload (session id, cwd, ...) is ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HookEvent {
    #[serde(default)]
    pub tool_name: Option<String>,
    #[serde(default)]
    pub tool_response: ToolResponse,
    #[serde(default)]
    pub tool_input: Option<serde_json::Value>,
}

impl HookEvent {
    /// Parse a raw stdin payload. Anything other than a JSON object, including
    /// bytes that are not UTF-8, is rejected.
    pub fn from_slice(input: &[u8]) -> serde_json::Result<Self> {
        match serde_json::from_slice::<serde_json::Value>(input)? {
            value @ serde_json::Value::Object(_) => serde_json::from_value(value),
            other => Err(serde::de::Error::custom(format!(
                "expected a JSON object, got {}",
                json_kind(&other)
            ))),
        }
    }

    /// The `command` string from `tool_input`, or `""` when absent.
    pub fn command(&self) -> &str {
        self.tool_input
            .as_ref()
            .and_then(|v| v.get("command"))
            .and_then(|v| v.as_str())
            .unwrap_or("")
    }
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    use serde_json::Value;
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Captured tool output. Claude Code sends either an object carrying a `text`
/// field or a bare value.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "serde_json::Value")]
pub enum ToolResponse {
    Structured { text: String },
    Plain(String),
}

impl ToolResponse {
    pub fn text(&self) -> &str {
        match self {
            Self::Structured { text } | Self::Plain(text) => text,
        }
    }
}

impl Default for ToolResponse {
    fn default() -> Self {
        Self::Structured {
            text: String::new(),
        }
    }
}

impl From<serde_json::Value> for ToolResponse {
    fn from(value: serde_json::Value) -> Self {
        use serde_json::Value;
        match value {
            Value::Object(mut map) => {
                let text = match map.remove("text") {
                    Some(Value::String(s)) => s,
                    Some(other) => other.to_string(),
                    None => String::new(),
                };
                Self::Structured { text }
            }
            Value::String(s) => Self::Plain(s),
            other => Self::Plain(other.to_string()),
        }
    }
}

/// Result of classifying a hook event.
#[derive(Debug)]
pub enum CaptureIntent {
    /// Leave the tool output untouched.
    Skip { reason: String },
    /// Redirect the output to a log file and hand back a summary.
    Capture { command: String, text: String },
}

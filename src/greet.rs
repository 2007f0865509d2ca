//! The greeting demo tool: the logic shared by the `greet` and
//! `greet-legacy` binaries. Kept as a pure function over an already-decoded
//! [`ArgumentSet`] so the behavior is testable without process state.

use serde_json::Value;

use crate::args::ArgumentSet;
use crate::result::ToolResult;

const DEFAULT_NAME: &str = "Guest";
const DEFAULT_GREETING: &str = "Hello";

pub fn run(args: &ArgumentSet) -> ToolResult {
    let name = args.str_or("name", DEFAULT_NAME);
    let greeting = args.str_or("greeting", DEFAULT_GREETING);
    let config = args.object_or_empty("config");

    let mut message = format!("{greeting}, {name}! [Rust]");

    // Debug mode echoes the whole config into the message.
    if config.get("debug").is_some_and(is_truthy) {
        let rendered = Value::Object(config.clone());
        message.push_str(&format!(" (debug mode: {rendered})"));
    }

    ToolResult::success(message, runtime_id(), Value::Object(config))
}

fn runtime_id() -> String {
    format!("Rust {}", env!("CARGO_PKG_VERSION"))
}

/// Truthiness the way the orchestrator's flow language sees JSON values:
/// `false`, `null`, zero, and empty strings/arrays/objects are falsy.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

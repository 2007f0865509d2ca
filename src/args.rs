use std::env;

use serde_json::{Map, Value};

/// Environment variable holding the full argument payload as one JSON object.
pub const ARGS_VAR: &str = "TRELLIS_ARGS";

/// Prefix of the per-argument variables used before the payload variable
/// existed. Trellis upper-cases argument names, so `name` arrives as
/// `TRELLIS_ARG_NAME`.
pub const LEGACY_ARG_PREFIX: &str = "TRELLIS_ARG_";

/// The decoded arguments for a single tool invocation.
///
/// Keys map to arbitrary JSON values; tools pull out the fields they know
/// with the typed getters and ignore the rest.
#[derive(Debug, Clone, Default)]
pub struct ArgumentSet {
    values: Map<String, Value>,
}

impl ArgumentSet {
    /// Decodes the payload text of the `TRELLIS_ARGS` convention.
    ///
    /// Malformed or non-object payloads decode as empty. The orchestrator
    /// expects tools to fall back to their defaults on bad input rather than
    /// fail, so this is silent recovery, not an error path.
    pub fn from_json(raw: &str) -> Self {
        let values = match serde_json::from_str::<Value>(raw) {
            Ok(Value::Object(map)) => map,
            _ => Map::new(),
        };
        Self { values }
    }

    /// Reads `TRELLIS_ARGS` from the environment; absent means empty.
    pub fn from_env() -> Self {
        match env::var(ARGS_VAR) {
            Ok(raw) => Self::from_json(&raw),
            Err(_) => Self::default(),
        }
    }

    /// Reads the legacy `TRELLIS_ARG_*` variables from the environment.
    pub fn from_legacy_env() -> Self {
        Self::from_legacy_pairs(env::vars())
    }

    /// Decodes legacy key/value pairs. Split out from [`from_legacy_env`] so
    /// the decoding rules stay testable without touching process state.
    ///
    /// [`from_legacy_env`]: Self::from_legacy_env
    pub fn from_legacy_pairs(pairs: impl IntoIterator<Item = (String, String)>) -> Self {
        let mut values = Map::new();
        for (key, raw) in pairs {
            if let Some(name) = key.strip_prefix(LEGACY_ARG_PREFIX) {
                if name.is_empty() {
                    continue;
                }
                values.insert(name.to_lowercase(), decode_legacy_value(&raw));
            }
        }
        Self { values }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    /// The field as a string, or `default` when missing or not a string.
    pub fn str_or(&self, key: &str, default: &str) -> String {
        match self.values.get(key) {
            Some(Value::String(s)) => s.clone(),
            _ => default.to_string(),
        }
    }

    /// The field as a JSON object, or an empty object when missing or not one.
    pub fn object_or_empty(&self, key: &str) -> Map<String, Value> {
        match self.values.get(key) {
            Some(Value::Object(map)) => map.clone(),
            _ => Map::new(),
        }
    }
}

/// The legacy runner serializes primitive argument values verbatim and
/// complex ones (maps, lists) as JSON text. Mirror its auto-detection rule:
/// only text shaped like an object or array is decoded, so a name of `true`
/// stays the string `"true"`.
fn decode_legacy_value(raw: &str) -> Value {
    let trimmed = raw.trim();
    if trimmed.starts_with('{') || trimmed.starts_with('[') {
        if let Ok(value) = serde_json::from_str(trimmed) {
            return value;
        }
    }
    Value::String(raw.to_string())
}

use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

/// The host application's settings file, read leniently.
///
/// Any JSON document except `null` is accepted. Fields are looked up by name
/// and a field of an unexpected shape summarizes as empty instead of failing.
#[derive(Debug, Clone)]
pub struct SettingsDocument {
    root: Value,
}

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error(transparent)]
    Syntax(#[from] serde_json::Error),
    #[error("settings document is null")]
    Null,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SettingsSummary {
    pub allowed: usize,
    pub denied: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub env: Option<Vec<EnvVar>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mcp_servers: Option<Vec<String>>,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct EnvVar {
    pub name: String,
    pub value: String,
}

impl SettingsDocument {
    pub fn parse(raw: &str) -> Result<Self, DocumentError> {
        match serde_json::from_str(raw)? {
            Value::Null => Err(DocumentError::Null),
            root => Ok(Self { root }),
        }
    }

    pub fn summary(&self) -> SettingsSummary {
        let permissions = self.root.get("permissions");
        let rules = |kind: &str| permissions.and_then(|p| p.get(kind)).map_or(0, length);

        SettingsSummary {
            allowed: rules("allow"),
            denied: rules("deny"),
            env: self.section("env").map(|env| {
                entries(env)
                    .into_iter()
                    .map(|(name, value)| EnvVar {
                        name,
                        value: display_value(value),
                    })
                    .collect()
            }),
            mcp_servers: self.section("mcpServers").map(|servers| {
                entries(servers)
                    .into_iter()
                    .map(|(name, _)| name)
                    .collect()
            }),
        }
    }

    /// A top-level field, present only when it holds a truthy value.
    fn section(&self, key: &str) -> Option<&Value> {
        self.root.get(key).filter(|value| is_truthy(value))
    }
}

fn length(value: &Value) -> usize {
    match value {
        Value::Array(items) => items.len(),
        Value::String(text) => text.encode_utf16().count(),
        _ => 0,
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Keys of an object, or indices of an array, in document order.
fn entries(value: &Value) -> Vec<(String, &Value)> {
    match value {
        Value::Object(map) => map.iter().map(|(key, item)| (key.clone(), item)).collect(),
        Value::Array(items) => items
            .iter()
            .enumerate()
            .map(|(index, item)| (index.to_string(), item))
            .collect(),
        _ => Vec::new(),
    }
}

fn display_value(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::Null => String::new(),
                other => display_value(other),
            })
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
        other => other.to_string(),
    }
}

/// First `limit` newline-separated lines of `raw`, verbatim.
pub fn raw_preview(raw: &str, limit: usize) -> Vec<String> {
    raw.split('\n').take(limit).map(str::to_string).collect()
}

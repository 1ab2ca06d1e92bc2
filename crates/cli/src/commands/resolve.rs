//! Resolve command implementation.

use anyhow::{Context, Result};
use appenv::KeySet;
use std::path::Path;
use tracing::info;

use crate::args::OutputFormat;

pub fn run(dir: &Path, app_env: Option<&str>, keys: &[String], format: OutputFormat) -> Result<()> {
    let loader = super::build_loader(dir, app_env);
    let app_env = loader.resolve_app_env();
    info!(dir = %dir.display(), app_env = %app_env, keys = keys.len(), "Resolving keys");

    let mut set = KeySet::new(keys.iter().cloned());
    loader
        .with_app_env(&app_env)
        .load(&mut set)
        .with_context(|| format!("Failed to load configuration for '{}'", app_env))?;

    print!("{}", render(&set, format)?);
    Ok(())
}

/// Format resolved keys in request order. Text output omits unresolved keys;
/// JSON reports them as null.
pub fn render(set: &KeySet, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => {
            let mut output = String::new();
            for (key, value) in set.iter() {
                output.push_str(key);
                output.push('=');
                output.push_str(&quote(value));
                output.push('\n');
            }
            Ok(output)
        }
        OutputFormat::Json => {
            let mut map = serde_json::Map::new();
            for key in set.keys() {
                let value = match set.get(key) {
                    Some(v) => serde_json::Value::String(v.to_string()),
                    None => serde_json::Value::Null,
                };
                map.insert(key.to_string(), value);
            }
            let mut output = serde_json::to_string_pretty(&map)?;
            output.push('\n');
            Ok(output)
        }
    }
}

/// Quote a value so the output can be read back as a dotenv file.
fn quote(value: &str) -> String {
    let plain = !value.is_empty()
        && value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "_-./:@,+%".contains(c));
    if plain {
        value.to_string()
    } else {
        let escaped = value
            .replace('\\', "\\\\")
            .replace('"', "\\\"")
            .replace('$', "\\$")
            .replace('\n', "\\n");
        format!("\"{}\"", escaped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn resolved() -> KeySet {
        let mut set = KeySet::new(["HOST", "GREETING", "MISSING", "EMPTY"]);
        let source: HashMap<String, String> = [
            ("HOST".to_string(), "db.internal:5432".to_string()),
            ("GREETING".to_string(), "hello \"world\"".to_string()),
            ("EMPTY".to_string(), String::new()),
        ]
        .into();
        appenv::bind(&mut set, &source).unwrap();
        set
    }

    #[test]
    fn test_render_text() {
        let output = render(&resolved(), OutputFormat::Text).unwrap();
        assert_eq!(
            output,
            "HOST=db.internal:5432\nGREETING=\"hello \\\"world\\\"\"\nEMPTY=\"\"\n"
        );
    }

    #[test]
    fn test_render_json_reports_unresolved_as_null() {
        let output = render(&resolved(), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value["HOST"], "db.internal:5432");
        assert_eq!(value["EMPTY"], "");
        assert!(value["MISSING"].is_null());
    }

    #[test]
    fn test_render_json_keeps_request_order() {
        let output = render(&resolved(), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        let keys: Vec<&str> = value
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(keys, ["HOST", "GREETING", "MISSING", "EMPTY"]);
    }

    #[test]
    fn test_text_output_reads_back_as_dotenv() {
        let output = render(&resolved(), OutputFormat::Text).unwrap();
        let parsed: HashMap<String, String> = dotenvy::from_read_iter(output.as_bytes())
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(parsed["GREETING"], "hello \"world\"");
        assert_eq!(parsed["HOST"], "db.internal:5432");
    }
}

use super::errors::ConfigError;
use std::path::Path;
use std::sync::Arc;
use toml_edit::{Array, DocumentMut, Item, Table, Value};

type Result<T> = std::result::Result<T, ConfigError>;

/// Migrates config file to latest format if needed
pub async fn migrate_config_if_needed<P: AsRef<Path>>(
    path: P,
    events: Option<&Arc<subplus_events::EventBus>>,
) -> Result<()> {
    let content = tokio::fs::read_to_string(path.as_ref()).await?;
    let (migrated, added_fields) = migrate_document(&content)?;

    // Only write if something changed
    if !added_fields.is_empty() {
        tokio::fs::write(path.as_ref(), migrated).await?;

        if let Some(event_bus) = events {
            event_bus.emit(subplus_events::AppEvent::ConfigMigrated {
                added_fields: added_fields.clone(),
            });
        }
    }

    Ok(())
}

/// Returns the migrated document and the list of changes applied
pub(crate) fn migrate_document(content: &str) -> Result<(String, Vec<String>)> {
    let mut doc = content.parse::<DocumentMut>()?;
    let mut added_fields = Vec::new();

    migrate_server_section(&mut doc, &mut added_fields)?;
    migrate_subtitles_section(&mut doc, &mut added_fields)?;

    Ok((doc.to_string(), added_fields))
}

fn migrate_server_section(
    doc: &mut DocumentMut,
    added_fields: &mut Vec<String>,
) -> Result<()> {
    // Legacy flat keys from the single-directory layout
    let legacy_host = doc.remove("server_host");
    let legacy_port = doc.remove("server_port");

    ensure_table(doc, "server", added_fields);
    let server = doc["server"]
        .as_table_mut()
        .ok_or_else(|| ConfigError::MigrationError("Invalid [server] section in config".to_string()))?;

    if let Some(host) = legacy_host {
        server["host"] = host;
        added_fields.push("server.host (migrated from server_host)".to_string());
    }
    if let Some(port) = legacy_port {
        server["port"] = port;
        added_fields.push("server.port (migrated from server_port)".to_string());
    }

    ensure_field(server, "host", Value::from("127.0.0.1"), added_fields);
    ensure_field(server, "port", Value::from(8888), added_fields);
    ensure_field(server, "timeout_secs", Value::from(30), added_fields);
    ensure_field(server, "max_concurrent_requests", Value::from(256), added_fields);
    ensure_field(server, "enable_compression", Value::from(true), added_fields);

    if !server.contains_key("allowed_origins") {
        server["allowed_origins"] = Item::Value(Value::Array(string_array(&["*"])));
        added_fields.push("server.allowed_origins".to_string());
    }

    Ok(())
}

fn migrate_subtitles_section(
    doc: &mut DocumentMut,
    added_fields: &mut Vec<String>,
) -> Result<()> {
    let legacy_dir = doc.remove("subtitle_dir");
    let legacy_formats = doc.remove("supported_formats");

    ensure_table(doc, "subtitles", added_fields);
    let subtitles = doc["subtitles"]
        .as_table_mut()
        .ok_or_else(|| ConfigError::MigrationError("Invalid [subtitles] section in config".to_string()))?;

    // A single legacy directory becomes the only entry of the list
    if let Some(dir) = legacy_dir {
        let dir = dir
            .as_str()
            .ok_or_else(|| ConfigError::MigrationError("subtitle_dir must be a string".to_string()))?
            .to_string();
        subtitles["directories"] = Item::Value(Value::Array(string_array(&[dir.as_str()])));
        added_fields.push("subtitles.directories (migrated from subtitle_dir)".to_string());
    }
    if let Some(formats) = legacy_formats {
        subtitles["formats"] = formats;
        added_fields.push("subtitles.formats (migrated from supported_formats)".to_string());
    }

    if !subtitles.contains_key("directories") {
        subtitles["directories"] = Item::Value(Value::Array(string_array(&["../subtitles"])));
        added_fields.push("subtitles.directories".to_string());
    }
    if !subtitles.contains_key("formats") {
        subtitles["formats"] = Item::Value(Value::Array(string_array(&[".ass", ".srt", ".vtt"])));
        added_fields.push("subtitles.formats".to_string());
    }

    Ok(())
}

fn ensure_table(doc: &mut DocumentMut, key: &str, added_fields: &mut Vec<String>) {
    if !doc.contains_key(key) {
        let mut table = Table::new();
        table.set_implicit(true);
        doc[key] = Item::Table(table);
        added_fields.push(key.to_string());
    }
}

fn ensure_field(
    table: &mut Table,
    key: &str,
    default_value: Value,
    added_fields: &mut Vec<String>,
) {
    if !table.contains_key(key) {
        table[key] = Item::Value(default_value);
        added_fields.push(key.to_string());
    }
}

fn string_array(values: &[&str]) -> Array {
    let mut arr = Array::new();
    for value in values {
        arr.push(*value);
    }
    arr
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defaults::DEFAULT_CONFIG_TEMPLATE;
    use crate::models::Config;

    #[test]
    fn test_current_template_needs_no_migration() {
        let (_, added) = migrate_document(DEFAULT_CONFIG_TEMPLATE).unwrap();
        assert!(added.is_empty(), "unexpected changes: {:?}", added);
    }

    #[test]
    fn test_legacy_flat_keys_are_moved() {
        let legacy = r#"
subtitle_dir = "~/subs"
server_port = 9999
server_host = "0.0.0.0"
supported_formats = [".srt"]
"#;

        let (migrated, added) = migrate_document(legacy).unwrap();
        let config = Config::from_toml_str(&migrated).unwrap();

        assert!(!added.is_empty());
        assert_eq!(config.subtitles.directories, vec!["~/subs"]);
        assert_eq!(config.subtitles.formats, vec![".srt"]);
        assert_eq!(config.server.port, 9999);
        assert_eq!(config.server.host, "0.0.0.0");
        assert!(!migrated.contains("subtitle_dir"));
    }

    #[test]
    fn test_missing_fields_are_added() {
        let (migrated, added) = migrate_document("[server]\nport = 7000\n").unwrap();

        assert!(added.contains(&"subtitles".to_string()));
        assert!(added.contains(&"host".to_string()));
        assert!(!added.contains(&"port".to_string()));

        let config = Config::from_toml_str(&migrated).unwrap();
        assert_eq!(config.server.port, 7000);
        assert_eq!(config.subtitles.formats, vec![".ass", ".srt", ".vtt"]);
    }
}

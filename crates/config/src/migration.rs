use std::path::Path;
use std::sync::Arc;
use toml_edit::{Array, DocumentMut, Item, Table, Value};

/// Migrates config file to latest format if needed
pub async fn migrate_config_if_needed<P: AsRef<Path>>(
    path: P,
    events: Option<&Arc<blog_events::EventBus>>,
) -> anyhow::Result<()> {
    let content = tokio::fs::read_to_string(path.as_ref()).await?;
    let mut doc = content.parse::<DocumentMut>()?;
    let mut added_fields = Vec::new();

    migrate_server_section(&mut doc, &mut added_fields)?;
    migrate_uploads_section(&mut doc, &mut added_fields)?;
    migrate_site_section(&mut doc, &mut added_fields)?;

    // Only write if we added fields
    if !added_fields.is_empty() {
        tokio::fs::write(path.as_ref(), doc.to_string()).await?;

        if let Some(event_bus) = events {
            event_bus.emit(blog_events::AppEvent::ConfigMigrated {
                added_fields: added_fields.clone(),
            });
        }
    }

    Ok(())
}

fn migrate_server_section(
    doc: &mut DocumentMut,
    added_fields: &mut Vec<String>,
) -> anyhow::Result<()> {
    let server = ensure_table(doc.as_table_mut(), "server", added_fields)?;

    ensure_field(server, "host", Value::from("0.0.0.0"), added_fields);
    ensure_field(server, "port", Value::from(3000), added_fields);
    ensure_field(
        server,
        "base_url",
        Value::from("http://localhost:3000"),
        added_fields,
    );
    ensure_field(server, "tcp_nodelay", Value::from(true), added_fields);
    ensure_field(server, "timeout_secs", Value::from(60), added_fields);
    ensure_field(
        server,
        "max_concurrent_requests",
        Value::from(1000),
        added_fields,
    );
    ensure_field(
        server,
        "max_body_size_mb",
        Value::from(100),
        added_fields,
    );
    ensure_field(
        server,
        "streaming_threshold_mb",
        Value::from(100),
        added_fields,
    );
    ensure_field(
        server,
        "enable_compression",
        Value::from(true),
        added_fields,
    );

    if !server.contains_key("allowed_origins") {
        let mut arr = Array::new();
        arr.push("*");
        server["allowed_origins"] = Item::Value(Value::Array(arr));
        added_fields.push("server.allowed_origins".to_string());
    }

    Ok(())
}

fn migrate_uploads_section(
    doc: &mut DocumentMut,
    added_fields: &mut Vec<String>,
) -> anyhow::Result<()> {
    let uploads = ensure_table(doc.as_table_mut(), "uploads", added_fields)?;
    ensure_field(uploads, "public_dir", Value::from("public"), added_fields);
    ensure_field(
        uploads,
        "default_directory",
        Value::from("articles"),
        added_fields,
    );

    let retry = ensure_table(uploads, "retry", added_fields)?;
    ensure_field(retry, "max_attempts", Value::from(3), added_fields);
    ensure_field(retry, "initial_delay_ms", Value::from(1000), added_fields);
    ensure_field(retry, "max_delay_ms", Value::from(5000), added_fields);

    Ok(())
}

fn migrate_site_section(
    doc: &mut DocumentMut,
    added_fields: &mut Vec<String>,
) -> anyhow::Result<()> {
    let site = ensure_table(doc.as_table_mut(), "site", added_fields)?;
    ensure_field(
        site,
        "documents_path",
        Value::from("data/sites.json"),
        added_fields,
    );

    Ok(())
}

fn ensure_table<'a>(
    parent: &'a mut Table,
    key: &str,
    added_fields: &mut Vec<String>,
) -> anyhow::Result<&'a mut Table> {
    if !parent.contains_key(key) {
        let mut table = Table::new();
        table.set_implicit(true);
        parent[key] = Item::Table(table);
        added_fields.push(key.to_string());
    }

    parent[key]
        .as_table_mut()
        .ok_or_else(|| anyhow::anyhow!("Invalid [{}] section in config", key))
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complete_document_is_untouched() {
        let mut doc = crate::defaults::DEFAULT_CONFIG_TEMPLATE
            .parse::<DocumentMut>()
            .unwrap();
        let mut added = Vec::new();

        migrate_server_section(&mut doc, &mut added).unwrap();
        migrate_uploads_section(&mut doc, &mut added).unwrap();
        migrate_site_section(&mut doc, &mut added).unwrap();

        assert!(added.is_empty(), "unexpected additions: {:?}", added);
    }

    #[test]
    fn test_adds_missing_retry_table() {
        let mut doc = "[uploads]\npublic_dir = \"static\"\n"
            .parse::<DocumentMut>()
            .unwrap();
        let mut added = Vec::new();

        migrate_uploads_section(&mut doc, &mut added).unwrap();

        assert_eq!(doc["uploads"]["public_dir"].as_str(), Some("static"));
        assert_eq!(doc["uploads"]["retry"]["max_attempts"].as_integer(), Some(3));
        assert!(added.contains(&"retry".to_string()));
        assert!(!added.contains(&"public_dir".to_string()));
    }

    #[test]
    fn test_adds_missing_server_fields() {
        let mut doc = "[server]\nhost = \"127.0.0.1\"\nport = 8080\n"
            .parse::<DocumentMut>()
            .unwrap();
        let mut added = Vec::new();

        migrate_server_section(&mut doc, &mut added).unwrap();

        assert_eq!(doc["server"]["port"].as_integer(), Some(8080));
        assert_eq!(doc["server"]["max_concurrent_requests"].as_integer(), Some(1000));
        assert!(added.contains(&"max_concurrent_requests".to_string()));
        assert!(!added.contains(&"port".to_string()));
    }
}

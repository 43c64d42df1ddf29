use serde::Serialize;
use serde_json::Value;

use crate::cli::OutputFormat;
use crate::ui;

pub mod table;

/// Render a serializable response to a string in the requested format.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Table => render_table(value),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Print a serializable response in the requested format.
pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}

fn table_options() -> table::TableOptions {
    let prefs = ui::prefs();
    table::TableOptions {
        max_width: prefs.term_width,
        color: prefs.table_color,
    }
}

fn render_table<T: Serialize>(value: &T) -> anyhow::Result<String> {
    match serde_json::to_value(value)? {
        Value::Array(items) => Ok(render_rows(&items)),
        Value::Object(map) => {
            // A single list field (e.g. `notes`, `checks`) is the interesting
            // part; everything else goes into a key/value block above it.
            let mut scalars = Vec::new();
            let mut lists = Vec::new();
            for (key, value) in map {
                match value {
                    Value::Array(items) => lists.push((key, items)),
                    other => scalars.push(vec![key, value_to_cell(&other)]),
                }
            }

            let mut sections = Vec::new();
            if !scalars.is_empty() {
                sections.push(table::render_table(&["key", "value"], &scalars, table_options()));
            }
            for (key, items) in lists {
                sections.push(format!("{key}:\n{}", render_rows(&items)));
            }
            Ok(sections.join("\n\n"))
        }
        scalar => Ok(table::render_table(
            &["value"],
            &[vec![value_to_cell(&scalar)]],
            table_options(),
        )),
    }
}

fn render_rows(items: &[Value]) -> String {
    if items.is_empty() {
        return String::from("(no rows)");
    }

    if !items.iter().all(Value::is_object) {
        let rows = items
            .iter()
            .map(|item| vec![value_to_cell(item)])
            .collect::<Vec<_>>();
        return table::render_table(&["value"], &rows, table_options());
    }

    // Union of keys across rows; serde_json maps iterate in key order.
    let mut headers = Vec::<String>::new();
    for map in items.iter().filter_map(Value::as_object) {
        for key in map.keys() {
            if !headers.contains(key) {
                headers.push(key.clone());
            }
        }
    }

    let header_refs = headers.iter().map(String::as_str).collect::<Vec<_>>();
    let rows = items
        .iter()
        .filter_map(Value::as_object)
        .map(|map| {
            headers
                .iter()
                .map(|header| map.get(header).map_or_else(|| String::from("-"), value_to_cell))
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();

    table::render_table(&header_refs, &rows, table_options())
}

fn value_to_cell(value: &Value) -> String {
    match value {
        Value::Null => String::from("-"),
        Value::Bool(v) => v.to_string(),
        Value::Number(v) => v.to_string(),
        Value::String(v) => v.replace('\n', " "),
        other => serde_json::to_string(other).unwrap_or_else(|_| String::from("<invalid-json>")),
    }
}

#[cfg(test)]
mod tests {
    use serde::Serialize;

    use super::render;
    use crate::cli::OutputFormat;

    #[derive(Serialize)]
    struct Row {
        title: &'static str,
        date_key: &'static str,
    }

    #[derive(Serialize)]
    struct Summary {
        imported: u32,
        notes: Vec<Row>,
    }

    fn summary() -> Summary {
        Summary {
            imported: 2,
            notes: vec![
                Row {
                    title: "First",
                    date_key: "2025-10-22",
                },
                Row {
                    title: "Second\nline",
                    date_key: "2025-10-23",
                },
            ],
        }
    }

    #[test]
    fn json_render_is_valid_json() {
        let out = render(&summary(), OutputFormat::Json).expect("json render should work");
        let parsed: serde_json::Value = serde_json::from_str(&out).expect("json should parse");
        assert_eq!(parsed["imported"], 2);
        assert_eq!(parsed["notes"][1]["title"], "Second\nline");
    }

    #[test]
    fn raw_render_is_single_line_json() {
        let out = render(&summary(), OutputFormat::Raw).expect("raw render should work");
        assert!(!out.contains('\n'));
    }

    #[test]
    fn table_render_splits_scalars_and_lists() {
        let out = render(&summary(), OutputFormat::Table).expect("table render should work");
        assert!(out.starts_with("key"));
        assert!(out.contains("imported"));
        assert!(out.contains("notes:\ndate_key    title"));
        assert!(out.contains("Second line"));
    }

    #[test]
    fn empty_list_renders_placeholder() {
        let out = render(&Vec::<Row>::new(), OutputFormat::Table).expect("table render should work");
        assert_eq!(out, "(no rows)");
    }
}

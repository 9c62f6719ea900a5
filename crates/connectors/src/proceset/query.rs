//! GraphQL documents sent to the platform.
//!
//! The API takes its arguments inline, so caller text is escaped as a GraphQL
//! string literal before it is spliced into a template. Escaping keeps the
//! document well-formed; it does not make arbitrary SQL safe to run.

use std::borrow::Cow;
use std::fmt::Write;

/// Path segment appended to the base URL.
pub const GRAPHQL_PATH: &str = "graphql";

/// Lists every registered connection, system ClickHouse connection first.
pub const DISCOVERY_QUERY: &str = "query{connection{connections(sorting_column:TYPE, sorting_direction:DESC)\
{items{element{connection{guid}}}}}}";

pub fn extract_data(connection_guid: &str, sql_script: &str) -> String {
    format!(
        "query{{clickhouse{{extract_data(connection_guid:\"{}\", sql_script:\"{}\")}}}}",
        escape_string(connection_guid),
        escape_string(sql_script)
    )
}

pub fn upload_data_table(connection_guid: &str, database_name: &str, table_name: &str) -> String {
    format!(
        "mutation{{clickhouse{{upload_data_table(connection_guid: \"{}\", \
         database_name: \"{}\", table_name: \"{}\")}}}}",
        escape_string(connection_guid),
        escape_string(database_name),
        escape_string(table_name)
    )
}

pub fn execute_script(script_id: i64) -> String {
    format!("mutation{{automation{{script{{execute(id: {script_id}){{id, is_running}}}}}}}}")
}

/// Escapes text for use inside a double-quoted GraphQL string.
pub fn escape_string(value: &str) -> Cow<'_, str> {
    if !value.chars().any(|c| c == '"' || c == '\\' || c.is_control()) {
        return Cow::Borrowed(value);
    }

    let mut out = String::with_capacity(value.len() + 8);
    for ch in value.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{08}' => out.push_str("\\b"),
            '\u{0C}' => out.push_str("\\f"),
            c if c.is_control() => {
                let _ = write!(out, "\\u{:04x}", c as u32);
            }
            c => out.push(c),
        }
    }
    Cow::Owned(out)
}

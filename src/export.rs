//! CSV export of the full log.
//!
//! One row per event, in log order. Multi-value fields are joined with `;`.
//! Not meant to be read back.

use crate::model::Event;

pub const HEADER: &str =
    "id,timestamp,intensity,factors,location,mood,outcome,quantity,copingMethods,notes";

/// Default file name for exports.
pub const DEFAULT_FILE_NAME: &str = "craving-records.csv";

const LIST_SEPARATOR: &str = ";";

/// Renders the log as CSV, header first, rows separated by `\n`.
pub fn to_csv(events: &[Event]) -> String {
    let mut lines = Vec::with_capacity(events.len() + 1);
    lines.push(HEADER.to_string());
    lines.extend(events.iter().map(row));
    lines.join("\n")
}

fn row(event: &Event) -> String {
    let fields = [
        event.id.to_string(),
        event.timestamp.to_string(),
        event.intensity.to_string(),
        quote(&event.factors.join(LIST_SEPARATOR)),
        quote(&event.location),
        quote(&event.mood),
        event.outcome.as_str().to_string(),
        event.quantity.map(|q| q.to_string()).unwrap_or_default(),
        quote(
            &event
                .coping_methods
                .as_deref()
                .unwrap_or_default()
                .join(LIST_SEPARATOR),
        ),
        quote(&event.notes),
    ];
    fields.join(",")
}

/// Quotes a field when it holds a comma, quote or line break.
fn quote(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

//! Parser for JSON Lines agent logs

use std::path::Path;

use serde_json::Value;
use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::types::{EventKind, LogRecord};

/// Read a log file and return every line that decodes and carries an `event_name`.
///
/// Only a failure to read the file is an error. Lines that are not JSON
/// objects, or that have no `event_name`, are dropped.
pub fn parse_log_file(path: impl AsRef<Path>) -> Result<Vec<LogRecord>> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    let events = parse_log_str(&text);
    debug!(path = %path.display(), events = events.len(), "parsed log file");
    Ok(events)
}

/// Parse in-memory log text, one JSON object per line
pub fn parse_log_str(text: &str) -> Vec<LogRecord> {
    let mut events = Vec::new();
    for (line_no, line) in text.lines().enumerate() {
        match decode_line(line, events.len()) {
            Some(record) => events.push(record),
            None => trace!(line = line_no + 1, "skipping line without event"),
        }
    }
    events
}

/// Decode a single line, or `None` if it is not an event record.
///
/// `index` becomes the record's position in the retained sequence.
pub fn decode_line(line: &str, index: usize) -> Option<LogRecord> {
    let Value::Object(fields) = serde_json::from_str::<Value>(line).ok()? else {
        return None;
    };

    let (event_name, kind) = match fields.get("event_name")? {
        Value::String(name) => (name.clone(), EventKind::from_name(name)),
        // Present but not a string: keep it, it just never matches a known kind
        other => (other.to_string(), EventKind::Other),
    };

    Some(LogRecord {
        event_name,
        kind,
        index,
        fields,
    })
}

//! Type definitions for log events and the states they carry

use serde_json::{Map, Value};

use crate::error::{Error, Result};

/// Event name of a message delivered to a participant
pub const RECEIVED_MESSAGE: &str = "received_message";
/// Event name of a reply function invocation
pub const REPLY_FUNC_EXECUTED: &str = "reply_func_executed";

/// The kind of a retained event, decided once when the line is decoded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    ReceivedMessage,
    ReplyExecuted,
    Other,
}

impl EventKind {
    pub fn from_name(name: &str) -> Self {
        match name {
            RECEIVED_MESSAGE => EventKind::ReceivedMessage,
            REPLY_FUNC_EXECUTED => EventKind::ReplyExecuted,
            _ => EventKind::Other,
        }
    }
}

/// One decoded log line that carries an `event_name`.
///
/// Only `event_name` is checked at decode time. Every other field is kept
/// as loose JSON and projected on demand with [`LogRecord::required_str`].
#[derive(Debug, Clone, PartialEq)]
pub struct LogRecord {
    pub event_name: String,
    pub kind: EventKind,
    /// Position of this record among the retained events
    pub index: usize,
    pub fields: Map<String, Value>,
}

impl LogRecord {
    pub fn source_name(&self) -> Result<&str> {
        self.required_str("source_name")
    }

    pub fn json_state(&self) -> Result<&str> {
        self.required_str("json_state")
    }

    /// Look up a top-level string field, failing if it is absent or not a string
    pub fn required_str(&self, field: &str) -> Result<&str> {
        str_field(&self.fields, field, self)
    }

    /// Decode `json_state` into a loose JSON tree
    fn state(&self) -> Result<Map<String, Value>> {
        let raw = self.json_state()?;
        match serde_json::from_str::<Value>(raw) {
            Ok(Value::Object(map)) => Ok(map),
            Ok(_) => Err(Error::InvalidField {
                index: self.index,
                event_name: self.event_name.clone(),
                field: "json_state".to_string(),
                expected: "an encoded JSON object",
            }),
            Err(source) => Err(Error::InvalidState {
                index: self.index,
                event_name: self.event_name.clone(),
                source,
            }),
        }
    }
}

/// State of a `received_message` event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReceivedMessageState {
    pub sender: String,
    pub message: String,
}

impl ReceivedMessageState {
    pub fn from_record(record: &LogRecord) -> Result<Self> {
        let state = record.state()?;
        Ok(Self {
            sender: str_field(&state, "sender", record)?.to_string(),
            message: str_field(&state, "message", record)?.to_string(),
        })
    }
}

/// State of a `reply_func_executed` event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplyExecutedState {
    pub reply_func_name: String,
}

impl ReplyExecutedState {
    pub fn from_record(record: &LogRecord) -> Result<Self> {
        let state = record.state()?;
        Ok(Self {
            reply_func_name: str_field(&state, "reply_func_name", record)?.to_string(),
        })
    }
}

fn str_field<'a>(
    map: &'a Map<String, Value>,
    field: &str,
    record: &LogRecord,
) -> Result<&'a str> {
    match map.get(field) {
        Some(Value::String(s)) => Ok(s),
        Some(_) => Err(Error::InvalidField {
            index: record.index,
            event_name: record.event_name.clone(),
            field: field.to_string(),
            expected: "a string",
        }),
        None => Err(Error::MissingField {
            index: record.index,
            event_name: record.event_name.clone(),
            field: field.to_string(),
        }),
    }
}

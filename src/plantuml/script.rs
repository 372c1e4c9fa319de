//! Sequence diagram script generation

use std::collections::HashSet;

use tracing::debug;

use super::{escape_plantuml, END_MARKER, START_MARKER};
use crate::error::Result;
use crate::types::{EventKind, LogRecord, ReceivedMessageState, ReplyExecutedState};

/// Generate a PlantUML sequence diagram from an ordered event sequence.
///
/// Every event contributes its `source_name` as a participant, whatever its
/// kind. Only `received_message` and `reply_func_executed` produce arrows.
/// A recognized event whose state is malformed aborts generation.
pub fn generate_plantuml_script(events: &[LogRecord]) -> Result<String> {
    let participants = collect_participants(events)?;

    let mut script = String::new();
    script.push_str(START_MARKER);
    script.push('\n');

    for participant in &participants {
        script.push_str(&format!("participant {}\n", participant));
    }

    let mut arrows = 0;
    for event in events {
        match event.kind {
            EventKind::ReceivedMessage => {
                let state = ReceivedMessageState::from_record(event)?;
                script.push_str(&format!(
                    "{} -> {}: {}\n",
                    state.sender,
                    event.source_name()?,
                    escape_plantuml(&state.message)
                ));
            }
            EventKind::ReplyExecuted => {
                let state = ReplyExecutedState::from_record(event)?;
                let source = event.source_name()?;
                script.push_str(&format!(
                    "{} -> {}: {}\n",
                    source,
                    source,
                    escape_plantuml(&state.reply_func_name)
                ));
            }
            EventKind::Other => continue,
        }
        arrows += 1;
    }

    script.push_str(END_MARKER);

    debug!(
        participants = participants.len(),
        arrows,
        events = events.len(),
        "generated sequence diagram"
    );
    Ok(script)
}

/// Unique `source_name` values, in order of first appearance
pub fn collect_participants(events: &[LogRecord]) -> Result<Vec<&str>> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut participants = Vec::new();
    for event in events {
        let name = event.source_name()?;
        if seen.insert(name) {
            participants.push(name);
        }
    }
    Ok(participants)
}

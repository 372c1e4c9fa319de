//! seqtrace - Turn multi-agent JSON logs into PlantUML sequence diagrams
//!
//! Each log line is a JSON object. Lines with an `event_name` are kept;
//! `received_message` events become arrows from the sender to the receiving
//! agent, and `reply_func_executed` events become self-arrows.
//!
//! # Example
//!
//! ```rust
//! let log = concat!(
//!     r#"{"event_name":"received_message","source_name":"B","json_state":"{\"sender\":\"A\",\"message\":\"hi\"}"}"#,
//!     "\n",
//!     r#"{"event_name":"reply_func_executed","source_name":"B","json_state":"{\"reply_func_name\":\"handle\"}"}"#,
//! );
//! let script = seqtrace::render_log(log).unwrap();
//! assert_eq!(script, "@startuml\nparticipant B\nA -> B: hi\nB -> B: handle\n@enduml");
//! ```

pub mod config;
pub mod error;
pub mod parser;
pub mod plantuml;
pub mod render;
pub mod types;

use std::path::{Path, PathBuf};

use tracing::info;

pub use config::Options;
pub use error::{Error, Result};
pub use parser::{decode_line, parse_log_file, parse_log_str};
pub use plantuml::{escape_plantuml, generate_plantuml_script};
pub use render::{RenderOutcome, Renderer};
pub use types::*;

/// Convert in-memory log text straight to a PlantUML script
pub fn render_log(text: &str) -> Result<String> {
    let events = parse_log_str(text);
    generate_plantuml_script(&events)
}

/// What a completed run produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub events: usize,
    pub script: String,
    pub script_path: PathBuf,
    /// `None` when rendering was skipped
    pub image: Option<(PathBuf, RenderOutcome)>,
}

/// Parse `input`, write the script, then render it if the options ask for it
pub fn run(input: impl AsRef<Path>, options: &Options) -> Result<RunSummary> {
    let events = parse_log_file(input)?;
    let script = generate_plantuml_script(&events)?;

    save_script(&script, &options.output_script)?;
    info!(path = %options.output_script.display(), "saved PlantUML script");

    let image = match options.renderer() {
        Some(renderer) => {
            let outcome = renderer.render(&script, &options.output_script, &options.output_image)?;
            Some((options.output_image.clone(), outcome))
        }
        None => None,
    };

    Ok(RunSummary {
        events: events.len(),
        script,
        script_path: options.output_script.clone(),
        image,
    })
}

/// Write a script to disk
pub fn save_script(script: &str, path: &Path) -> Result<()> {
    std::fs::write(path, script).map_err(|e| Error::io(path, e))
}

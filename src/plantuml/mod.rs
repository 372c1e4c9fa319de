//! PlantUML sequence diagram output
//!
//! - escape: text escaping for message labels
//! - script: event sequence to `@startuml ... @enduml` text

mod escape;
mod script;

pub use escape::escape_plantuml;
pub use script::{collect_participants, generate_plantuml_script};

pub const START_MARKER: &str = "@startuml";
pub const END_MARKER: &str = "@enduml";

//! Run configuration for the log-to-diagram pipeline

use std::path::PathBuf;

use crate::render::{Renderer, DEFAULT_PLANTUML_BIN, DEFAULT_SERVER_URL};

pub const DEFAULT_OUTPUT_SCRIPT: &str = "sequence_diagram.puml";
pub const DEFAULT_OUTPUT_IMAGE: &str = "sequence_diagram.png";

/// Options for a single run
#[derive(Debug, Clone)]
pub struct Options {
    /// Where the PlantUML script is written. Default: sequence_diagram.puml
    pub output_script: PathBuf,
    /// Where the rendered image is written. Default: sequence_diagram.png
    pub output_image: PathBuf,
    /// Only write the script, do not render. Default: false
    pub skip_image: bool,
    /// Render with a local binary instead of a PlantUML server. Default: false
    pub use_local_renderer: bool,
    /// Local renderer binary. Default: plantuml
    pub plantuml_bin: String,
    /// PlantUML server image endpoint. Default: http://www.plantuml.com/plantuml/img/
    pub server_url: String,
}

impl Options {
    /// The render sink these options select, or `None` when rendering is skipped
    pub fn renderer(&self) -> Option<Renderer> {
        if self.skip_image {
            None
        } else if self.use_local_renderer {
            Some(Renderer::Local {
                binary: self.plantuml_bin.clone(),
            })
        } else {
            Some(Renderer::Remote {
                server_url: self.server_url.clone(),
            })
        }
    }
}

impl Default for Options {
    fn default() -> Self {
        Self {
            output_script: PathBuf::from(DEFAULT_OUTPUT_SCRIPT),
            output_image: PathBuf::from(DEFAULT_OUTPUT_IMAGE),
            skip_image: false,
            use_local_renderer: false,
            plantuml_bin: DEFAULT_PLANTUML_BIN.to_string(),
            server_url: DEFAULT_SERVER_URL.to_string(),
        }
    }
}

//! Render sinks that turn a PlantUML script into an image
//!
//! - Local: run a `plantuml` binary on the saved script file
//! - Remote: fetch the image from a PlantUML server

mod local;
mod remote;

use std::path::Path;

use crate::error::Result;

pub use local::render_local;
pub use remote::{encode_plantuml, render_remote};

pub const DEFAULT_PLANTUML_BIN: &str = "plantuml";
pub const DEFAULT_SERVER_URL: &str = "http://www.plantuml.com/plantuml/img/";

/// Shown when the local renderer is not installed
pub const RENDERER_MISSING_MESSAGE: &str =
    "PlantUML is not installed locally. Please install PlantUML or use the remote option.";

/// Where the image gets rendered
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Renderer {
    Local { binary: String },
    Remote { server_url: String },
}

/// What a render attempt produced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderOutcome {
    Rendered,
    /// The local binary could not be found; nothing was rendered
    RendererMissing,
}

impl Renderer {
    /// Render `script` (already saved at `script_path`) into `image_path`
    pub fn render(
        &self,
        script: &str,
        script_path: &Path,
        image_path: &Path,
    ) -> Result<RenderOutcome> {
        match self {
            Renderer::Local { binary } => render_local(binary, script_path, image_path),
            Renderer::Remote { server_url } => {
                render_remote(server_url, script, image_path)?;
                Ok(RenderOutcome::Rendered)
            }
        }
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Renderer::Remote {
            server_url: DEFAULT_SERVER_URL.to_string(),
        }
    }
}

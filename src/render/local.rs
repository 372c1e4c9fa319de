use std::io::ErrorKind;
use std::path::Path;
use std::process::Command;

use tracing::{info, warn};

use super::{RenderOutcome, RENDERER_MISSING_MESSAGE};
use crate::error::{Error, Result};

/// Run `<binary> <script_path> -o <image_path>`.
///
/// A missing binary is reported to the user and is not an error. A non-zero
/// exit status is logged and otherwise ignored.
pub fn render_local(
    binary: &str,
    script_path: &Path,
    image_path: &Path,
) -> Result<RenderOutcome> {
    info!(binary, script = %script_path.display(), "rendering with local PlantUML");

    let status = Command::new(binary)
        .arg(script_path)
        .arg("-o")
        .arg(image_path)
        .status();

    match status {
        Ok(status) => {
            if !status.success() {
                warn!(binary, %status, "local renderer exited unsuccessfully");
            }
            Ok(RenderOutcome::Rendered)
        }
        Err(e) if e.kind() == ErrorKind::NotFound => {
            warn!(binary, "local renderer not found");
            println!("{}", RENDERER_MISSING_MESSAGE);
            Ok(RenderOutcome::RendererMissing)
        }
        Err(source) => Err(Error::Spawn {
            binary: binary.to_string(),
            source,
        }),
    }
}

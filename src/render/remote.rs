use std::io::Write;
use std::path::Path;

use base64::alphabet::Alphabet;
use base64::engine::general_purpose::{GeneralPurpose, NO_PAD};
use base64::Engine;
use flate2::write::DeflateEncoder;
use flate2::Compression;
use tracing::info;

use crate::error::{Error, Result};

const PLANTUML_ALPHABET: &str =
    "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz-_";

const PLANTUML_BASE64: Alphabet = match Alphabet::new(PLANTUML_ALPHABET) {
    Ok(alphabet) => alphabet,
    Err(_) => panic!("invalid PlantUML base64 alphabet"),
};

const PLANTUML_ENGINE: GeneralPurpose = GeneralPurpose::new(&PLANTUML_BASE64, NO_PAD);

/// Encode a script the way PlantUML server URLs expect it:
/// raw DEFLATE, then base64 over PlantUML's own alphabet.
pub fn encode_plantuml(script: &str) -> Result<String> {
    let mut encoder = DeflateEncoder::new(Vec::new(), Compression::best());
    encoder.write_all(script.as_bytes()).map_err(Error::Encode)?;
    let compressed = encoder.finish().map_err(Error::Encode)?;
    Ok(PLANTUML_ENGINE.encode(compressed))
}

/// Fetch the rendered image for `script` and write it to `image_path`
pub fn render_remote(server_url: &str, script: &str, image_path: &Path) -> Result<()> {
    let url = format!("{}{}", server_url, encode_plantuml(script)?);
    info!(server = server_url, "rendering with remote PlantUML server");

    let response = reqwest::blocking::get(url)?.error_for_status()?;
    let bytes = response.bytes()?;

    std::fs::write(image_path, &bytes).map_err(|e| Error::io(image_path, e))?;
    info!(image = %image_path.display(), bytes = bytes.len(), "saved rendered image");
    Ok(())
}

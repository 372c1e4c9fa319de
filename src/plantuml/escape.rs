/// Escape characters that break a PlantUML message label.
///
/// Each rule is a separate pass over the previous result, so a quote turns
/// into `\\"` once the backslash pass sees the `\"` it produced.
pub fn escape_plantuml(text: &str) -> String {
    text.replace('"', "\\\"")
        .replace('\\', "\\\\")
        .replace('\n', "\\n")
        .replace('\r', "\\r")
        .replace('\'', "\\'")
}

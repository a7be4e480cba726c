/// Canonical form of a console line: surrounding whitespace dropped,
/// everything lowercased.
pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

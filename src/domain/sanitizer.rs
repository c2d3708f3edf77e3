use regex::Regex;
use std::sync::OnceLock;

fn disallowed_chars() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[^a-zA-Z, ]").expect("static pattern"))
}

/// Cleans free-text ingredient input into a search query.
///
/// Only ASCII letters, commas and spaces survive, the result is lowercased and
/// the comma-separated segments are re-joined with a single comma. Spaces inside
/// segments and empty segments are kept as they are.
pub fn sanitize(raw: &str) -> String {
    let cleaned = disallowed_chars().replace_all(raw, "").to_lowercase();
    cleaned.split(',').collect::<Vec<_>>().join(",")
}

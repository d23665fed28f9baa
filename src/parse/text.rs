use std::{borrow::Cow, sync::OnceLock};

use regex::Regex;

pub fn remove_excess_whitespace(s: &str) -> Cow<'_, str> {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| Regex::new(r"\s\s+").expect("regex should be valid"));
    Regex::replace_all(re, s, " ")
}

/// Flattens an HTML snippet to its visible text: tags become spaces, runs of
/// whitespace collapse, ends are trimmed.
pub fn strip_tags(html: &str) -> String {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| Regex::new(r"<[^>]*>").expect("regex should be valid"));
    let without_tags = re.replace_all(html, " ");
    remove_excess_whitespace(&without_tags).trim().to_string()
}

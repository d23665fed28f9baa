use std::collections::BTreeSet;
use std::sync::OnceLock;

use regex::Regex;

// Longer parenthesized fragments are prose ("(mit Soße)"), not label codes.
const MAX_CODE_LEN: usize = 5;

/// Collects dietary label codes from two independent sources: parenthetical
/// groups inside the dish text and the dedicated comma-separated tag field.
/// Codes are trimmed, uppercased and deduplicated; the result is sorted so
/// repeated parses serialize identically.
pub fn collect_labels(dish_text: &str, tag_field: &str) -> Vec<String> {
    static PAREN_RE: OnceLock<Regex> = OnceLock::new();
    let re = PAREN_RE.get_or_init(|| Regex::new(r"\(([^()]*)\)").expect("regex should be valid"));

    let mut codes = BTreeSet::new();
    for group in re.captures_iter(dish_text) {
        for code in group[1].split(',') {
            let code = code.trim();
            if !code.is_empty() && code.chars().count() <= MAX_CODE_LEN {
                codes.insert(code.to_uppercase());
            }
        }
    }
    for code in tag_field.split(',') {
        let code = code.trim();
        if !code.is_empty() {
            codes.insert(code.to_uppercase());
        }
    }
    codes.into_iter().collect()
}

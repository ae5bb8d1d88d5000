use lazy_static::lazy_static;
use regex::Regex;

use crate::mappings::CHANNEL_NAMES;

struct NameRule {
    key: &'static str,
    pattern: Regex,
    replacement: &'static str,
}

lazy_static! {
    static ref RE_ANNOTATIONS: Regex = Regex::new(r"\([^)]*\)|\[[^\]]*\]").unwrap();
    static ref NAME_RULES: Vec<NameRule> = CHANNEL_NAMES
        .iter()
        .map(|&(key, replacement)| NameRule {
            key,
            pattern: Regex::new(&format!(r"(?i)\b{}\b", regex::escape(key))).unwrap(),
            replacement,
        })
        .collect();
}

/// Drops `(...)`/`[...]` annotations and applies at most one canonical name
/// rule, scanning rules in declared order.
pub fn normalize_name(name: &str) -> String {
    let cleaned = RE_ANNOTATIONS.replace_all(name, "");
    let cleaned = cleaned.trim();

    for rule in NAME_RULES.iter() {
        if let Some(m) = rule.pattern.find(cleaned) {
            if cleaned.to_lowercase() == rule.key.to_lowercase() {
                return rule.replacement.to_string();
            }
            let mut out = String::with_capacity(cleaned.len() + rule.replacement.len());
            out.push_str(&cleaned[..m.start()]);
            out.push_str(rule.replacement);
            out.push_str(&cleaned[m.end()..]);
            return out;
        }
    }

    cleaned.to_string()
}

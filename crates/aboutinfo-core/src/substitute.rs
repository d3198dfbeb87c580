//! Localized lookup plus `{i}` placeholder expansion.
//!
//! A raw value from the about file is either literal text or a key into the
//! localization bundle. Whichever wins becomes the template, and `{i}` is then
//! replaced with the i-th mapping. Placeholders without a mapping (index out
//! of range, not a plain decimal, or no closing brace) stay as literal text.

use crate::bundle::Bundle;
use crate::mappings::MappingTable;

/// Resolve `raw` against `bundle` and expand placeholders from `mappings`.
pub fn substitute(
    raw: Option<&str>,
    bundle: Option<&Bundle>,
    mappings: &MappingTable,
) -> Option<String> {
    let raw = raw?;
    let template = bundle.and_then(|b| b.get(raw)).unwrap_or(raw);
    Some(expand(template, mappings))
}

/// Replace each in-range `{i}`. Replacement text is not rescanned.
pub fn expand(template: &str, mappings: &MappingTable) -> String {
    if mappings.is_empty() {
        return template.to_string();
    }
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let Some(close) = after.find('}') else {
            out.push_str(&rest[open..]);
            return out;
        };
        match placeholder_index(&after[..close]).and_then(|i| mappings.get(i)) {
            Some(value) => {
                out.push_str(value);
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}

fn placeholder_index(inner: &str) -> Option<usize> {
    if inner.is_empty() || !inner.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    inner.parse().ok()
}

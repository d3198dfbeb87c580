//! Properties-text reader.
//!
//! Logical lines may continue with a trailing unescaped backslash. Keys end at
//! the first unescaped `=`, `:` or whitespace. Comment lines start with `#` or `!`.

use crate::error::BundleError;

fn is_ws(c: char) -> bool {
    c == ' ' || c == '\t' || c == '\x0c'
}

/// Decode bytes as UTF-8, falling back to ISO-8859-1 when they are not valid UTF-8.
pub fn decode(bytes: &[u8]) -> String {
    match std::str::from_utf8(bytes) {
        Ok(s) => s.to_string(),
        Err(_) => bytes.iter().map(|&b| char::from(b)).collect(),
    }
}

/// Physical lines, each ended by `\n`, `\r\n` or a lone `\r`.
fn physical_lines(text: &str) -> impl Iterator<Item = &str> {
    let mut rest = text;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        let end = rest.find(['\n', '\r']).unwrap_or(rest.len());
        let (line, tail) = rest.split_at(end);
        rest = tail
            .strip_prefix("\r\n")
            .or_else(|| tail.strip_prefix(['\n', '\r']))
            .unwrap_or(tail);
        Some(line)
    })
}

/// Parse properties text into `(key, value)` pairs in file order.
pub fn parse_entries(text: &str) -> Result<Vec<(String, String)>, BundleError> {
    let mut entries = Vec::new();
    let mut lines = physical_lines(text).enumerate();
    while let Some((idx, line)) = lines.next() {
        let first = line.trim_start_matches(is_ws);
        if first.is_empty() || first.starts_with('#') || first.starts_with('!') {
            continue;
        }
        let mut logical = String::new();
        let mut current = first;
        loop {
            if !continues(current) {
                logical.push_str(current);
                break;
            }
            logical.push_str(&current[..current.len() - 1]);
            match lines.next() {
                Some((_, next)) => current = next.trim_start_matches(is_ws),
                None => break,
            }
        }
        entries.push(split_entry(&logical, idx + 1)?);
    }
    Ok(entries)
}

/// Odd number of trailing backslashes.
fn continues(line: &str) -> bool {
    line.chars().rev().take_while(|&c| c == '\\').count() % 2 == 1
}

fn split_entry(logical: &str, line: usize) -> Result<(String, String), BundleError> {
    let mut key_end = logical.len();
    let mut escaped = false;
    for (i, c) in logical.char_indices() {
        if escaped {
            escaped = false;
        } else if c == '\\' {
            escaped = true;
        } else if c == '=' || c == ':' || is_ws(c) {
            key_end = i;
            break;
        }
    }
    let rest = logical[key_end..].trim_start_matches(is_ws);
    let rest = rest
        .strip_prefix(['=', ':'])
        .map(|r| r.trim_start_matches(is_ws))
        .unwrap_or(rest);
    Ok((
        unescape(&logical[..key_end], line)?,
        unescape(rest, line)?,
    ))
}

fn unescape(raw: &str, line: usize) -> Result<String, BundleError> {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('t') => out.push('\t'),
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('f') => out.push('\x0c'),
            Some('u') => {
                let unit = hex_unit(&mut chars, line)?;
                if (0xD800..0xDC00).contains(&unit) {
                    let mut ahead = chars.clone();
                    let low = match (ahead.next(), ahead.next()) {
                        (Some('\\'), Some('u')) => hex_unit(&mut ahead, line).ok(),
                        _ => None,
                    };
                    match low.filter(|l| (0xDC00..0xE000).contains(l)) {
                        Some(low) => {
                            chars = ahead;
                            let cp = 0x10000 + ((unit - 0xD800) << 10) + (low - 0xDC00);
                            out.push(char::from_u32(cp).unwrap_or(char::REPLACEMENT_CHARACTER));
                        }
                        None => out.push(char::REPLACEMENT_CHARACTER),
                    }
                } else {
                    out.push(char::from_u32(unit).unwrap_or(char::REPLACEMENT_CHARACTER));
                }
            }
            Some(other) => out.push(other),
            None => {}
        }
    }
    Ok(out)
}

fn hex_unit<I: Iterator<Item = char>>(chars: &mut I, line: usize) -> Result<u32, BundleError> {
    let digits: String = chars.take(4).collect();
    if digits.len() != 4 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(BundleError::Malformed {
            line,
            reason: format!("malformed \\uxxxx encoding: \\u{digits}"),
        });
    }
    u32::from_str_radix(&digits, 16).map_err(|e| BundleError::Malformed {
        line,
        reason: e.to_string(),
    })
}

//! Locale model and the `$nl$` search order derived from it.

use std::env;
use std::fmt;

/// Language plus optional country, e.g. `fr` / `CA`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locale {
    pub language: String,
    pub country: Option<String>,
}

impl Locale {
    /// Parse POSIX-style (`fr_CA.UTF-8@euro`) or BCP-47-ish (`fr-CA`) names.
    ///
    /// Returns `None` for empty input and for the `C` / `POSIX` locales.
    pub fn parse(s: &str) -> Option<Self> {
        let base = s.split(['.', '@']).next().unwrap_or("").trim();
        if base.is_empty() || base == "C" || base == "POSIX" {
            return None;
        }
        let mut parts = base.split(['_', '-']);
        let language = parts.next()?.to_ascii_lowercase();
        if language.is_empty() || !language.chars().all(|c| c.is_ascii_alphabetic()) {
            return None;
        }
        let country = parts
            .next()
            .filter(|c| !c.is_empty())
            .map(|c| c.to_ascii_uppercase());
        Some(Locale { language, country })
    }

    /// First usable locale among `LC_ALL`, `LC_MESSAGES`, `LANG`.
    pub fn from_env() -> Option<Self> {
        ["LC_ALL", "LC_MESSAGES", "LANG"]
            .iter()
            .filter_map(|var| env::var(var).ok())
            .find(|v| !v.is_empty())
            .and_then(|v| Locale::parse(&v))
    }

    /// Relative directory prefixes searched for `$nl$`, most specific first.
    /// The empty prefix (install root) is always last.
    pub fn nl_prefixes(locale: Option<&Locale>) -> Vec<String> {
        let mut prefixes = Vec::with_capacity(3);
        if let Some(l) = locale {
            if let Some(country) = &l.country {
                prefixes.push(format!("nl/{}/{}", l.language, country));
            }
            prefixes.push(format!("nl/{}", l.language));
        }
        prefixes.push(String::new());
        prefixes
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.country {
            Some(c) => write!(f, "{}_{}", self.language, c),
            None => f.write_str(&self.language),
        }
    }
}

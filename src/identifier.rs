//! Specification names and their generated forms.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::fmt;

static VALID_IDENTIFIER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-z_][a-z0-9_]*$").expect("identifier regex should be valid")
});

/// Name of an attribute, block or schema as written in the specification.
///
/// The original key is kept verbatim so it can always be recovered for
/// serialization tags; the capitalized forms are derived on demand.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Identifier(String);

impl Identifier {
    pub fn new(name: impl Into<String>) -> Self {
        Identifier(name.into())
    }

    /// The original lookup key.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `user_profile_id` → `UserProfileId`
    pub fn to_pascal_case(&self) -> String {
        to_pascal_case(&self.0)
    }

    /// `user_profile_id` → `userProfileId`
    pub fn to_camel_case(&self) -> String {
        let pascal = self.to_pascal_case();
        let mut chars = pascal.chars();
        match chars.next() {
            Some(first) => first.to_lowercase().collect::<String>() + chars.as_str(),
            None => String::new(),
        }
    }

    /// The key as a double-quoted Go string literal.
    pub fn quoted(&self) -> String {
        quote(&self.0)
    }

    /// Lower snake case names are the only ones the framework accepts as schema keys.
    pub fn is_valid(&self) -> bool {
        VALID_IDENTIFIER.is_match(&self.0)
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Identifier {
    fn from(value: &str) -> Self {
        Identifier::new(value)
    }
}

/// Convert a snake_case string to PascalCase.
///
/// Empty segments produced by leading, trailing or repeated underscores are dropped.
pub fn to_pascal_case(s: &str) -> String {
    s.split('_')
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect()
}

/// Quote a string as a Go interpreted string literal.
///
/// Quotes, backslashes and control characters are escaped the way Go's `%q`
/// verb escapes them. Other code points are written as-is, including the
/// non-printable ones `%q` would escape (format and unassigned characters).
pub(crate) fn quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '\r' => out.push_str("\\r"),
            '\u{07}' => out.push_str("\\a"),
            '\u{08}' => out.push_str("\\b"),
            '\u{0c}' => out.push_str("\\f"),
            '\u{0b}' => out.push_str("\\v"),
            c if c.is_control() && (c as u32) < 0x80 => {
                out.push_str(&format!("\\x{:02x}", c as u32));
            }
            c if c.is_control() => out.push_str(&format!("\\u{:04x}", c as u32)),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

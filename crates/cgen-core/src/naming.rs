//! Component name validation and case conversion.
//!
//! A component name is accepted only in camelCase (`^[a-z][a-zA-Z0-9]*$`).
//! Rejected names get a best-effort camelCase suggestion, and accepted names
//! map to a dash-case folder name.

use std::fmt;

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::error::NameError;

static CAMEL_CASE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z][a-zA-Z0-9]*$").expect("camelCase pattern"));

static SEPARATOR_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[-_\s]+(.)?").expect("separator pattern"));

static WORD_BOUNDARY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([a-z])([A-Z])").expect("word boundary pattern"));

/// Check a raw component name, returning it unchanged when it is camelCase.
pub fn validate(name: &str) -> Result<String, NameError> {
    if name.is_empty() {
        return Err(NameError::Missing);
    }

    if !CAMEL_CASE.is_match(name) {
        return Err(NameError::NotCamelCase {
            suggestion: to_camel_case(name),
        });
    }

    Ok(name.to_string())
}

/// Convert `user-profile`, `user_profile` or `UserProfile` to `userProfile`.
///
/// Only separators and a leading capital are handled; digits and other
/// punctuation pass through, so the result is not guaranteed to validate.
pub fn to_camel_case(s: &str) -> String {
    let joined = SEPARATOR_RUN.replace_all(s, |caps: &Captures<'_>| {
        caps.get(1)
            .map(|m| m.as_str().to_uppercase())
            .unwrap_or_default()
    });

    let mut chars = joined.chars();
    match chars.next() {
        Some(first) if first.is_ascii_uppercase() => {
            let mut result = String::with_capacity(joined.len());
            result.push(first.to_ascii_lowercase());
            result.push_str(chars.as_str());
            result
        }
        _ => joined.into_owned(),
    }
}

/// Convert `userProfile` to `user-profile`.
pub fn to_dash_case(s: &str) -> String {
    WORD_BOUNDARY.replace_all(s, "$1-$2").to_lowercase()
}

/// A component name known to be camelCase.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ComponentName(String);

impl ComponentName {
    pub fn parse(raw: &str) -> Result<Self, NameError> {
        validate(raw).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Name of the directory the component is generated into.
    pub fn folder_name(&self) -> String {
        to_dash_case(&self.0)
    }
}

impl fmt::Display for ComponentName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

//! Naming-convention decoders for composite identifier strings.
//!
//! Production column names pack several facts into one identifier, e.g.
//! `WOPR:OP_1` carries a rate category and the group it is measured on. The
//! two decoders here pull those facts back out as ordered, de-duplicated
//! token lists; decoding never mutates its input and is idempotent.

use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

/// Trailing character marking the historical variant of a category.
const HISTORY_MARKER: char = 'H';

/// Shape of a group-carrying identifier: a `W` prefix, one non-separator
/// run, one separator character, then the group name.
static GROUP_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^W[^:]+.(.*)").unwrap());

/// Decoding rule selecting which convention to apply
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeRule {
    /// Category before the first `:`, minus its leading qualifier character
    /// and any trailing history marker; date/time columns are skipped.
    CategoryPrefix,
    /// Group name after the separator in `W`-prefixed identifiers;
    /// non-matching names are skipped silently.
    GroupSuffix,
}

/// Error for an unrecognized rule selector
#[derive(Debug, Error)]
#[error("'{given}' is not a valid decode rule, choose among [category-prefix, group-suffix]")]
pub struct UnknownRuleError {
    pub given: String,
}

impl FromStr for DecodeRule {
    type Err = UnknownRuleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "category-prefix" => Ok(Self::CategoryPrefix),
            "group-suffix" => Ok(Self::GroupSuffix),
            other => Err(UnknownRuleError { given: other.to_string() }),
        }
    }
}

/// Decode composite identifiers into category tokens.
///
/// Tokens are unique and keep the order of their first occurrence.
#[must_use]
pub fn decode(names: &[String], rule: DecodeRule) -> Vec<String> {
    match rule {
        DecodeRule::CategoryPrefix => decode_category_prefix(names),
        DecodeRule::GroupSuffix => decode_group_suffix(names),
    }
}

fn push_unique(tokens: &mut Vec<String>, token: String) {
    if !tokens.contains(&token) {
        tokens.push(token);
    }
}

fn decode_category_prefix(names: &[String]) -> Vec<String> {
    let mut tokens = Vec::new();
    for name in names {
        let lowered = name.to_lowercase();
        if lowered.starts_with("date") || lowered.starts_with("time") {
            continue;
        }
        let prefix = name.split_once(':').map_or(name.as_str(), |(head, _)| head);
        let mut token: String = prefix.chars().skip(1).collect();
        if token.ends_with(HISTORY_MARKER) {
            token.pop();
        }
        push_unique(&mut tokens, token);
    }
    tokens
}

fn decode_group_suffix(names: &[String]) -> Vec<String> {
    let mut tokens = Vec::new();
    for name in names {
        match GROUP_SHAPE.captures(name) {
            Some(caps) => {
                if let Some(rest) = caps.get(1) {
                    push_unique(&mut tokens, rest.as_str().to_string());
                }
            }
            None => log::debug!("{name} does not match the group shape"),
        }
    }
    tokens
}

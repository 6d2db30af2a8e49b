//! Vector literals: `[e0; e1; e2]`.

use crate::codec::{Decode, Encode, Shape};
use crate::error::{ConfigError, Result};
use std::any::type_name;

/// Split `raw` at any character of `separators`, trimming each token and
/// dropping empty ones.
pub(crate) fn tokenize(raw: &str, separators: &str) -> Vec<String> {
    raw.split(|c: char| separators.contains(c))
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

/// Strip the brackets of a literal. `Ok(None)` for an unbracketed value,
/// `MalformedVectorLiteral` if only one bracket is present.
pub(super) fn strip_brackets(raw: &str) -> Result<Option<&str>> {
    let trimmed = raw.trim();
    let opens = trimmed.starts_with('[');
    let closes = trimmed.ends_with(']');
    match (opens, closes) {
        (true, true) if trimmed.len() >= 2 => Ok(Some(&trimmed[1..trimmed.len() - 1])),
        (false, false) => Ok(None),
        _ => Err(ConfigError::MalformedVectorLiteral {
            literal: raw.to_string(),
        }),
    }
}

/// Split `inner` at top-level occurrences of `is_separator`, ignoring
/// separators nested inside brackets.
fn split_top_level(inner: &str, is_separator: impl Fn(char) -> bool) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    for (i, c) in inner.char_indices() {
        match c {
            '[' => depth += 1,
            ']' => depth = depth.saturating_sub(1),
            c if depth == 0 && is_separator(c) => {
                parts.push(&inner[start..i]);
                start = i + c.len_utf8();
            }
            _ => {}
        }
    }
    parts.push(&inner[start..]);
    parts
}

/// Entry tokens of a vector literal, cut to `size` entries if requested.
///
/// Entries are separated by top-level `;`. A trailing `;` closes the last
/// entry, so `[a b;]` is the single entry `a b` and `[;]` a single empty
/// entry. A literal without any top-level `;` is split at whitespace
/// instead (`[0 1]`). An unbracketed value is a single entry, repeated
/// `size` times when a size is requested.
fn vector_tokens(raw: &str, size: usize) -> Result<Vec<String>> {
    let Some(inner) = strip_brackets(raw)? else {
        let entry = raw.trim().to_string();
        return Ok(match size {
            0 if entry.is_empty() => Vec::new(),
            0 => vec![entry],
            n => vec![entry; n],
        });
    };

    let mut parts = split_top_level(inner, |c| c == ';');
    let mut tokens: Vec<String> = if parts.len() > 1 {
        if parts.last().is_some_and(|last| last.trim().is_empty()) {
            parts.pop();
        }
        parts.into_iter().map(|part| part.trim().to_string()).collect()
    } else {
        split_top_level(inner, char::is_whitespace)
            .into_iter()
            .filter(|part| !part.is_empty())
            .map(str::to_string)
            .collect()
    };

    if size > 0 {
        if tokens.len() < size {
            return Err(ConfigError::parse(
                raw,
                "vector",
                format!("expected at least {} entries, found {}", size, tokens.len()),
            ));
        }
        tokens.truncate(size);
    }
    Ok(tokens)
}

impl<T: Encode> Encode for Vec<T> {
    fn encode(&self) -> String {
        self.as_slice().encode()
    }
}

impl<T: Encode> Encode for [T] {
    fn encode(&self) -> String {
        let entries: Vec<String> = self.iter().map(Encode::encode).collect();
        // a lone entry or an empty last entry needs the closing `;`
        let closing = match entries.last() {
            Some(last) if entries.len() == 1 || last.is_empty() => ";",
            _ => "",
        };
        format!("[{}{}]", entries.join("; "), closing)
    }
}

impl<T: Decode> Decode for Vec<T> {
    fn decode(raw: &str, shape: Shape) -> Result<Self> {
        vector_tokens(raw, shape.size)?
            .iter()
            .map(|token| T::decode(token, Shape::any()))
            .collect()
    }
}

impl<T: Encode, const N: usize> Encode for [T; N] {
    fn encode(&self) -> String {
        self.as_slice().encode()
    }
}

impl<T: Decode, const N: usize> Decode for [T; N] {
    fn decode(raw: &str, shape: Shape) -> Result<Self> {
        if shape.size != 0 && shape.size != N {
            return Err(ConfigError::parse(
                raw,
                type_name::<Self>(),
                format!("requested size {} does not match fixed size {}", shape.size, N),
            ));
        }
        let entries: Vec<T> = Vec::decode(raw, Shape::vector(N))?;
        entries.try_into().map_err(|_| {
            ConfigError::parse(raw, type_name::<Self>(), format!("expected {} entries", N))
        })
    }
}

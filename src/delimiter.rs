// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use crate::error::{Result, ShapeError};

/// Opening and closing delimiter of a pattern literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Delimiters {
    pub opener: char,
    pub closer: char,
}

impl Delimiters {
    /// Derive the delimiter pair from the first character of a literal.
    pub fn from_opener(opener: char) -> Self {
        let closer = match opener {
            '(' => ')',
            '{' => '}',
            '[' => ']',
            _ => opener,
        };
        Self { opener, closer }
    }

    /// Bracket style delimiters close with a different character.
    pub fn is_bracket(&self) -> bool {
        self.opener != self.closer
    }
}

// Same set of characters PHP's trim() removes.
fn is_trimmed(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r' | '\0' | '\x0B')
}

/// Extracts everything between the pattern delimiters of `literal`.
///
/// The closing delimiter is the last occurrence of the closer, so modifiers
/// after it (`/abc/i`) are dropped. With same-character delimiters an escaped
/// delimiter (`\/` in `/x\/y/`) is unescaped.
pub fn strip_delimiters(literal: &str) -> Result<String> {
    let literal = literal.trim_matches(is_trimmed);

    let Some(opener) = literal.chars().next() else {
        return Err(ShapeError::DelimiterMismatch {
            opener: String::new(),
            literal: literal.to_string(),
        });
    };
    let delimiters = Delimiters::from_opener(opener);

    let start = opener.len_utf8();
    let end = match literal.rfind(delimiters.closer) {
        Some(end) if end >= start => end,
        _ => {
            return Err(ShapeError::DelimiterMismatch {
                opener: opener.to_string(),
                literal: literal.to_string(),
            })
        }
    };

    let inner = &literal[start..end];
    if delimiters.is_bracket() {
        return Ok(inner.to_string());
    }

    let delimiter = opener.to_string();
    Ok(inner.replace(&format!("\\{delimiter}"), &delimiter))
}

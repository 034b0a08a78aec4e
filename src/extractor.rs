// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Heuristic recovery of capture group numbering from pattern text.
//!
//! Groups are recognized purely by `(`, `)` and `\`. Character classes,
//! alternation and `(?...)` groups are not modelled; patterns using them are
//! either rejected outright or caught by the length check after the scan.

use crate::delimiter::strip_delimiters;
use crate::error::{Result, ShapeError};

use serde::{Deserialize, Serialize};

/// Index of a capture group. 0 is the whole match.
pub type GroupKey = u32;

/// Ordered capture group keys, whole match first.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(try_from = "Vec<GroupKey>", into = "Vec<GroupKey>")]
pub struct GroupKeys(Vec<GroupKey>);

impl GroupKeys {
    pub fn as_slice(&self) -> &[GroupKey] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false for keys produced by the extractor since group 0 exists.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = GroupKey> + '_ {
        self.0.iter().copied()
    }

    /// Number of explicit capture groups, excluding the whole match.
    pub fn group_count(&self) -> usize {
        self.0.len().saturating_sub(1)
    }
}

impl From<GroupKeys> for Vec<GroupKey> {
    fn from(keys: GroupKeys) -> Self {
        keys.0
    }
}

impl TryFrom<Vec<GroupKey>> for GroupKeys {
    type Error = ShapeError;

    /// Accepts only `0, 1, ..., n`, the numbering the extractor produces.
    fn try_from(keys: Vec<GroupKey>) -> Result<Self> {
        let contiguous = keys
            .iter()
            .enumerate()
            .all(|(idx, key)| *key as usize == idx);
        if keys.is_empty() || !contiguous {
            return Err(ShapeError::InvalidGroupKeys { keys });
        }
        Ok(GroupKeys(keys))
    }
}

const GROUP_CLOSE: u8 = b')';

/// PCRE rejects patterns with parentheses nested deeper than this.
pub const MAX_NESTING_DEPTH: usize = 250;

struct GroupScanner<'a> {
    // Inner pattern followed by the synthetic closer of group 0.
    pattern: &'a [u8],
    source: &'a str,
    offset: usize,
    depth: usize,
    keys: Vec<GroupKey>,
}

impl<'a> GroupScanner<'a> {
    fn new(pattern: &'a [u8], source: &'a str) -> Self {
        Self {
            pattern,
            source,
            offset: 0,
            depth: 0,
            keys: vec![],
        }
    }

    fn scan_group(&mut self) -> Result<()> {
        let key = self.keys.len() as GroupKey;
        self.keys.push(key);

        if self.pattern.get(self.offset) == Some(&b'?') {
            return Err(ShapeError::UnsupportedConstruct {
                offset: self.offset,
                pattern: self.source.to_string(),
            });
        }

        while let Some(&c) = self.pattern.get(self.offset) {
            self.offset += 1;
            match c {
                // Skip over the escaped byte, whatever it is.
                b'\\' => self.offset += 1,
                GROUP_CLOSE => return Ok(()),
                b'(' => {
                    if self.depth == MAX_NESTING_DEPTH {
                        return Err(ShapeError::NestingTooDeep {
                            limit: MAX_NESTING_DEPTH,
                            offset: self.offset - 1,
                        });
                    }
                    self.depth += 1;
                    self.scan_group()?;
                    self.depth -= 1;
                }
                _ => (),
            }
        }

        Err(ShapeError::UnterminatedGroup {
            pattern: self.source.to_string(),
        })
    }
}

/// Recovers the capture group keys of an inner pattern (delimiters already
/// removed).
pub fn extract_group_keys(inner: &str) -> Result<GroupKeys> {
    let mut pattern = Vec::with_capacity(inner.len() + 1);
    pattern.extend_from_slice(inner.as_bytes());
    pattern.push(GROUP_CLOSE);

    let mut scanner = GroupScanner::new(&pattern, inner);
    scanner.scan_group()?;

    let expected = inner.len();
    let parsed = scanner.offset - 1;
    if parsed != expected {
        return Err(ShapeError::LengthMismatch {
            parsed,
            expected,
            pattern: inner.to_string(),
        });
    }

    Ok(GroupKeys(scanner.keys))
}

/// Recovers the capture group keys of a delimited pattern literal such as
/// `/(a)(b)/i`.
pub fn get_group_keys(literal: &str) -> Result<GroupKeys> {
    let inner = strip_delimiters(literal)?;
    extract_group_keys(&inner)
}

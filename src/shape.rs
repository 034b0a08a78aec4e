// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use crate::extractor::{GroupKey, GroupKeys};

use core::fmt;
use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

/// Type of a single slot of the matches array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldType {
    /// The captured substring.
    PlainString,
    /// The captured substring and its byte offset, `array{0:string,1:int}`.
    OffsetTuple,
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldType::PlainString => f.write_str("string"),
            FieldType::OffsetTuple => f.write_str("array{0:string,1:int}"),
        }
    }
}

/// Inferred type of the matches array.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum MatchShape {
    /// Exactly these keys, in group order.
    Record { fields: Vec<(GroupKey, FieldType)> },
    /// `array{0:string,1:int}[]`
    OffsetTupleList,
    /// `string[]`
    StringList,
    /// `array`
    Untyped,
}

lazy_static! {
    pub static ref OFFSET_TUPLE_LIST: MatchShape = MatchShape::OffsetTupleList;
    pub static ref STRING_LIST: MatchShape = MatchShape::StringList;
    pub static ref UNTYPED: MatchShape = MatchShape::Untyped;
}

impl MatchShape {
    /// Closed record mapping every key to `field_type`.
    pub fn record(keys: &GroupKeys, field_type: FieldType) -> Self {
        MatchShape::Record {
            fields: keys.iter().map(|key| (key, field_type)).collect(),
        }
    }

    pub fn is_record(&self) -> bool {
        matches!(self, MatchShape::Record { .. })
    }

    /// Number of known keys; `None` unless the shape is a closed record.
    pub fn field_count(&self) -> Option<usize> {
        match self {
            MatchShape::Record { fields } => Some(fields.len()),
            _ => None,
        }
    }

    pub fn field(&self, key: GroupKey) -> Option<FieldType> {
        match self {
            MatchShape::Record { fields } => fields
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, field_type)| *field_type),
            _ => None,
        }
    }
}

impl fmt::Display for MatchShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchShape::Record { fields } => {
                f.write_str("array{")?;
                for (idx, (key, field_type)) in fields.iter().enumerate() {
                    if idx > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{key}:{field_type}")?;
                }
                f.write_str("}")
            }
            MatchShape::OffsetTupleList => write!(f, "{}[]", FieldType::OffsetTuple),
            MatchShape::StringList => write!(f, "{}[]", FieldType::PlainString),
            MatchShape::Untyped => f.write_str("array"),
        }
    }
}

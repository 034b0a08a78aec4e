// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

// Use README.md as crate documentation.
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/README.md"))]

mod delimiter;
mod error;
mod extractor;
mod options;
mod scalar;
mod shape;
mod synthesizer;

pub use delimiter::{strip_delimiters, Delimiters};
pub use error::{ShapeError, ShapeErrorKind};
pub use extractor::{extract_group_keys, get_group_keys, GroupKey, GroupKeys, MAX_NESTING_DEPTH};
pub use options::{InferenceOptions, PREG_OFFSET_CAPTURE};
pub use scalar::{FoldedArguments, Scalar, ScalarResolver};
pub use shape::{FieldType, MatchShape, OFFSET_TUPLE_LIST, STRING_LIST, UNTYPED};
pub use synthesizer::{infer_match_shape, synthesize_shape, CaptureFlagState, MatchShapeInferrer};

#[cfg(test)]
mod tests;

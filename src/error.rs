// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Errors raised while recovering capture groups from a pattern literal.
//!
//! None of these escape [`infer_match_shape`](crate::infer_match_shape); they
//! only decide which fallback shape is reported.

use thiserror::Error;

/// Failure of one stage of the shape inference pipeline.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShapeError {
    /// The literal is empty or its closing delimiter could not be found.
    #[error("Failed to find closing delimiter for '{opener}' in '{literal}'")]
    DelimiterMismatch { opener: String, literal: String },

    /// A group starts with `?`, e.g. `(?:`, `(?=` or `(?P<name>`.
    #[error("Support for complex patterns is not implemented (offset {offset} in '{pattern}')")]
    UnsupportedConstruct { offset: usize, pattern: String },

    /// The end of the pattern was reached inside an open group.
    #[error("Reached the end of the pattern before extracting the group in '{pattern}'")]
    UnterminatedGroup { pattern: String },

    /// The scan terminated but consumed the wrong number of bytes.
    #[error("Only matched {parsed} of {expected} for '{pattern}'")]
    LengthMismatch {
        parsed: usize,
        expected: usize,
        pattern: String,
    },

    /// A call argument does not resolve to a compile time scalar.
    #[error("Argument {index} is not a statically known {expected}")]
    NonStaticArgument { index: usize, expected: &'static str },

    /// Groups are nested deeper than PCRE itself accepts.
    #[error("Groups nested deeper than {limit} at offset {offset}")]
    NestingTooDeep { limit: usize, offset: usize },

    /// Keys that are not `0, 1, 2, ...`.
    #[error("Group keys must be numbered 0, 1, 2, ... but got {keys:?}")]
    InvalidGroupKeys { keys: Vec<u32> },
}

/// Stable names for the [`ShapeError`] variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeErrorKind {
    DelimiterMismatch,
    UnsupportedConstruct,
    UnterminatedGroup,
    LengthMismatch,
    NonStaticArgument,
    NestingTooDeep,
    InvalidGroupKeys,
}

impl ShapeError {
    pub fn kind(&self) -> ShapeErrorKind {
        match self {
            ShapeError::DelimiterMismatch { .. } => ShapeErrorKind::DelimiterMismatch,
            ShapeError::UnsupportedConstruct { .. } => ShapeErrorKind::UnsupportedConstruct,
            ShapeError::UnterminatedGroup { .. } => ShapeErrorKind::UnterminatedGroup,
            ShapeError::LengthMismatch { .. } => ShapeErrorKind::LengthMismatch,
            ShapeError::NonStaticArgument { .. } => ShapeErrorKind::NonStaticArgument,
            ShapeError::NestingTooDeep { .. } => ShapeErrorKind::NestingTooDeep,
            ShapeError::InvalidGroupKeys { .. } => ShapeErrorKind::InvalidGroupKeys,
        }
    }
}

impl ShapeErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeErrorKind::DelimiterMismatch => "DelimiterMismatch",
            ShapeErrorKind::UnsupportedConstruct => "UnsupportedConstruct",
            ShapeErrorKind::UnterminatedGroup => "UnterminatedGroup",
            ShapeErrorKind::LengthMismatch => "LengthMismatch",
            ShapeErrorKind::NonStaticArgument => "NonStaticArgument",
            ShapeErrorKind::NestingTooDeep => "NestingTooDeep",
            ShapeErrorKind::InvalidGroupKeys => "InvalidGroupKeys",
        }
    }
}

impl core::fmt::Display for ShapeErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result alias used by the delimiter and extractor stages.
pub type Result<T> = core::result::Result<T, ShapeError>;

// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Return type inference for the matches argument of `preg_match`.
//!
//! Every stage may fail; a failure only selects a coarser fallback shape.
//! Whether the flags argument is statically known is decided first: an
//! unknown flags value yields the untyped array even when the groups of the
//! pattern could be recovered.

use crate::error::{Result, ShapeError};
use crate::extractor::{get_group_keys, GroupKeys};
use crate::options::InferenceOptions;
use crate::scalar::ScalarResolver;
use crate::shape::{FieldType, MatchShape, OFFSET_TUPLE_LIST, STRING_LIST, UNTYPED};

use log::{debug, trace};

/// Flags argument as seen by the analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureFlagState {
    Known(i64),
    Unknown,
}

impl CaptureFlagState {
    pub fn has_flag(&self, flag: i64) -> Option<bool> {
        match self {
            CaptureFlagState::Known(bits) => Some(bits & flag != 0),
            CaptureFlagState::Unknown => None,
        }
    }
}

/// Combines recovered group keys and the flags state into a shape.
pub fn synthesize_shape(
    keys: Option<&GroupKeys>,
    flags: CaptureFlagState,
    offset_capture_flag: i64,
) -> MatchShape {
    let Some(offset_capture) = flags.has_flag(offset_capture_flag) else {
        return UNTYPED.clone();
    };

    // TODO: PREG_UNMATCHED_AS_NULL makes every field nullable.
    match (offset_capture, keys) {
        (true, Some(keys)) => MatchShape::record(keys, FieldType::OffsetTuple),
        (true, None) => OFFSET_TUPLE_LIST.clone(),
        (false, Some(keys)) => MatchShape::record(keys, FieldType::PlainString),
        (false, None) => STRING_LIST.clone(),
    }
}

/// Infers the matches shape of `preg_match` calls.
#[derive(Debug, Clone, Default)]
pub struct MatchShapeInferrer {
    options: InferenceOptions,
}

impl MatchShapeInferrer {
    pub fn new(options: InferenceOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &InferenceOptions {
        &self.options
    }

    /// Group keys of the pattern argument.
    pub fn group_keys<E, R>(&self, args: &[E], resolver: &R) -> Result<GroupKeys>
    where
        R: ScalarResolver<E> + ?Sized,
    {
        let index = self.options.pattern_argument;
        let pattern = args
            .get(index)
            .and_then(|arg| resolver.resolve(arg))
            .and_then(|value| value.as_str().map(str::to_string))
            .ok_or(ShapeError::NonStaticArgument {
                index,
                expected: "string",
            })?;
        get_group_keys(&pattern)
    }

    /// Flags argument state. A missing argument means no flags.
    pub fn flag_state<E, R>(&self, args: &[E], resolver: &R) -> CaptureFlagState
    where
        R: ScalarResolver<E> + ?Sized,
    {
        let index = self.options.flags_argument;
        let Some(arg) = args.get(index) else {
            return CaptureFlagState::Known(0);
        };
        match resolver.resolve(arg).and_then(|value| value.as_int()) {
            Some(bits) => CaptureFlagState::Known(bits),
            None => {
                debug!(
                    "{}",
                    ShapeError::NonStaticArgument {
                        index,
                        expected: "integer",
                    }
                );
                CaptureFlagState::Unknown
            }
        }
    }

    /// Shape of the matches array for a call with `args`. Never fails.
    pub fn infer<E, R>(&self, args: &[E], resolver: &R) -> MatchShape
    where
        R: ScalarResolver<E> + ?Sized,
    {
        let keys = match self.group_keys(args, resolver) {
            Ok(keys) => {
                trace!("recovered group keys {:?}", keys.as_slice());
                Some(keys)
            }
            Err(err) => {
                debug!("group keys unknown: {err}");
                None
            }
        };
        let flags = self.flag_state(args, resolver);

        let shape = synthesize_shape(keys.as_ref(), flags, self.options.offset_capture_flag);
        trace!("inferred matches shape {shape}");
        shape
    }
}

/// [`MatchShapeInferrer::infer`] with the `preg_match` argument layout.
pub fn infer_match_shape<E, R>(args: &[E], resolver: &R) -> MatchShape
where
    R: ScalarResolver<E> + ?Sized,
{
    MatchShapeInferrer::default().infer(args, resolver)
}

// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use serde::{Deserialize, Serialize};

/// A value the host analysis could determine at compile time.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum Scalar {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
}

impl Scalar {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Scalar::String(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Only genuine integers count; `true` or `256.0` do not.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Scalar::Int(i) => Some(*i),
            _ => None,
        }
    }
}

impl From<&str> for Scalar {
    fn from(s: &str) -> Self {
        Scalar::String(s.to_string())
    }
}

impl From<String> for Scalar {
    fn from(s: String) -> Self {
        Scalar::String(s)
    }
}

impl From<i64> for Scalar {
    fn from(i: i64) -> Self {
        Scalar::Int(i)
    }
}

impl From<bool> for Scalar {
    fn from(b: bool) -> Self {
        Scalar::Bool(b)
    }
}

/// Resolves call argument expressions of the host AST to compile time
/// scalars.
///
/// Any `Fn(&E) -> Option<Scalar>` is a resolver, so hosts can pass a closure
/// over their own constant propagation tables.
pub trait ScalarResolver<E: ?Sized> {
    fn resolve(&self, expr: &E) -> Option<Scalar>;
}

impl<E: ?Sized, F> ScalarResolver<E> for F
where
    F: Fn(&E) -> Option<Scalar>,
{
    fn resolve(&self, expr: &E) -> Option<Scalar> {
        self(expr)
    }
}

/// Resolver for hosts whose arguments are already folded to scalars.
/// `None` marks an argument that is not statically known.
#[derive(Debug, Clone, Copy, Default)]
pub struct FoldedArguments;

impl ScalarResolver<Option<Scalar>> for FoldedArguments {
    fn resolve(&self, expr: &Option<Scalar>) -> Option<Scalar> {
        expr.clone()
    }
}

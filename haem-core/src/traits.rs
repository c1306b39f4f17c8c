//! Core trait definitions for the haem crates.
//!
//! These traits define the contracts that domain types implement across crates.

use crate::{HaemError, Result};

/// A comparison operator requested at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompareOp {
    Lt,
    Le,
    Eq,
    Ne,
    Gt,
    Ge,
}

impl CompareOp {
    /// The operator symbol, as written in source.
    pub fn symbol(self) -> &'static str {
        match self {
            CompareOp::Lt => "<",
            CompareOp::Le => "<=",
            CompareOp::Eq => "==",
            CompareOp::Ne => "!=",
            CompareOp::Gt => ">",
            CompareOp::Ge => ">=",
        }
    }
}

/// A value type with structural equality but no ordering.
///
/// Ambiguity codes have no natural order, so only `Eq` and `Ne` are
/// answered; every ordering operator is rejected with
/// [`HaemError::UnsupportedOperation`].
pub trait Unordered: PartialEq {
    /// Type name used in error messages.
    const TYPE_NAME: &'static str;

    /// Evaluate `self <op> other`.
    fn compare(&self, other: &Self, op: CompareOp) -> Result<bool> {
        match op {
            CompareOp::Eq => Ok(self == other),
            CompareOp::Ne => Ok(self != other),
            _ => Err(HaemError::UnsupportedOperation {
                op: op.symbol(),
                type_name: Self::TYPE_NAME,
            }),
        }
    }
}

/// A type that can produce a summary of its contents.
pub trait Summarizable {
    /// A one-line summary suitable for display.
    fn summary(&self) -> String;
}

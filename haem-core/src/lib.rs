//! Shared primitives and traits for the haem sequence algebra.
//!
//! `haem-core` provides the foundation that `haem-seq` builds on:
//!
//! - **Error types**: [`HaemError`] and [`Result`] for structured error handling
//! - **Traits**: [`Unordered`] for equality-only comparison, [`Summarizable`]

pub mod error;
pub mod traits;

pub use error::{HaemError, Result};
pub use traits::*;

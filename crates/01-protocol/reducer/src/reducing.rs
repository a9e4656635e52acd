//! The reducing-function contract.
//!
//! A reducing function is split across two traits. [`Reducer`] carries the
//! parts that do not depend on the input type (`init` and `complete`), and
//! [`ReducingFunction`] adds the per-input `step`. Keeping the lifecycle half
//! input-agnostic lets callers seed a reduction from a sink without naming the
//! element type it will eventually receive.

use crate::error::{ReduceError, ReduceResult};
use crate::signal::Reduced;

/// Seed and finalisation half of a reducing function.
pub trait Reducer<R> {
    /// Produces a seed result.
    ///
    /// Reducing functions that were never designed to provide a seed keep the
    /// default, which fails with [`ReduceError::Unsupported`] instead of
    /// inventing a value.
    fn init(&mut self) -> ReduceResult<R> {
        Err(ReduceError::Unsupported("init"))
    }

    /// Finalises the result. Called exactly once, after the last step.
    fn complete(self, acc: R) -> R
    where
        Self: Sized,
    {
        acc
    }
}

/// A full reducing function over inputs of type `T`.
pub trait ReducingFunction<R, T>: Reducer<R> {
    /// Folds one input into the running result.
    ///
    /// Setting `signal` asks the driver to stop feeding inputs; it does not by
    /// itself prevent further calls.
    fn step(&mut self, acc: R, input: T, signal: &mut Reduced) -> R;
}

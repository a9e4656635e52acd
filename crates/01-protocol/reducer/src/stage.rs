//! Per-input stage logic and the chaining reducing function that hosts it.

use crate::error::ReduceResult;
use crate::reducing::{Reducer, ReducingFunction};
use crate::signal::Reduced;

/// One transformation step in a composed chain.
///
/// A stage sees inputs of type [`Stage::In`] and decides what, if anything, to
/// hand to the inner reducing function, which accepts [`Stage::Out`]. Stages
/// never deal with `init` or `complete` directly: [`Chain`] forwards both to
/// the inner function, calling [`Stage::flush`] first so buffering stages can
/// emit what they still hold.
///
/// Any `Stage + Clone` is a [`Transducer`](crate::Transducer): applying it
/// clones the stage as the per-run state, so the value a caller builds acts as
/// a pristine prototype and is never stepped itself.
pub trait Stage {
    type In;
    type Out;

    /// Processes one input, forwarding zero or more values to `inner`.
    fn step<R, F>(&mut self, inner: &mut F, acc: R, input: Self::In, signal: &mut Reduced) -> R
    where
        F: ReducingFunction<R, Self::Out>;

    /// Emits buffered output ahead of completion. Defaults to nothing.
    fn flush<R, F>(&mut self, _inner: &mut F, acc: R) -> R
    where
        F: ReducingFunction<R, Self::Out>,
    {
        acc
    }
}

/// Reducing function produced by applying a [`Stage`] to an inner function.
#[derive(Clone, Debug)]
pub struct Chain<S, F> {
    stage: S,
    inner: F,
}

impl<S, F> Chain<S, F> {
    pub fn new(stage: S, inner: F) -> Self {
        Self { stage, inner }
    }
}

impl<R, S, F> Reducer<R> for Chain<S, F>
where
    S: Stage,
    F: ReducingFunction<R, S::Out>,
{
    fn init(&mut self) -> ReduceResult<R> {
        self.inner.init()
    }

    fn complete(mut self, acc: R) -> R {
        let acc = self.stage.flush(&mut self.inner, acc);
        self.inner.complete(acc)
    }
}

impl<R, S, F> ReducingFunction<R, S::In> for Chain<S, F>
where
    S: Stage,
    F: ReducingFunction<R, S::Out>,
{
    #[inline]
    fn step(&mut self, acc: R, input: S::In, signal: &mut Reduced) -> R {
        self.stage.step(&mut self.inner, acc, input, signal)
    }
}

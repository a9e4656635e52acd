//! Terminal reducing functions.

use crate::error::ReduceResult;
use crate::reducing::{Reducer, ReducingFunction};
use crate::signal::Reduced;

/// Reducing function lifted from a bare step closure.
///
/// It has no seed: [`Reducer::init`] reports the operation as unsupported, so
/// callers must supply an initial result. Completion is the identity.
#[derive(Clone, Copy, Debug)]
pub struct Completing<S> {
    step: S,
}

/// Lifts a step closure into a reducing function without a seed.
pub fn completing<R, T, S>(step: S) -> Completing<S>
where
    S: FnMut(R, T, &mut Reduced) -> R,
{
    Completing { step }
}

impl<R, S> Reducer<R> for Completing<S> {}

impl<R, T, S> ReducingFunction<R, T> for Completing<S>
where
    S: FnMut(R, T, &mut Reduced) -> R,
{
    #[inline]
    fn step(&mut self, acc: R, input: T, signal: &mut Reduced) -> R {
        (self.step)(acc, input, signal)
    }
}

/// Reducing function built from an init closure and a step closure.
#[derive(Clone, Copy, Debug)]
pub struct Seeded<I, S> {
    init: I,
    step: S,
}

/// Builds a reducing function that can seed itself.
pub fn seeded<R, T, I, S>(init: I, step: S) -> Seeded<I, S>
where
    I: FnMut() -> R,
    S: FnMut(R, T, &mut Reduced) -> R,
{
    Seeded { init, step }
}

impl<R, I, S> Reducer<R> for Seeded<I, S>
where
    I: FnMut() -> R,
{
    fn init(&mut self) -> ReduceResult<R> {
        Ok((self.init)())
    }
}

impl<R, T, I, S> ReducingFunction<R, T> for Seeded<I, S>
where
    I: FnMut() -> R,
    S: FnMut(R, T, &mut Reduced) -> R,
{
    #[inline]
    fn step(&mut self, acc: R, input: T, signal: &mut Reduced) -> R {
        (self.step)(acc, input, signal)
    }
}

/// Sink that appends every input to a growable container.
#[derive(Clone, Copy, Debug, Default)]
pub struct Append;

impl<C> Reducer<C> for Append
where
    C: Default,
{
    fn init(&mut self) -> ReduceResult<C> {
        Ok(C::default())
    }
}

impl<C, T> ReducingFunction<C, T> for Append
where
    C: Default + Extend<T>,
{
    #[inline]
    fn step(&mut self, mut acc: C, input: T, _signal: &mut Reduced) -> C {
        acc.extend(std::iter::once(input));
        acc
    }
}

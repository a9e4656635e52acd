//! Flattening stages: `cat` and `mapcat`.

use std::marker::PhantomData;

use reducer::{compose, drive, Comp, Reduced, ReducingFunction, Stage};

use crate::map::{map, Map};

/// Steps every element of each nested sequence into the inner function.
///
/// Nested sequences share the signal of the surrounding run, so a stage further
/// down that terminates halfway through one sequence also ends the outer one.
pub struct Cat<I> {
    _in: PhantomData<fn(I)>,
}

pub fn cat<I>() -> Cat<I>
where
    I: IntoIterator,
{
    Cat { _in: PhantomData }
}

impl<I> Clone for Cat<I> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<I> Copy for Cat<I> {}

impl<I> Stage for Cat<I>
where
    I: IntoIterator,
{
    type In = I;
    type Out = I::Item;

    fn step<R, F>(&mut self, inner: &mut F, acc: R, input: I, signal: &mut Reduced) -> R
    where
        F: ReducingFunction<R, I::Item>,
    {
        drive(inner, acc, input, signal)
    }
}

/// Maps every input to a sequence and flattens the results.
pub fn mapcat<A, I, Fun>(f: Fun) -> Comp<Map<A, Fun>, Cat<I>>
where
    Fun: FnMut(A) -> I,
    I: IntoIterator,
{
    compose(map(f), cat())
}

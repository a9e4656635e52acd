//! Element-wise rewriting: `map` and `replace`.

use std::collections::HashMap;
use std::hash::Hash;
use std::marker::PhantomData;
use std::sync::Arc;

use reducer::{Reduced, ReducingFunction, Stage};

/// Forwards `f(input)` for every input.
pub struct Map<A, Fun> {
    f: Fun,
    _in: PhantomData<fn(A)>,
}

pub fn map<A, B, Fun>(f: Fun) -> Map<A, Fun>
where
    Fun: FnMut(A) -> B,
{
    Map {
        f,
        _in: PhantomData,
    }
}

impl<A, Fun: Clone> Clone for Map<A, Fun> {
    fn clone(&self) -> Self {
        Self {
            f: self.f.clone(),
            _in: PhantomData,
        }
    }
}

impl<A, B, Fun> Stage for Map<A, Fun>
where
    Fun: FnMut(A) -> B,
{
    type In = A;
    type Out = B;

    #[inline]
    fn step<R, F>(&mut self, inner: &mut F, acc: R, input: A, signal: &mut Reduced) -> R
    where
        F: ReducingFunction<R, B>,
    {
        inner.step(acc, (self.f)(input), signal)
    }
}

/// Swaps inputs found in a lookup table for their replacement.
#[derive(Clone, Debug)]
pub struct Replace<A> {
    table: Arc<HashMap<A, A>>,
}

/// Forwards `table[input]` when present, otherwise the input unchanged.
pub fn replace<A>(table: HashMap<A, A>) -> Replace<A>
where
    A: Eq + Hash + Clone,
{
    Replace {
        table: Arc::new(table),
    }
}

impl<A> Stage for Replace<A>
where
    A: Eq + Hash + Clone,
{
    type In = A;
    type Out = A;

    fn step<R, F>(&mut self, inner: &mut F, acc: R, input: A, signal: &mut Reduced) -> R
    where
        F: ReducingFunction<R, A>,
    {
        let out = match self.table.get(&input) {
            Some(replacement) => replacement.clone(),
            None => input,
        };
        inner.step(acc, out, signal)
    }
}

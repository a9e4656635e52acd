//! Optional rewriting: `keep` and `keep_indexed`.

use std::marker::PhantomData;

use reducer::{Reduced, ReducingFunction, Stage};

/// Forwards `f(input)` whenever it is `Some`.
pub struct Keep<A, Fun> {
    f: Fun,
    _in: PhantomData<fn(A)>,
}

pub fn keep<A, B, Fun>(f: Fun) -> Keep<A, Fun>
where
    Fun: FnMut(A) -> Option<B>,
{
    Keep {
        f,
        _in: PhantomData,
    }
}

impl<A, Fun: Clone> Clone for Keep<A, Fun> {
    fn clone(&self) -> Self {
        Self {
            f: self.f.clone(),
            _in: PhantomData,
        }
    }
}

impl<A, B, Fun> Stage for Keep<A, Fun>
where
    Fun: FnMut(A) -> Option<B>,
{
    type In = A;
    type Out = B;

    fn step<R, F>(&mut self, inner: &mut F, acc: R, input: A, signal: &mut Reduced) -> R
    where
        F: ReducingFunction<R, B>,
    {
        match (self.f)(input) {
            Some(out) => inner.step(acc, out, signal),
            None => acc,
        }
    }
}

/// Forwards `f(index, input)` whenever it is `Some`. Indices start at 1.
pub struct KeepIndexed<A, Fun> {
    f: Fun,
    index: usize,
    _in: PhantomData<fn(A)>,
}

pub fn keep_indexed<A, B, Fun>(f: Fun) -> KeepIndexed<A, Fun>
where
    Fun: FnMut(usize, A) -> Option<B>,
{
    KeepIndexed {
        f,
        index: 0,
        _in: PhantomData,
    }
}

impl<A, Fun: Clone> Clone for KeepIndexed<A, Fun> {
    fn clone(&self) -> Self {
        Self {
            f: self.f.clone(),
            index: self.index,
            _in: PhantomData,
        }
    }
}

impl<A, B, Fun> Stage for KeepIndexed<A, Fun>
where
    Fun: FnMut(usize, A) -> Option<B>,
{
    type In = A;
    type Out = B;

    fn step<R, F>(&mut self, inner: &mut F, acc: R, input: A, signal: &mut Reduced) -> R
    where
        F: ReducingFunction<R, B>,
    {
        self.index += 1;
        match (self.f)(self.index, input) {
            Some(out) => inner.step(acc, out, signal),
            None => acc,
        }
    }
}

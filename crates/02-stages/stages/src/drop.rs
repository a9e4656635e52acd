//! Skipped prefixes: `drop` and `drop_while`.

use std::marker::PhantomData;

use reducer::{Reduced, ReducingFunction, Stage};

/// Swallows the first `count` inputs, then forwards the rest.
pub struct DropFirst<A> {
    count: usize,
    dropped: usize,
    _in: PhantomData<fn(A)>,
}

pub fn drop<A>(n: usize) -> DropFirst<A> {
    DropFirst {
        count: n,
        dropped: 0,
        _in: PhantomData,
    }
}

impl<A> Clone for DropFirst<A> {
    fn clone(&self) -> Self {
        Self {
            count: self.count,
            dropped: self.dropped,
            _in: PhantomData,
        }
    }
}

impl<A> Stage for DropFirst<A> {
    type In = A;
    type Out = A;

    fn step<R, F>(&mut self, inner: &mut F, acc: R, input: A, signal: &mut Reduced) -> R
    where
        F: ReducingFunction<R, A>,
    {
        if self.dropped < self.count {
            self.dropped += 1;
            acc
        } else {
            inner.step(acc, input, signal)
        }
    }
}

/// Swallows inputs while the predicate holds.
pub struct DropWhile<A, P> {
    pred: P,
    dropping: bool,
    _in: PhantomData<fn(A)>,
}

/// Swallows inputs until `pred` first fails; from then on every input,
/// including the one that failed, is forwarded without consulting `pred`.
pub fn drop_while<A, P>(pred: P) -> DropWhile<A, P>
where
    P: FnMut(&A) -> bool,
{
    DropWhile {
        pred,
        dropping: true,
        _in: PhantomData,
    }
}

impl<A, P: Clone> Clone for DropWhile<A, P> {
    fn clone(&self) -> Self {
        Self {
            pred: self.pred.clone(),
            dropping: self.dropping,
            _in: PhantomData,
        }
    }
}

impl<A, P> Stage for DropWhile<A, P>
where
    P: FnMut(&A) -> bool,
{
    type In = A;
    type Out = A;

    fn step<R, F>(&mut self, inner: &mut F, acc: R, input: A, signal: &mut Reduced) -> R
    where
        F: ReducingFunction<R, A>,
    {
        if self.dropping && (self.pred)(&input) {
            return acc;
        }
        self.dropping = false;
        inner.step(acc, input, signal)
    }
}

//! Predicate gates: `filter` and `remove`.

use std::marker::PhantomData;

use reducer::{Reduced, ReducingFunction, Stage};

/// Forwards inputs whose predicate result equals `keep`.
pub struct Filter<A, P> {
    pred: P,
    keep: bool,
    _in: PhantomData<fn(A)>,
}

/// Forwards inputs for which `pred` holds.
pub fn filter<A, P>(pred: P) -> Filter<A, P>
where
    P: FnMut(&A) -> bool,
{
    Filter {
        pred,
        keep: true,
        _in: PhantomData,
    }
}

/// Forwards inputs for which `pred` does not hold.
pub fn remove<A, P>(pred: P) -> Filter<A, P>
where
    P: FnMut(&A) -> bool,
{
    Filter {
        pred,
        keep: false,
        _in: PhantomData,
    }
}

impl<A, P: Clone> Clone for Filter<A, P> {
    fn clone(&self) -> Self {
        Self {
            pred: self.pred.clone(),
            keep: self.keep,
            _in: PhantomData,
        }
    }
}

impl<A, P> Stage for Filter<A, P>
where
    P: FnMut(&A) -> bool,
{
    type In = A;
    type Out = A;

    #[inline]
    fn step<R, F>(&mut self, inner: &mut F, acc: R, input: A, signal: &mut Reduced) -> R
    where
        F: ReducingFunction<R, A>,
    {
        if (self.pred)(&input) == self.keep {
            inner.step(acc, input, signal)
        } else {
            acc
        }
    }
}

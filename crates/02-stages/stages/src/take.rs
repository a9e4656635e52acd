//! Bounded prefixes: `take`, `take_while` and `take_nth`.

use std::marker::PhantomData;

use reducer::{ReduceError, ReduceResult, Reduced, ReducingFunction, Stage};

/// Forwards the first `limit` inputs, then terminates the reduction.
pub struct Take<A> {
    limit: usize,
    taken: usize,
    _in: PhantomData<fn(A)>,
}

/// Forwards at most `n` inputs.
///
/// The signal is set as soon as the `n`th input has been forwarded, so the
/// driver never pulls input `n + 1`. `take(0)` forwards nothing and stops on
/// the first input.
pub fn take<A>(n: usize) -> Take<A> {
    Take {
        limit: n,
        taken: 0,
        _in: PhantomData,
    }
}

impl<A> Clone for Take<A> {
    fn clone(&self) -> Self {
        Self {
            limit: self.limit,
            taken: self.taken,
            _in: PhantomData,
        }
    }
}

impl<A> Stage for Take<A> {
    type In = A;
    type Out = A;

    fn step<R, F>(&mut self, inner: &mut F, acc: R, input: A, signal: &mut Reduced) -> R
    where
        F: ReducingFunction<R, A>,
    {
        if self.taken >= self.limit {
            signal.set();
            return acc;
        }
        self.taken += 1;
        let acc = inner.step(acc, input, signal);
        if self.taken == self.limit {
            signal.set();
        }
        acc
    }
}

/// Forwards inputs while the predicate holds.
pub struct TakeWhile<A, P> {
    pred: P,
    _in: PhantomData<fn(A)>,
}

/// Forwards inputs until `pred` first fails, then terminates the reduction
/// without forwarding the failing input.
pub fn take_while<A, P>(pred: P) -> TakeWhile<A, P>
where
    P: FnMut(&A) -> bool,
{
    TakeWhile {
        pred,
        _in: PhantomData,
    }
}

impl<A, P: Clone> Clone for TakeWhile<A, P> {
    fn clone(&self) -> Self {
        Self {
            pred: self.pred.clone(),
            _in: PhantomData,
        }
    }
}

impl<A, P> Stage for TakeWhile<A, P>
where
    P: FnMut(&A) -> bool,
{
    type In = A;
    type Out = A;

    fn step<R, F>(&mut self, inner: &mut F, acc: R, input: A, signal: &mut Reduced) -> R
    where
        F: ReducingFunction<R, A>,
    {
        if (self.pred)(&input) {
            inner.step(acc, input, signal)
        } else {
            signal.set();
            acc
        }
    }
}

/// Forwards every `nth` input, counting from 1.
pub struct TakeNth<A> {
    nth: usize,
    seen: usize,
    _in: PhantomData<fn(A)>,
}

/// Forwards the `n`th, `2n`th, … inputs. Fails for `n == 0`.
pub fn take_nth<A>(n: usize) -> ReduceResult<TakeNth<A>> {
    if n == 0 {
        return Err(ReduceError::invalid("take_nth", "step must be at least 1"));
    }
    Ok(TakeNth {
        nth: n,
        seen: 0,
        _in: PhantomData,
    })
}

impl<A> Clone for TakeNth<A> {
    fn clone(&self) -> Self {
        Self {
            nth: self.nth,
            seen: self.seen,
            _in: PhantomData,
        }
    }
}

impl<A> Stage for TakeNth<A> {
    type In = A;
    type Out = A;

    fn step<R, F>(&mut self, inner: &mut F, acc: R, input: A, signal: &mut Reduced) -> R
    where
        F: ReducingFunction<R, A>,
    {
        self.seen = (self.seen + 1) % self.nth;
        if self.seen == 0 {
            inner.step(acc, input, signal)
        } else {
            acc
        }
    }
}

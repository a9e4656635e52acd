//! Reduction driver: feeds a source through a reducing function.

use log::trace;

use crate::error::ReduceResult;
use crate::reducing::{Reducer, ReducingFunction};
use crate::signal::Reduced;
use crate::sink::Append;
use crate::transducer::Transducer;

/// Steps every input of `source` into `rf` until the source runs dry or the
/// signal is set. Does not complete.
///
/// Flattening stages call this with the signal of the enclosing run, so a
/// termination raised while walking a nested sequence also stops the outer one.
pub fn drive<R, T, F, I>(rf: &mut F, init: R, source: I, signal: &mut Reduced) -> R
where
    F: ReducingFunction<R, T> + ?Sized,
    I: IntoIterator<Item = T>,
{
    let mut acc = init;
    for input in source {
        acc = rf.step(acc, input, signal);
        if signal.is_set() {
            break;
        }
    }
    acc
}

/// Reduces `source` into `rf` starting from `init`, then completes.
///
/// `rf` is consumed, so completion runs exactly once. It also runs when a stage
/// terminated the reduction early.
pub fn reduce<R, T, F, I>(rf: F, init: R, source: I) -> R
where
    F: ReducingFunction<R, T>,
    I: IntoIterator<Item = T>,
{
    let mut rf = rf;
    let mut signal = Reduced::new();
    let mut consumed = 0usize;
    let acc = drive(
        &mut rf,
        init,
        source.into_iter().inspect(|_| consumed += 1),
        &mut signal,
    );
    if signal.is_set() {
        trace!("reduction terminated early after {consumed} inputs");
    }
    rf.complete(acc)
}

/// Applies `xf` to `rf` and reduces `source` through the result.
///
/// Without an explicit seed the chain's `init` is used, which reaches the sink
/// through every stage; sinks without a seed make this fail with
/// [`ReduceError::Unsupported`](crate::ReduceError::Unsupported).
pub fn transduce<X, F, R, I>(xf: &X, rf: F, init: Option<R>, source: I) -> ReduceResult<R>
where
    X: Transducer<F>,
    X::Output: ReducingFunction<R, I::Item>,
    I: IntoIterator,
{
    let mut xform = xf.apply(rf);
    let seed = match init {
        Some(seed) => seed,
        None => xform.init()?,
    };
    Ok(reduce(xform, seed, source))
}

/// Transduces `source` into an existing container.
pub fn into<C, X, I>(container: C, xf: &X, source: I) -> C
where
    X: Transducer<Append>,
    X::Output: ReducingFunction<C, I::Item>,
    I: IntoIterator,
{
    reduce(xf.apply(Append), container, source)
}

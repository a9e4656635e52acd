//! Grouping stages: `partition_by` and `partition_all`.
//!
//! Both buffer inputs and hand complete groups to the inner function as
//! `Vec`s. Whatever is still buffered when the run completes is flushed as a
//! final group before the inner function completes.

use std::marker::PhantomData;
use std::mem;

use log::trace;
use reducer::{ReduceError, ReduceResult, Reduced, ReducingFunction, Stage};

/// Groups runs of inputs that share a key.
pub struct PartitionBy<A, K, Fun> {
    key_fn: Fun,
    buffer: Vec<A>,
    last_key: Option<K>,
}

/// Splits the input into groups whenever `key_fn` returns a different key from
/// the previous input.
pub fn partition_by<A, K, Fun>(key_fn: Fun) -> PartitionBy<A, K, Fun>
where
    Fun: FnMut(&A) -> K,
    K: PartialEq,
{
    PartitionBy {
        key_fn,
        buffer: Vec::new(),
        last_key: None,
    }
}

// Prototypes never hold buffered input, so a clone starts empty and needs no
// `Clone` bound on the element or key types.
impl<A, K, Fun: Clone> Clone for PartitionBy<A, K, Fun> {
    fn clone(&self) -> Self {
        Self {
            key_fn: self.key_fn.clone(),
            buffer: Vec::new(),
            last_key: None,
        }
    }
}

impl<A, K, Fun> Stage for PartitionBy<A, K, Fun>
where
    Fun: FnMut(&A) -> K,
    K: PartialEq,
{
    type In = A;
    type Out = Vec<A>;

    fn step<R, F>(&mut self, inner: &mut F, acc: R, input: A, signal: &mut Reduced) -> R
    where
        F: ReducingFunction<R, Vec<A>>,
    {
        let key = (self.key_fn)(&input);
        let changed = matches!(&self.last_key, Some(prior) if *prior != key);
        self.last_key = Some(key);
        if !changed {
            self.buffer.push(input);
            return acc;
        }

        let group = mem::take(&mut self.buffer);
        let acc = inner.step(acc, group, signal);
        if !signal.is_set() {
            self.buffer.push(input);
        }
        acc
    }

    fn flush<R, F>(&mut self, inner: &mut F, acc: R) -> R
    where
        F: ReducingFunction<R, Vec<A>>,
    {
        flush_buffer("partition_by", &mut self.buffer, inner, acc)
    }
}

/// Groups inputs into chunks of a fixed size.
pub struct PartitionAll<A> {
    size: usize,
    buffer: Vec<A>,
    _in: PhantomData<fn(A)>,
}

/// Emits a group every `n` inputs; the last group may be shorter. Fails for
/// `n == 0`.
pub fn partition_all<A>(n: usize) -> ReduceResult<PartitionAll<A>> {
    if n == 0 {
        return Err(ReduceError::invalid(
            "partition_all",
            "group size must be at least 1",
        ));
    }
    Ok(PartitionAll {
        size: n,
        buffer: Vec::new(),
        _in: PhantomData,
    })
}

impl<A> Clone for PartitionAll<A> {
    fn clone(&self) -> Self {
        Self {
            size: self.size,
            buffer: Vec::with_capacity(self.size),
            _in: PhantomData,
        }
    }
}

impl<A> Stage for PartitionAll<A> {
    type In = A;
    type Out = Vec<A>;

    fn step<R, F>(&mut self, inner: &mut F, acc: R, input: A, signal: &mut Reduced) -> R
    where
        F: ReducingFunction<R, Vec<A>>,
    {
        self.buffer.push(input);
        if self.buffer.len() < self.size {
            return acc;
        }
        let group = mem::replace(&mut self.buffer, Vec::with_capacity(self.size));
        inner.step(acc, group, signal)
    }

    fn flush<R, F>(&mut self, inner: &mut F, acc: R) -> R
    where
        F: ReducingFunction<R, Vec<A>>,
    {
        flush_buffer("partition_all", &mut self.buffer, inner, acc)
    }
}

fn flush_buffer<A, R, F>(stage: &'static str, buffer: &mut Vec<A>, inner: &mut F, acc: R) -> R
where
    F: ReducingFunction<R, Vec<A>>,
{
    if buffer.is_empty() {
        return acc;
    }
    trace!("{stage}: flushing {} buffered inputs on completion", buffer.len());
    // The run is already ending; a stop request from the inner function has
    // nothing left to cut short.
    let mut signal = Reduced::new();
    inner.step(acc, mem::take(buffer), &mut signal)
}

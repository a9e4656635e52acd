//! Shared fixtures for the cross-crate reduction tests.

use std::cell::Cell;
use std::rc::Rc;

use reducer::{Reduced, Reducer, ReducingFunction};

/// Counters observed through a [`Recorder`].
#[derive(Clone, Debug, Default)]
pub struct Tally {
    steps: Rc<Cell<usize>>,
    completions: Rc<Cell<usize>>,
}

impl Tally {
    pub fn steps(&self) -> usize {
        self.steps.get()
    }

    pub fn completions(&self) -> usize {
        self.completions.get()
    }
}

/// Vec-building sink that counts steps and completions.
///
/// With a stop limit it sets the termination signal once it holds that many
/// elements, standing in for a consumer that has seen enough.
#[derive(Debug)]
pub struct Recorder {
    tally: Tally,
    stop_at: Option<usize>,
}

impl Recorder {
    pub fn new() -> (Self, Tally) {
        let tally = Tally::default();
        let recorder = Self {
            tally: tally.clone(),
            stop_at: None,
        };
        (recorder, tally)
    }

    pub fn stopping_at(limit: usize) -> (Self, Tally) {
        let (mut recorder, tally) = Self::new();
        recorder.stop_at = Some(limit);
        (recorder, tally)
    }
}

impl<T> Reducer<Vec<T>> for Recorder {
    fn complete(self, acc: Vec<T>) -> Vec<T> {
        let done = &self.tally.completions;
        done.set(done.get() + 1);
        acc
    }
}

impl<T> ReducingFunction<Vec<T>, T> for Recorder {
    fn step(&mut self, mut acc: Vec<T>, input: T, signal: &mut Reduced) -> Vec<T> {
        let steps = &self.tally.steps;
        steps.set(steps.get() + 1);
        acc.push(input);
        if Some(acc.len()) == self.stop_at {
            signal.set();
        }
        acc
    }
}

/// Wraps `source` so every element pulled from it bumps `pulls`.
pub fn counting<'a, I>(source: I, pulls: &'a Cell<usize>) -> impl Iterator<Item = I::Item> + 'a
where
    I: IntoIterator + 'a,
    I::IntoIter: 'a,
{
    source.into_iter().inspect(move |_| pulls.set(pulls.get() + 1))
}

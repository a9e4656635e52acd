//! Consecutive duplicate removal.

use reducer::{Reduced, ReducingFunction, Stage};

/// Forwards an input unless it equals the previously forwarded one.
///
/// Equality is value equality. Only adjacent repeats collapse; a value that
/// reappears after something else is forwarded again.
#[derive(Clone, Debug)]
pub struct Dedupe<A> {
    last: Option<A>,
}

pub fn dedupe<A>() -> Dedupe<A>
where
    A: Clone + PartialEq,
{
    Dedupe { last: None }
}

impl<A> Stage for Dedupe<A>
where
    A: Clone + PartialEq,
{
    type In = A;
    type Out = A;

    fn step<R, F>(&mut self, inner: &mut F, acc: R, input: A, signal: &mut Reduced) -> R
    where
        F: ReducingFunction<R, A>,
    {
        if self.last.as_ref() == Some(&input) {
            return acc;
        }
        self.last = Some(input.clone());
        inner.step(acc, input, signal)
    }
}

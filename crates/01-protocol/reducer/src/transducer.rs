//! Transducers and their composition.

use crate::stage::{Chain, Stage};

/// Turns an inner reducing function `F` into a new reducing function.
///
/// Transducers hold no per-run state. Every call to [`apply`](Self::apply)
/// returns a fresh reducing function that owns whatever state the run needs,
/// so one transducer can drive any number of reductions.
pub trait Transducer<F> {
    type Output;

    fn apply(&self, inner: F) -> Self::Output;
}

impl<S, F> Transducer<F> for S
where
    S: Stage + Clone,
{
    type Output = Chain<S, F>;

    fn apply(&self, inner: F) -> Chain<S, F> {
        Chain::new(self.clone(), inner)
    }
}

/// Composition of two transducers.
///
/// Applying `Comp { left, right }` to a sink builds `left(right(sink))`: the
/// wrappers nest right first, so at run time `left` sees every input first and
/// `right` only sees what `left` forwards.
#[derive(Clone, Copy, Debug)]
pub struct Comp<L, Rt> {
    left: L,
    right: Rt,
}

/// Composes two transducers, `left` running ahead of `right`.
pub fn compose<L, Rt>(left: L, right: Rt) -> Comp<L, Rt> {
    Comp { left, right }
}

impl<L, Rt> Comp<L, Rt> {
    /// Appends another transducer after this composition.
    pub fn then<N>(self, next: N) -> Comp<Self, N> {
        compose(self, next)
    }
}

impl<L, Rt, F> Transducer<F> for Comp<L, Rt>
where
    Rt: Transducer<F>,
    L: Transducer<Rt::Output>,
{
    type Output = L::Output;

    fn apply(&self, inner: F) -> Self::Output {
        self.left.apply(self.right.apply(inner))
    }
}

//! Early-termination flag threaded through every stage of a reduction.

/// Termination signal for one reduction run.
///
/// The driver creates one per run and hands `&mut Reduced` down the chain on
/// every step. Any stage may [`set`](Reduced::set) it; nothing can clear it, so
/// once a stage asks for termination the request sticks until the run ends.
#[derive(Debug, Default)]
pub struct Reduced {
    stopped: bool,
}

impl Reduced {
    /// Creates an unset signal.
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests early termination of the current reduction.
    #[inline]
    pub fn set(&mut self) {
        self.stopped = true;
    }

    /// Returns `true` once any stage has requested termination.
    #[inline]
    pub fn is_set(&self) -> bool {
        self.stopped
    }
}

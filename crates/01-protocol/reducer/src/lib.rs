//! Reduction transformation protocol.
//!
//! The crate defines the contract every reducing function satisfies and the
//! machinery for wrapping one reducing function in another:
//! * [`Reduced`] – per-run termination flag passed by `&mut` down the chain.
//! * [`Reducer`] / [`ReducingFunction`] – `init` / `complete` and `step`.
//! * [`Stage`] / [`Chain`] – per-input logic and the wrapper that delegates
//!   `init`/`complete` to the inner function.
//! * [`Transducer`] / [`compose`] – reusable, composable reducing-function
//!   transformations.
//! * [`reduce`] / [`transduce`] / [`into`] – the driver.
//!
//! Built-in stages live in the `stages` crate.

mod driver;
mod error;
mod reducing;
mod signal;
mod sink;
mod stage;
mod transducer;

pub use driver::{drive, into, reduce, transduce};
pub use error::{ReduceError, ReduceResult};
pub use reducing::{Reducer, ReducingFunction};
pub use signal::Reduced;
pub use sink::{completing, seeded, Append, Completing, Seeded};
pub use stage::{Chain, Stage};
pub use transducer::{compose, Comp, Transducer};

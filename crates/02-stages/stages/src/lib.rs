//! Built-in transformation stages.
//!
//! Every constructor returns a value that is both a [`Stage`](reducer::Stage)
//! and a [`Transducer`](reducer::Transducer), ready to be composed with
//! [`reducer::compose`] and applied to any sink. Constructors whose parameters
//! can be malformed return [`ReduceResult`](reducer::ReduceResult) and reject
//! bad input up front.
//!
//! `drop` here names the stage; import it by path to keep `std::mem::drop`
//! visible.

mod cat;
mod dedupe;
mod drop;
mod filter;
mod keep;
mod map;
mod partition;
mod sample;
mod take;

pub use crate::cat::{cat, mapcat, Cat};
pub use crate::dedupe::{dedupe, Dedupe};
pub use crate::drop::{drop, drop_while, DropFirst, DropWhile};
pub use crate::filter::{filter, remove, Filter};
pub use crate::keep::{keep, keep_indexed, Keep, KeepIndexed};
pub use crate::map::{map, replace, Map, Replace};
pub use crate::partition::{partition_all, partition_by, PartitionAll, PartitionBy};
pub use crate::sample::{random_sample, random_sample_with, Sample, SampleConfig};
pub use crate::take::{take, take_nth, take_while, Take, TakeNth, TakeWhile};

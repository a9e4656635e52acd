//! Probabilistic gate: `random_sample`.

use std::marker::PhantomData;

use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use reducer::{ReduceError, ReduceResult, Reduced, ReducingFunction, Stage};

/// Configuration for [`random_sample_with`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SampleConfig {
    /// Probability in `[0, 1]` that any single input is forwarded.
    pub probability: f64,
    /// Fixed seed for reproducible draws. `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl Default for SampleConfig {
    fn default() -> Self {
        Self {
            probability: 1.0,
            seed: None,
        }
    }
}

/// Forwards each input with a fixed probability.
///
/// The generator is part of the prototype, so every reduction run starts from
/// the same generator state: a seeded sampler picks the same positions each
/// time it is applied.
pub struct Sample<A> {
    probability: f64,
    rng: StdRng,
    _in: PhantomData<fn(A)>,
}

/// Forwards each input with probability `probability`, drawing from entropy.
pub fn random_sample<A>(probability: f64) -> ReduceResult<Sample<A>> {
    random_sample_with(SampleConfig {
        probability,
        ..SampleConfig::default()
    })
}

pub fn random_sample_with<A>(config: SampleConfig) -> ReduceResult<Sample<A>> {
    if !(0.0..=1.0).contains(&config.probability) {
        return Err(ReduceError::invalid(
            "random_sample",
            format!("probability {} is outside [0, 1]", config.probability),
        ));
    }
    let rng = match config.seed {
        Some(seed) => {
            debug!("seeded sampler p={} seed={seed}", config.probability);
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    };
    Ok(Sample {
        probability: config.probability,
        rng,
        _in: PhantomData,
    })
}

impl<A> Clone for Sample<A> {
    fn clone(&self) -> Self {
        Self {
            probability: self.probability,
            rng: self.rng.clone(),
            _in: PhantomData,
        }
    }
}

impl<A> Stage for Sample<A> {
    type In = A;
    type Out = A;

    fn step<R, F>(&mut self, inner: &mut F, acc: R, input: A, signal: &mut Reduced) -> R
    where
        F: ReducingFunction<R, A>,
    {
        if self.rng.gen_bool(self.probability) {
            inner.step(acc, input, signal)
        } else {
            acc
        }
    }
}

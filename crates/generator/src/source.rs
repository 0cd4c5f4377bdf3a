//! Uniform random sources.
//!
//! The generator consumes plain draws in [0, 1). Any [`rand::RngCore`] is a
//! source; [`SequenceSource`] replays a fixed list of draws so that outcomes
//! can be pinned down exactly.

use rand::Rng;

use crate::error::GenerateError;

/// A stream of uniform draws in [0, 1).
pub trait UniformSource {
    /// Returns the next draw in [0, 1).
    fn next_uniform(&mut self) -> f64;
}

impl<R: rand::RngCore> UniformSource for R {
    fn next_uniform(&mut self) -> f64 {
        self.random::<f64>()
    }
}

/// Replays a fixed sequence of draws, wrapping around at the end.
#[derive(Debug, Clone)]
pub struct SequenceSource {
    values: Vec<f64>,
    pos: usize,
    drawn: usize,
}

impl SequenceSource {
    /// Creates a source that cycles through `values`.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::InvalidSequence`] if `values` is empty or any
    /// value lies outside [0, 1).
    pub fn new(values: impl Into<Vec<f64>>) -> Result<Self, GenerateError> {
        let values = values.into();
        if values.is_empty() {
            return Err(GenerateError::InvalidSequence {
                reason: "sequence must contain at least one value".to_string(),
            });
        }
        if let Some(bad) = values.iter().find(|v| !(0.0..1.0).contains(*v)) {
            return Err(GenerateError::InvalidSequence {
                reason: format!("value {bad} is outside [0, 1)"),
            });
        }
        Ok(Self {
            values,
            pos: 0,
            drawn: 0,
        })
    }

    /// Creates a source that always returns `value`.
    pub fn constant(value: f64) -> Result<Self, GenerateError> {
        Self::new(vec![value])
    }

    /// Total number of draws taken so far.
    pub fn drawn(&self) -> usize {
        self.drawn
    }
}

impl UniformSource for SequenceSource {
    fn next_uniform(&mut self) -> f64 {
        let v = self.values[self.pos];
        self.pos = (self.pos + 1) % self.values.len();
        self.drawn += 1;
        v
    }
}

use rand::Rng;

use crate::error::{MlpError, Result};
use crate::neuron::neuron::Neuron;

/// An ordered row of sigmoid neurons sharing one input width.
///
/// A neuron's position in the row is its position in the output vector, so
/// `len()` is both the neuron count and the output width.
#[derive(Debug, Clone)]
pub struct Layer {
    input_width: usize,
    neurons: Vec<Neuron>,
}

impl Layer {
    /// Creates a layer of `size` neurons, each with `input_width` randomly
    /// initialized weights.
    pub fn new<R: Rng>(size: usize, input_width: usize, learning_rate: f64, rng: &mut R) -> Layer {
        let neurons = (0..size)
            .map(|_| Neuron::new(learning_rate, input_width, rng))
            .collect();

        Layer {
            input_width,
            neurons,
        }
    }

    /// Number of neurons, which is also the width of the output vector.
    pub fn len(&self) -> usize {
        self.neurons.len()
    }

    /// True for a layer built with zero neurons; such a layer maps every
    /// valid input to an empty output vector.
    pub fn is_empty(&self) -> bool {
        self.neurons.is_empty()
    }

    /// Width every input vector must have.
    pub fn input_width(&self) -> usize {
        self.input_width
    }

    pub fn neurons(&self) -> &[Neuron] {
        &self.neurons
    }

    fn check_input(&self, input: &[f64]) -> Result<()> {
        if input.len() != self.input_width {
            return Err(MlpError::DimensionMismatch {
                expected: self.input_width,
                found: input.len(),
            });
        }
        Ok(())
    }

    /// Maps `input` through every neuron; `output[i]` is neuron i's
    /// activation. Pure: no neuron is modified.
    pub fn feed(&self, input: &[f64]) -> Result<Vec<f64>> {
        self.check_input(input)?;
        Ok(self.neurons.iter().map(|n| n.feed(input)).collect())
    }

    /// Trains neuron i against the scalar target `expected[i]`.
    ///
    /// `expected` must hold exactly one target per neuron. Both lengths are
    /// checked before any neuron is touched, so a failed call leaves every
    /// weight and bias unchanged.
    pub fn train(&mut self, input: &[f64], expected: &[f64]) -> Result<()> {
        self.check_input(input)?;
        if expected.len() != self.neurons.len() {
            return Err(MlpError::DimensionMismatch {
                expected: self.neurons.len(),
                found: expected.len(),
            });
        }

        for (neuron, &target) in self.neurons.iter_mut().zip(expected) {
            neuron.train(input, target);
        }

        Ok(())
    }

    /// Trains every neuron against a shared target vector, cycling through
    /// its components when the layer is wider than the target. Identical to
    /// `train` when the widths match.
    ///
    /// `Network::train` uses this to push the network's final target into
    /// every layer, including hidden ones.
    pub(crate) fn train_shared(&mut self, input: &[f64], expected: &[f64]) -> Result<()> {
        self.check_input(input)?;
        if expected.is_empty() {
            return Err(MlpError::DimensionMismatch {
                expected: self.neurons.len(),
                found: 0,
            });
        }

        for (neuron, &target) in self.neurons.iter_mut().zip(expected.iter().cycle()) {
            neuron.train(input, target);
        }

        Ok(())
    }
}

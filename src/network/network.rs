use rand::Rng;

use crate::error::{MlpError, Result};
use crate::layers::dense::Layer;

/// An ordered stack of sigmoid layers, each feeding the next.
///
/// Layer widths are fixed at construction: layer 0 reads vectors of
/// `input_width` elements, and every later layer reads the previous layer's
/// output. `feed` and `train` validate their arguments against those widths
/// and return `MlpError::DimensionMismatch` before touching any parameter.
#[derive(Debug, Clone)]
pub struct Network {
    layers: Vec<Layer>,
}

impl Network {
    /// Builds a network with `layer_sizes[i]` neurons in layer i, drawing
    /// every initial weight and bias from the thread-local generator.
    ///
    /// Layer 0's input width is `input_width`; layer i>0's input width is
    /// `layer_sizes[i - 1]`.
    pub fn new(learning_rate: f64, input_width: usize, layer_sizes: &[usize]) -> Network {
        Network::with_rng(learning_rate, input_width, layer_sizes, &mut rand::thread_rng())
    }

    /// Same as `new`, but draws every initial parameter from `rng`. Seeding
    /// the generator makes construction fully reproducible.
    pub fn with_rng<R: Rng>(
        learning_rate: f64,
        input_width: usize,
        layer_sizes: &[usize],
        rng: &mut R,
    ) -> Network {
        let mut layers = Vec::with_capacity(layer_sizes.len());
        let mut width = input_width;

        for &size in layer_sizes {
            layers.push(Layer::new(size, width, learning_rate, rng));
            width = size;
        }

        Network { layers }
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    /// Width of the vectors `feed` and `train` accept. A network built with
    /// no layers accepts anything.
    pub fn input_width(&self) -> Option<usize> {
        self.layers.first().map(Layer::input_width)
    }

    /// Width of the vectors `feed` produces.
    pub fn output_width(&self) -> Option<usize> {
        self.layers.last().map(Layer::len)
    }

    /// Forward pass: threads `input` through every layer in order and
    /// returns the last layer's output. Pure; a network with no layers is
    /// the identity.
    pub fn feed(&self, input: &[f64]) -> Result<Vec<f64>> {
        let mut current = input.to_vec();

        for layer in &self.layers {
            current = layer.feed(&current)?;
        }

        Ok(current)
    }

    /// One supervised update step on a single example.
    ///
    /// Every layer is trained against the final target vector: layer by
    /// layer, the current input updates that layer's neurons toward
    /// `expected`, then is fed forward to become the next layer's input.
    /// Hidden layers therefore chase the network's final target directly
    /// rather than a backpropagated error signal, which keeps every update
    /// local to one layer. Hidden layers wider than `expected` reuse its
    /// components cyclically.
    ///
    /// `input` must match the first layer's input width and `expected` must
    /// hold one target per output neuron; both are checked before any weight
    /// moves. Training a network with no layers is a no-op.
    pub fn train(&mut self, input: &[f64], expected: &[f64]) -> Result<()> {
        let output_width = match self.output_width() {
            Some(width) => width,
            None => return Ok(()),
        };
        if expected.len() != output_width {
            return Err(MlpError::DimensionMismatch {
                expected: output_width,
                found: expected.len(),
            });
        }

        let first_width = self.layers[0].input_width();
        if input.len() != first_width {
            return Err(MlpError::DimensionMismatch {
                expected: first_width,
                found: input.len(),
            });
        }

        let mut current = input.to_vec();

        // Interior widths line up by construction, so these calls cannot
        // fail once the two boundary checks above have passed.
        for layer in &mut self.layers {
            layer.train_shared(&current, expected)?;
            current = layer.feed(&current)?;
        }

        Ok(())
    }
}

use rand::Rng;

use crate::activation::sigmoid::{sigmoid, sigmoid_derivative};
use crate::math::init::uniform_weight;

/// A single sigmoid unit: one weight per input, a bias, and the learning
/// rate applied by its delta-rule update.
///
/// The weight vector's length is fixed at construction and defines the
/// unit's input width.
#[derive(Debug, Clone)]
pub struct Neuron {
    learning_rate: f64,
    bias: f64,
    weights: Vec<f64>,
}

impl Neuron {
    /// Creates a neuron with `input_width` weights and a bias, all drawn
    /// uniformly from [-1, 1).
    pub fn new<R: Rng>(learning_rate: f64, input_width: usize, rng: &mut R) -> Neuron {
        let weights = (0..input_width).map(|_| uniform_weight(rng)).collect();

        Neuron {
            learning_rate,
            bias: uniform_weight(rng),
            weights,
        }
    }

    /// Number of inputs this neuron accepts.
    pub fn input_width(&self) -> usize {
        self.weights.len()
    }

    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    pub fn bias(&self) -> f64 {
        self.bias
    }

    /// Weighted sum of `input` plus bias, squashed through the sigmoid.
    /// Pure: no state is modified.
    ///
    /// `input` must hold exactly `input_width()` elements. The owning layer
    /// checks this before dispatching; a shorter slice panics on indexing.
    pub fn feed(&self, input: &[f64]) -> f64 {
        let mut sum = self.bias;

        for (i, weight) in self.weights.iter().enumerate() {
            sum += input[i] * weight;
        }

        sigmoid(sum)
    }

    /// One delta-rule update toward the scalar target `expected`.
    ///
    /// Recomputes the forward pass, then nudges every weight by
    /// `learning_rate * err * sigmoid_derivative(result) * input[i]` and the
    /// bias by the same term without the input factor.
    pub fn train(&mut self, input: &[f64], expected: f64) {
        let result = self.feed(input);
        let err = expected - result;
        let step = self.learning_rate * err * sigmoid_derivative(result);

        for (weight, x) in self.weights.iter_mut().zip(input) {
            *weight += step * x;
        }

        self.bias += step;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed(weights: Vec<f64>, bias: f64) -> Neuron {
        Neuron {
            learning_rate: 0.5,
            bias,
            weights,
        }
    }

    #[test]
    fn feed_is_sigmoid_of_weighted_sum() {
        let neuron = fixed(vec![1.0], 0.0);
        assert!((neuron.feed(&[2.0]) - 0.8807970779778823).abs() < 1e-12);
    }

    #[test]
    fn feed_applies_bias() {
        let neuron = fixed(vec![0.0, 0.0], 0.0);
        assert_eq!(neuron.feed(&[3.0, -1.0]), 0.5);

        let neuron = fixed(vec![0.5, -0.25], 1.0);
        let expected = sigmoid(1.0 + 0.5 * 2.0 - 0.25 * 4.0);
        assert!((neuron.feed(&[2.0, 4.0]) - expected).abs() < 1e-12);
    }

    #[test]
    fn feed_is_pure() {
        let neuron = fixed(vec![0.3, -0.7], 0.2);
        let input = [1.5, -2.5];
        assert_eq!(neuron.feed(&input), neuron.feed(&input));
        assert_eq!(neuron.weights(), &[0.3, -0.7]);
        assert_eq!(neuron.bias(), 0.2);
    }

    #[test]
    fn positive_error_moves_weights_along_input_sign() {
        let mut neuron = fixed(vec![0.5, -0.4], 0.1);
        let input = [1.0, -2.0];

        // Target above the current output, so err > 0: the first weight
        // (positive input) must rise, the second (negative input) must drop,
        // and the bias must rise.
        assert!(neuron.feed(&input) < 1.0);
        neuron.train(&input, 1.0);

        assert!(neuron.weights()[0] > 0.5);
        assert!(neuron.weights()[1] < -0.4);
        assert!(neuron.bias() > 0.1);
    }

    #[test]
    fn training_moves_output_toward_target() {
        let mut neuron = fixed(vec![0.2], -0.3);
        let input = [1.0];

        let before = neuron.feed(&input);
        neuron.train(&input, 0.9);
        let after = neuron.feed(&input);

        assert!((0.9 - after).abs() < (0.9 - before).abs());
    }

    #[test]
    fn update_matches_delta_rule_exactly() {
        let mut neuron = fixed(vec![0.5], 0.0);
        let input = [2.0];

        let result = neuron.feed(&input);
        let step = 0.5 * (1.0 - result) * sigmoid_derivative(result);
        neuron.train(&input, 1.0);

        assert!((neuron.weights()[0] - (0.5 + step * 2.0)).abs() < 1e-12);
        assert!((neuron.bias() - step).abs() < 1e-12);
    }
}

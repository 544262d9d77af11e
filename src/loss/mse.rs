/// Mean-squared error over one output vector.
///
/// The library never loops over a dataset itself, so this is a monitoring
/// helper for the caller's training loop rather than part of the update
/// rule; the delta rule inside `Neuron::train` works from the raw
/// per-component error.
pub struct MseLoss;

impl MseLoss {
    /// Scalar MSE: mean((predicted - expected)²)
    pub fn loss(predicted: &[f64], expected: &[f64]) -> f64 {
        let n = predicted.len() as f64;
        predicted
            .iter()
            .zip(expected.iter())
            .map(|(a, b)| (a - b).powi(2))
            .sum::<f64>()
            / n
    }
}

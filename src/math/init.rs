use rand::Rng;

/// Draws one initial parameter value, uniform over [-1, 1).
///
/// Every weight and bias in a freshly constructed network comes from this
/// single helper, so reproducible construction only requires seeding the
/// generator handed to `Network::with_rng`.
pub fn uniform_weight<R: Rng>(rng: &mut R) -> f64 {
    rng.gen::<f64>() * 2.0 - 1.0
}

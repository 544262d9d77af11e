use std::f64::consts::E;

/// Logistic sigmoid, `1 / (1 + e^-x)`, bounded in (0, 1).
pub fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + E.powf(-x))
}

/// Derivative of the sigmoid expressed in terms of its own output: for
/// `y = sigmoid(x)`, `dy/dx = y * (1 - y)`.
///
/// The argument is the activation already produced by `sigmoid`, not the
/// pre-activation sum; the delta-rule update reuses the forward result this
/// way without evaluating the exponential a second time.
pub fn sigmoid_derivative(y: f64) -> f64 {
    y * (1.0 - y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sigmoid_of_zero_is_one_half() {
        assert_eq!(sigmoid(0.0), 0.5);
    }

    #[test]
    fn sigmoid_stays_in_open_unit_interval() {
        // Above x ≈ 37 the f64 result rounds to exactly 1.0, so stay within
        // the range where the open interval is representable.
        for x in [-30.0, -4.2, -1.0, 0.3, 7.7, 30.0] {
            let y = sigmoid(x);
            assert!(y > 0.0 && y < 1.0, "sigmoid({x}) = {y} out of (0, 1)");
        }
    }

    #[test]
    fn sigmoid_saturates_toward_the_boundaries() {
        assert!(sigmoid(50.0) <= 1.0);
        assert!(sigmoid(50.0) > 0.999);
        assert!(sigmoid(-50.0) >= 0.0);
        assert!(sigmoid(-50.0) < 1e-20);
    }

    #[test]
    fn sigmoid_of_two_matches_known_value() {
        assert!((sigmoid(2.0) - 0.8807970779778823).abs() < 1e-12);
    }

    #[test]
    fn derivative_peaks_at_one_half() {
        assert_eq!(sigmoid_derivative(0.5), 0.25);
        assert!(sigmoid_derivative(0.9) < 0.25);
        assert!(sigmoid_derivative(0.1) < 0.25);
    }
}

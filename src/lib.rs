pub mod activation;
pub mod error;
pub mod layers;
pub mod loss;
pub mod math;
pub mod network;
pub mod neuron;

// Convenience re-exports
pub use activation::sigmoid::{sigmoid, sigmoid_derivative};
pub use error::{MlpError, Result};
pub use layers::dense::Layer;
pub use loss::mse::MseLoss;
pub use network::network::Network;
pub use neuron::neuron::Neuron;

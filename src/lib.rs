pub mod math;
pub mod activation;
pub mod layers;
pub mod loss;
pub mod network;
pub mod optim;
pub mod train;
pub mod data;
pub mod config;
pub mod error;

// Convenience re-exports
pub use math::matrix::Matrix;
pub use layers::dense::Layer;
pub use network::{Gradient, Network};
pub use loss::QuadraticCost;
pub use optim::sgd::Sgd;
pub use data::Example;
pub use config::RunSpec;
pub use error::{NetworkError, Result};
pub use train::{evaluate, train_loop, train_network, EpochStats, TrainConfig};

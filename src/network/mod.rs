pub mod backprop;
pub mod network;

pub use backprop::Gradient;
pub use network::Network;

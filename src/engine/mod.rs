//! Network core: topology construction, propagation and training helpers.

pub mod activation;
pub mod loss;
pub mod metric;
pub mod network;
pub mod topology;
pub mod trainer;

pub use network::Network;
pub use topology::Topology;

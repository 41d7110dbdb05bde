use crate::problem::{network::Network, network::NetworkBuilder, network_error::NetworkError};

/// Network used when no network file is configured: three centers C1, C2 and
/// C3 delivering to L1. Center-to-center distances go both ways, the legs
/// into L1 only one way.
pub fn default_network() -> Result<Network, NetworkError> {
    let mut builder = NetworkBuilder::default();

    builder
        .set_product_weight(0.5)
        .set_sink("L1")
        .add_source("C1", [("A", 3.0), ("B", 2.0), ("C", 5.0)])
        .add_source("C2", [("A", 2.0), ("B", 3.0), ("C", 2.0)])
        .add_source("C3", [("A", 1.0), ("B", 1.0), ("C", 3.0)])
        .add_symmetric_distance("C1", "C2", 10.0)
        .add_symmetric_distance("C1", "C3", 20.0)
        .add_symmetric_distance("C2", "C3", 15.0)
        .add_distance("C1", "L1", 30.0)
        .add_distance("C2", "L1", 35.0)
        .add_distance("C3", "L1", 40.0);

    builder.build()
}

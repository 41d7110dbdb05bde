use crate::{
    default_network::default_network,
    problem::{
        network::{Network, NetworkBuilder},
        order::Order,
    },
};

pub fn create_default_network() -> Network {
    default_network().unwrap()
}

pub fn create_network(
    sink: &str,
    sources: Vec<(&str, Vec<(&str, f64)>)>,
    distances: &[(&str, &str, f64)],
) -> Network {
    let mut builder = NetworkBuilder::default();
    builder.set_sink(sink);

    for (id, stock) in sources {
        builder.add_source(id, stock);
    }

    for &(from, to, distance) in distances {
        builder.add_distance(from, to, distance);
    }

    builder.build().unwrap()
}

pub fn create_order(network: &Network, items: &[(&str, f64)]) -> Order {
    Order::new(network, items.iter().copied()).unwrap()
}

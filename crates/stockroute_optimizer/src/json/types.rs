use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::problem::{
    network::{Network, NetworkBuilder, PRODUCT_WEIGHT},
    network_error::NetworkError,
};

#[derive(Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields, rename = "Network")]
pub struct JsonNetwork {
    /// Weight of one unit of any product
    #[serde(default = "default_product_weight")]
    pub product_weight: f64,
    /// Destination every route ends at
    pub sink: String,
    pub sources: Vec<JsonSource>,
    pub distances: Vec<JsonDistance>,
}

#[derive(Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields, rename = "Source")]
pub struct JsonSource {
    pub id: String,
    /// Available quantity per product id
    pub stock: BTreeMap<String, f64>,
}

#[derive(Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields, rename = "Distance")]
pub struct JsonDistance {
    pub from: String,
    pub to: String,
    pub distance: f64,
}

fn default_product_weight() -> f64 {
    PRODUCT_WEIGHT
}

impl JsonNetwork {
    pub fn build_network(self) -> Result<Network, NetworkError> {
        let mut builder = NetworkBuilder::default();
        builder
            .set_product_weight(self.product_weight)
            .set_sink(self.sink);

        for source in self.sources {
            builder.add_source(source.id, source.stock);
        }

        for distance in self.distances {
            builder.add_distance(distance.from, distance.to, distance.distance);
        }

        builder.build()
    }

    pub fn from_network(network: &Network) -> Self {
        let sources = network
            .sources()
            .iter()
            .map(|&node| JsonSource {
                id: network.node_id(node).to_owned(),
                stock: network
                    .products()
                    .iter()
                    .enumerate()
                    .filter_map(|(index, product)| {
                        let product_idx = index.into();
                        network.stock().holds(node, product_idx).then(|| {
                            (
                                product.external_id().to_owned(),
                                network.available(node, product_idx),
                            )
                        })
                    })
                    .collect(),
            })
            .collect();

        let distances = network
            .distances()
            .entries()
            .map(|(from, to, distance)| JsonDistance {
                from: network.node_id(from).to_owned(),
                to: network.node_id(to).to_owned(),
                distance,
            })
            .collect();

        JsonNetwork {
            product_weight: network.product_weight(),
            sink: network.node_id(network.sink()).to_owned(),
            sources,
            distances,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils;

    #[test]
    fn test_deserialize_network() {
        let json = r#"{
            "sink": "L1",
            "sources": [
                { "id": "C1", "stock": { "A": 3 } },
                { "id": "C2", "stock": { "A": 1, "B": 4 } }
            ],
            "distances": [
                { "from": "C1", "to": "C2", "distance": 10 },
                { "from": "C2", "to": "L1", "distance": 12.5 }
            ]
        }"#;

        let network: JsonNetwork = serde_json::from_str(json).unwrap();
        assert_eq!(network.product_weight, PRODUCT_WEIGHT);

        let network = network.build_network().unwrap();
        let c2 = network.find_node("C2").unwrap();
        let b = network.find_product("B").unwrap();

        assert_eq!(network.sources().len(), 2);
        assert_eq!(network.available(c2, b), 4.0);
        assert_eq!(network.distance(c2, network.sink()).resolve(), 12.5);
    }

    #[test]
    fn test_rejects_unknown_fields() {
        let json = r#"{ "sink": "L1", "sources": [], "distances": [], "depots": [] }"#;
        assert!(serde_json::from_str::<JsonNetwork>(json).is_err());
    }

    #[test]
    fn test_build_reports_network_errors() {
        let json = r#"{ "sink": "L1", "sources": [], "distances": [] }"#;
        let network: JsonNetwork = serde_json::from_str(json).unwrap();

        assert_eq!(network.build_network().unwrap_err(), NetworkError::NoSources);
    }

    #[test]
    fn test_from_network() {
        let network = test_utils::create_default_network();
        let json = JsonNetwork::from_network(&network);

        assert_eq!(json.sink, "L1");
        assert_eq!(json.product_weight, 0.5);
        assert_eq!(json.sources.len(), 3);
        assert_eq!(json.sources[0].id, "C1");
        assert_eq!(json.sources[0].stock.get("C"), Some(&5.0));
        assert_eq!(json.distances.len(), 9);
        assert!(
            json.distances
                .iter()
                .all(|distance| distance.from != "L1")
        );
    }
}

use fxhash::FxHashMap;

use super::{
    distance_matrix::{Distance, DistanceMatrix},
    network_error::NetworkError,
    node::{Node, NodeIdx, NodeKind},
    product::{Product, ProductIdx},
    stock::Stock,
};

/// Weight of one unit of any product.
pub const PRODUCT_WEIGHT: f64 = 0.5;

/// Every candidate route is a permutation of the source nodes, so the
/// evaluator simulates `sources!` routes. 9 sources already means 362 880
/// simulations per order; the builder refuses anything larger.
pub const MAX_SOURCE_NODES: usize = 9;

/// Static description of the sources, the sink, their stock and the
/// distances between them. Immutable once built.
#[derive(Debug, Clone)]
pub struct Network {
    nodes: Vec<Node>,
    products: Vec<Product>,
    sources: Vec<NodeIdx>,
    sink: NodeIdx,
    stock: Stock,
    distances: DistanceMatrix,
    product_weight: f64,

    node_index: FxHashMap<String, NodeIdx>,
    product_index: FxHashMap<String, ProductIdx>,
}

impl Network {
    pub fn node_id(&self, node: NodeIdx) -> &str {
        self.nodes[node].external_id()
    }

    pub fn find_node(&self, external_id: &str) -> Option<NodeIdx> {
        self.node_index.get(external_id).copied()
    }

    pub fn sources(&self) -> &[NodeIdx] {
        &self.sources
    }

    pub fn sink(&self) -> NodeIdx {
        self.sink
    }

    #[inline]
    pub fn is_source(&self, node: NodeIdx) -> bool {
        self.nodes[node].is_source()
    }

    #[inline]
    pub fn is_sink(&self, node: NodeIdx) -> bool {
        node == self.sink
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn find_product(&self, external_id: &str) -> Option<ProductIdx> {
        self.product_index.get(external_id).copied()
    }

    pub fn stock(&self) -> &Stock {
        &self.stock
    }

    #[inline]
    pub fn available(&self, node: NodeIdx, product: ProductIdx) -> f64 {
        self.stock.available(node, product)
    }

    #[inline]
    pub fn distance(&self, from: NodeIdx, to: NodeIdx) -> Distance {
        self.distances.get(from, to)
    }

    pub fn distances(&self) -> &DistanceMatrix {
        &self.distances
    }

    pub fn product_weight(&self) -> f64 {
        self.product_weight
    }

    /// Requested product ids that no source node lists in its stock,
    /// in the order they were given.
    pub fn unknown_products<'a, I>(&self, product_ids: I) -> Vec<&'a str>
    where
        I: IntoIterator<Item = &'a str>,
    {
        product_ids
            .into_iter()
            .filter(|id| !self.product_index.contains_key(*id))
            .collect()
    }

    pub fn display_route(&self, route: &[NodeIdx]) -> String {
        route
            .iter()
            .map(|&node| self.node_id(node))
            .collect::<Vec<_>>()
            .join(" -> ")
    }
}

#[derive(Default)]
pub struct NetworkBuilder {
    product_weight: Option<f64>,
    sink: Option<String>,
    sources: Vec<(String, Vec<(String, f64)>)>,
    distances: Vec<(String, String, f64)>,
}

impl NetworkBuilder {
    pub fn set_product_weight(&mut self, product_weight: f64) -> &mut NetworkBuilder {
        self.product_weight = Some(product_weight);
        self
    }

    pub fn set_sink(&mut self, external_id: impl Into<String>) -> &mut NetworkBuilder {
        self.sink = Some(external_id.into());
        self
    }

    pub fn add_source<I, P>(
        &mut self,
        external_id: impl Into<String>,
        stock: I,
    ) -> &mut NetworkBuilder
    where
        I: IntoIterator<Item = (P, f64)>,
        P: Into<String>,
    {
        self.sources.push((
            external_id.into(),
            stock
                .into_iter()
                .map(|(product, quantity)| (product.into(), quantity))
                .collect(),
        ));
        self
    }

    pub fn add_distance(
        &mut self,
        from: impl Into<String>,
        to: impl Into<String>,
        distance: f64,
    ) -> &mut NetworkBuilder {
        self.distances.push((from.into(), to.into(), distance));
        self
    }

    /// Adds `from -> to` and `to -> from` with the same distance.
    pub fn add_symmetric_distance(
        &mut self,
        from: impl Into<String>,
        to: impl Into<String>,
        distance: f64,
    ) -> &mut NetworkBuilder {
        let from = from.into();
        let to = to.into();
        self.distances.push((from.clone(), to.clone(), distance));
        self.distances.push((to, from, distance));
        self
    }

    pub fn build(self) -> Result<Network, NetworkError> {
        if self.sources.is_empty() {
            return Err(NetworkError::NoSources);
        }

        if self.sources.len() > MAX_SOURCE_NODES {
            return Err(NetworkError::TooManySources {
                count: self.sources.len(),
                max: MAX_SOURCE_NODES,
            });
        }

        let sink_id = self.sink.ok_or(NetworkError::MissingSink)?;

        let product_weight = self.product_weight.unwrap_or(PRODUCT_WEIGHT);
        if !product_weight.is_finite() || product_weight < 0.0 {
            return Err(NetworkError::InvalidProductWeight(product_weight));
        }

        let mut nodes = Vec::with_capacity(self.sources.len() + 1);
        let mut node_index = FxHashMap::default();
        for (external_id, _) in &self.sources {
            let idx = NodeIdx::new(nodes.len());
            if node_index.insert(external_id.clone(), idx).is_some() {
                return Err(NetworkError::DuplicateNode(external_id.clone()));
            }
            nodes.push(Node::new(external_id.clone(), NodeKind::Source));
        }

        let sink = NodeIdx::new(nodes.len());
        if node_index.insert(sink_id.clone(), sink).is_some() {
            return Err(NetworkError::DuplicateNode(sink_id));
        }
        nodes.push(Node::new(sink_id, NodeKind::Sink));

        let mut products = Vec::new();
        let mut product_index: FxHashMap<String, ProductIdx> = FxHashMap::default();
        for (_, stock) in &self.sources {
            for (product, _) in stock {
                if !product_index.contains_key(product) {
                    product_index.insert(product.clone(), ProductIdx::new(products.len()));
                    products.push(Product::new(product.clone()));
                }
            }
        }

        let mut stock = Stock::new(nodes.len(), products.len());
        for (node_position, (node_id, entries)) in self.sources.iter().enumerate() {
            let node = NodeIdx::new(node_position);
            for (product_id, quantity) in entries {
                if !quantity.is_finite() || *quantity < 0.0 {
                    return Err(NetworkError::InvalidStock {
                        node: node_id.clone(),
                        product: product_id.clone(),
                        quantity: *quantity,
                    });
                }

                let product = product_index[product_id];
                if !stock.set(node, product, *quantity) {
                    return Err(NetworkError::DuplicateStock {
                        node: node_id.clone(),
                        product: product_id.clone(),
                    });
                }
            }
        }

        let mut distances = DistanceMatrix::new(nodes.len());
        for (from_id, to_id, distance) in self.distances {
            let from = *node_index
                .get(&from_id)
                .ok_or_else(|| NetworkError::UnknownNode(from_id.clone()))?;
            let to = *node_index
                .get(&to_id)
                .ok_or_else(|| NetworkError::UnknownNode(to_id.clone()))?;

            if !distance.is_finite() || distance < 0.0 {
                return Err(NetworkError::InvalidDistance {
                    from: from_id,
                    to: to_id,
                    distance,
                });
            }

            if distances.set(from, to, distance).is_some() {
                return Err(NetworkError::DuplicateDistance {
                    from: from_id,
                    to: to_id,
                });
            }
        }

        let sources = (0..self.sources.len()).map(NodeIdx::new).collect();

        Ok(Network {
            nodes,
            products,
            sources,
            sink,
            stock,
            distances,
            product_weight,
            node_index,
            product_index,
        })
    }
}

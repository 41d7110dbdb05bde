use super::{node::NodeIdx, product::ProductIdx};

/// Available quantity per node and product, flat `node * num_products + product`.
/// The sink row stays at zero.
#[derive(Debug, Clone)]
pub struct Stock {
    quantities: Vec<f64>,
    held: Vec<bool>,
    num_products: usize,
}

impl Stock {
    pub fn new(num_nodes: usize, num_products: usize) -> Self {
        Stock {
            quantities: vec![0.0; num_nodes * num_products],
            held: vec![false; num_nodes * num_products],
            num_products,
        }
    }

    #[inline(always)]
    fn index(&self, node: NodeIdx, product: ProductIdx) -> usize {
        node.get() * self.num_products + product.get()
    }

    /// Returns false when the node already listed this product.
    pub fn set(&mut self, node: NodeIdx, product: ProductIdx, quantity: f64) -> bool {
        let index = self.index(node, product);
        let first = !self.held[index];
        self.quantities[index] = quantity;
        self.held[index] = true;
        first
    }

    #[inline]
    pub fn available(&self, node: NodeIdx, product: ProductIdx) -> f64 {
        self.quantities
            .get(self.index(node, product))
            .copied()
            .unwrap_or(0.0)
    }

    /// Whether the node lists the product in its stock, even with zero units.
    pub fn holds(&self, node: NodeIdx, product: ProductIdx) -> bool {
        self.held
            .get(self.index(node, product))
            .copied()
            .unwrap_or(false)
    }
}

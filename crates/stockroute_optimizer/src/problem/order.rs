use thiserror::Error;

use super::{network::Network, product::ProductIdx};

#[derive(Error, Debug, PartialEq)]
pub enum OrderError {
    #[error("Invalid quantity {quantity} for product {product}")]
    InvalidQuantity { product: String, quantity: f64 },

    #[error("Product {0} is ordered more than once")]
    DuplicateProduct(String),
}

#[derive(Debug, Clone)]
pub struct OrderLine {
    external_id: String,
    product: Option<ProductIdx>,
    quantity: f64,
}

impl OrderLine {
    pub fn external_id(&self) -> &str {
        &self.external_id
    }

    /// `None` when no source node holds this product; it then has zero
    /// stock everywhere.
    pub fn product(&self) -> Option<ProductIdx> {
        self.product
    }

    pub fn quantity(&self) -> f64 {
        self.quantity
    }
}

/// Required quantity per product, resolved against a network.
#[derive(Debug, Clone)]
pub struct Order {
    lines: Vec<OrderLine>,
}

impl Order {
    pub fn new<I, P>(network: &Network, items: I) -> Result<Self, OrderError>
    where
        I: IntoIterator<Item = (P, f64)>,
        P: Into<String>,
    {
        let mut lines: Vec<OrderLine> = Vec::new();

        for (external_id, quantity) in items {
            let external_id = external_id.into();

            if !quantity.is_finite() || quantity < 0.0 {
                return Err(OrderError::InvalidQuantity {
                    product: external_id,
                    quantity,
                });
            }

            if lines.iter().any(|line| line.external_id == external_id) {
                return Err(OrderError::DuplicateProduct(external_id));
            }

            lines.push(OrderLine {
                product: network.find_product(&external_id),
                external_id,
                quantity,
            });
        }

        Ok(Order { lines })
    }

    pub fn lines(&self) -> &[OrderLine] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn total_quantity(&self) -> f64 {
        self.lines.iter().map(|line| line.quantity).sum()
    }
}

use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum NetworkError {
    #[error("Network has no source node")]
    NoSources,

    #[error("Network has no sink node")]
    MissingSink,

    #[error("Too many source nodes: {count} (maximum {max})")]
    TooManySources { count: usize, max: usize },

    #[error("Node {0} is defined more than once")]
    DuplicateNode(String),

    #[error("Unknown node {0}")]
    UnknownNode(String),

    #[error("Invalid distance {distance} from {from} to {to}")]
    InvalidDistance {
        from: String,
        to: String,
        distance: f64,
    },

    #[error("Distance from {from} to {to} is defined more than once")]
    DuplicateDistance { from: String, to: String },

    #[error("Invalid stock {quantity} of product {product} at {node}")]
    InvalidStock {
        node: String,
        product: String,
        quantity: f64,
    },

    #[error("Product {product} is listed more than once at {node}")]
    DuplicateStock { node: String, product: String },

    #[error("Invalid product weight {0}")]
    InvalidProductWeight(f64),
}

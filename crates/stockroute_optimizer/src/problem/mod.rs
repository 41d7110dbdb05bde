pub mod distance_matrix;
pub mod network;
pub mod network_error;
pub mod node;
pub mod order;
pub mod product;
pub mod quantities;
pub mod stock;

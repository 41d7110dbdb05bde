pub mod get_network;
pub mod routes;

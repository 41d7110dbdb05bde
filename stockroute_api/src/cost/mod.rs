pub mod calculate_cost;
pub mod routes;

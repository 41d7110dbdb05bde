use std::sync::Arc;

use axum::{Json, extract::State};
use stockroute_optimizer::json::types::JsonNetwork;

use crate::state::AppState;

/// Sources, stock, distances and product weight the evaluator runs with.
pub async fn get_network_handler(State(state): State<Arc<AppState>>) -> Json<JsonNetwork> {
    Json(JsonNetwork::from_network(state.evaluator.network()))
}

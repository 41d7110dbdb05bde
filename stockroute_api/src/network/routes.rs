use std::sync::Arc;

use aide::axum::{ApiRouter, routing::get};

use crate::{network::get_network::get_network_handler, state::AppState};

pub fn network_routes() -> ApiRouter<Arc<AppState>> {
    aide::generate::infer_responses(true);
    let router = ApiRouter::new().api_route("/network", get(get_network_handler));

    aide::generate::infer_responses(false);

    router
}

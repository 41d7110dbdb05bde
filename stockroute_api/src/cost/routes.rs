use std::sync::Arc;

use aide::axum::{ApiRouter, routing::post};

use crate::{cost::calculate_cost::calculate_cost_handler, state::AppState};

pub fn cost_routes() -> ApiRouter<Arc<AppState>> {
    aide::generate::infer_responses(true);
    let router = ApiRouter::new().api_route("/calculate-cost", post(calculate_cost_handler));

    aide::generate::infer_responses(false);

    router
}

#[cfg(test)]
mod tests {
    use aide::openapi::OpenApi;

    use super::*;

    #[test]
    fn test_cost_routes_only_serve_cost() {
        let mut api = OpenApi::default();
        let _router = cost_routes().finish_api(&mut api);

        let paths = api.paths.unwrap().paths;
        assert!(paths.contains_key("/calculate-cost"));
        assert!(!paths.contains_key("/network"));
    }
}

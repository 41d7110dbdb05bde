mod config;
mod cost;
mod docs;
mod error;
mod health;
mod network;
mod parsers;
mod state;

use crate::config::ApiConfig;
use crate::cost::routes::cost_routes;
use crate::docs::docs_routes;
use crate::health::health_handler;
use crate::network::routes::network_routes;
use crate::state::AppState;
use aide::openapi::OpenApi;
use aide::transform::TransformOpenApi;
use axum::http::Method;
use axum::routing::get;
use axum::{Extension, serve};
use std::sync::Arc;
use stockroute_optimizer::solver::evaluator::Evaluator;
use stockroute_optimizer::solver::evaluator_params::EvaluatorParams;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tracing::{Level, info};

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::from_filename("./.env.local").ok();
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();
    aide::generate::on_error(|error| tracing::error!("{}", error));
    aide::generate::extract_schemas(true);

    let config = ApiConfig::from_env()?;
    let network = config.load_network()?;

    info!(
        sources = network.sources().len(),
        products = network.products().len(),
        billing = %config.billing,
        timeout = ?config.evaluation_timeout,
        "network ready"
    );

    let state = Arc::new(AppState {
        evaluator: Evaluator::new(
            Arc::new(network),
            EvaluatorParams {
                billing: config.billing,
            },
        ),
        evaluation_timeout: config.evaluation_timeout,
    });

    let cors_layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_origin(Any)
        .allow_headers(Any);

    let mut api = OpenApi::default();

    let app = aide::axum::ApiRouter::new()
        .nest_api_service("/docs", docs_routes(state.clone()))
        .route("/", get(health_handler))
        .merge(cost_routes())
        .merge(network_routes())
        .finish_api_with(&mut api, api_docs);

    if std::env::args().any(|a| a == "--generate-openapi") {
        use std::fs::File;
        use std::io::Write;

        let mut file = File::create("schemas/openapi.json")?;
        let spec = serde_json::to_string_pretty(&api)?;
        file.write_all(spec.as_bytes())?;
        info!("OpenAPI specification has been written to openapi.json");
        return Ok(());
    }

    let app = app
        .layer(ServiceBuilder::new().layer(cors_layer))
        .layer(Extension(Arc::new(api)))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(&config.addr).await?;
    info!(addr = %config.addr, "listening");

    serve(listener, app).await?;

    Ok(())
}

fn api_docs(api: TransformOpenApi) -> TransformOpenApi {
    api.title("Stockroute Open API")
}

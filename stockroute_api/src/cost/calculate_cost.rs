use std::{collections::BTreeMap, fmt, sync::Arc, time::Duration};

use axum::{Json, extract::State};
use schemars::JsonSchema;
use serde::{
    Deserialize, Deserializer, Serialize,
    de::{MapAccess, Visitor},
};
use stockroute_optimizer::{
    problem::{network::Network, order::Order},
    solver::evaluation::Evaluation,
};
use tracing::{info, warn};

use crate::{error::ApiError, state::AppState};

#[derive(Deserialize, JsonSchema)]
pub struct CalculateCostRequest {
    /// Required quantity per product id
    #[serde(default, deserialize_with = "deserialize_order")]
    #[schemars(with = "Option<BTreeMap<String, f64>>")]
    pub order: Option<Vec<(String, f64)>>,
}

#[derive(Debug, Serialize, JsonSchema)]
pub struct CalculateCostResponse {
    /// Minimum cost rounded to two decimals, -1 when no route can fulfil the order
    pub minimum_cost: f64,
}

/// Order items in the order they appear in the request body. A repeated id
/// keeps its first position and takes the last quantity.
struct OrderItems(Vec<(String, f64)>);

impl<'de> Deserialize<'de> for OrderItems {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct OrderItemsVisitor;

        impl<'de> Visitor<'de> for OrderItemsVisitor {
            type Value = OrderItems;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a map of product ids to quantities")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut items: Vec<(String, f64)> =
                    Vec::with_capacity(map.size_hint().unwrap_or(0));

                while let Some((product, quantity)) = map.next_entry::<String, f64>()? {
                    match items.iter_mut().find(|(id, _)| *id == product) {
                        Some(item) => item.1 = quantity,
                        None => items.push((product, quantity)),
                    }
                }

                Ok(OrderItems(items))
            }
        }

        deserializer.deserialize_map(OrderItemsVisitor)
    }
}

fn deserialize_order<'de, D>(deserializer: D) -> Result<Option<Vec<(String, f64)>>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<OrderItems>::deserialize(deserializer)?.map(|items| items.0))
}

pub async fn calculate_cost_handler(
    State(state): State<Arc<AppState>>,
    Json(body): Json<CalculateCostRequest>,
) -> Result<Json<CalculateCostResponse>, ApiError> {
    let order = validate_order(state.evaluator.network(), body.order)?;

    info!(lines = order.len(), "calculating cost");
    let task_state = Arc::clone(&state);
    let evaluation: Evaluation = run_with_timeout(state.evaluation_timeout, move || {
        task_state.evaluator.evaluate(&order)
    })
    .await?;

    Ok(Json(CalculateCostResponse {
        minimum_cost: evaluation.to_reported_cost(),
    }))
}

fn validate_order(
    network: &Network,
    order: Option<Vec<(String, f64)>>,
) -> Result<Order, ApiError> {
    let order = match order {
        Some(order) if !order.is_empty() => order,
        _ => return Err(ApiError::BadRequest(String::from("No order provided"))),
    };

    let missing = network.unknown_products(order.iter().map(|(product, _)| product.as_str()));
    if !missing.is_empty() {
        return Err(ApiError::BadRequest(format!(
            "Products not available in any center: {}",
            missing.join(", ")
        )));
    }

    Ok(Order::new(network, order)?)
}

/// Runs `task` on the blocking pool, bounded by `timeout`.
///
/// On timeout only the join handle is dropped: the blocking task keeps running
/// to completion and holds its pool thread until then.
async fn run_with_timeout<T, F>(timeout: Duration, task: F) -> Result<T, ApiError>
where
    T: Send + 'static,
    F: FnOnce() -> T + Send + 'static,
{
    let handle = tokio::task::spawn_blocking(task);

    match tokio::time::timeout(timeout, handle).await {
        Ok(Ok(output)) => Ok(output),
        Ok(Err(error)) => Err(ApiError::InternalServerError(error.to_string())),
        Err(_) => {
            warn!(?timeout, "evaluation timed out");
            Err(ApiError::ServiceUnavailable(format!(
                "Evaluation did not finish within {timeout:?}"
            )))
        }
    }
}

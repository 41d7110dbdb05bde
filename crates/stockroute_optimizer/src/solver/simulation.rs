use serde::Serialize;

use crate::problem::{
    distance_matrix::Distance, network::Network, node::NodeIdx, order::Order,
    quantities::Quantities,
};

use super::leg_billing::LegBilling;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegCost {
    pub from: NodeIdx,
    pub to: NodeIdx,
    #[serde(skip)]
    pub distance: Distance,
    /// Weight carried across the leg, after picking up at `from`.
    pub weight: f64,
    pub cost: f64,
}

/// Outcome of walking one candidate route.
#[derive(Debug, Clone)]
pub struct RouteSimulation {
    route: Vec<NodeIdx>,
    legs: Vec<LegCost>,
    collected: Quantities,
    cost: f64,
    feasible: bool,
}

impl RouteSimulation {
    pub fn route(&self) -> &[NodeIdx] {
        &self.route
    }

    pub fn legs(&self) -> &[LegCost] {
        &self.legs
    }

    /// Collected quantity per order line, in order line order.
    pub fn collected(&self) -> &Quantities {
        &self.collected
    }

    pub fn cost(&self) -> f64 {
        self.cost
    }

    /// Whether every order line was fully collected.
    pub fn is_feasible(&self) -> bool {
        self.feasible
    }
}

/// Walks `route` leg by leg. At each source node every order line still short
/// of its requirement takes `min(remaining need, available)`; the leg leaving
/// that node is then charged with the total carried weight times the leg
/// distance. Stock is read from the network and never consumed, so every
/// simulation starts from the full table.
pub fn simulate_route(
    network: &Network,
    order: &Order,
    route: Vec<NodeIdx>,
    billing: LegBilling,
) -> RouteSimulation {
    let mut collected = Quantities::zeros(order.len());
    let mut legs = Vec::with_capacity(route.len().saturating_sub(1));
    let mut cost = 0.0;

    for pair in route.windows(2) {
        let (from, to) = (pair[0], pair[1]);

        if network.is_source(from) {
            collect_at(network, order, from, &mut collected);
        }

        let weight = collected.total() * network.product_weight();
        let distance = network.distance(from, to);
        let leg_cost = if billing.charges(network.is_sink(to)) {
            weight * distance.resolve()
        } else {
            0.0
        };

        cost += leg_cost;
        legs.push(LegCost {
            from,
            to,
            distance,
            weight,
            cost: leg_cost,
        });
    }

    let feasible = order
        .lines()
        .iter()
        .enumerate()
        .all(|(index, line)| collected.get(index) >= line.quantity());

    RouteSimulation {
        route,
        legs,
        collected,
        cost,
        feasible,
    }
}

fn collect_at(network: &Network, order: &Order, node: NodeIdx, collected: &mut Quantities) {
    for (index, line) in order.lines().iter().enumerate() {
        let needed = line.quantity() - collected.get(index);
        if needed <= 0.0 {
            continue;
        }

        let available = line
            .product()
            .map(|product| network.available(node, product))
            .unwrap_or(0.0);

        collected.add(index, needed.min(available));
    }
}

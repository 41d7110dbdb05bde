use std::sync::Arc;

use tracing::{debug, info, instrument};

use crate::problem::{network::Network, order::Order};

use super::{
    candidates::CandidateRoutes,
    evaluation::Evaluation,
    evaluator_params::EvaluatorParams,
    simulation::{RouteSimulation, simulate_route},
};

/// Minimum transportation cost of an order over every candidate route of a
/// network.
pub struct Evaluator {
    network: Arc<Network>,
    params: EvaluatorParams,
}

impl Evaluator {
    pub fn new(network: Arc<Network>, params: EvaluatorParams) -> Self {
        Evaluator { network, params }
    }

    pub fn network(&self) -> &Network {
        &self.network
    }

    /// Simulates every candidate route and keeps the cheapest feasible one.
    /// On equal cost the route enumerated first wins.
    #[instrument(skip_all, level = "debug", fields(lines = order.len()))]
    pub fn evaluate(&self, order: &Order) -> Evaluation {
        let mut best: Option<RouteSimulation> = None;
        let mut candidates = 0;
        let mut feasible_candidates = 0;

        for simulation in self.simulations(order) {
            candidates += 1;

            debug!(
                route = %self.network.display_route(simulation.route()),
                cost = simulation.cost(),
                feasible = simulation.is_feasible(),
                "simulated candidate route"
            );

            if !simulation.is_feasible() {
                continue;
            }

            feasible_candidates += 1;
            if best
                .as_ref()
                .is_none_or(|best| simulation.cost() < best.cost())
            {
                best = Some(simulation);
            }
        }

        let evaluation = Evaluation::from_best(best, candidates, feasible_candidates);

        match &evaluation {
            Evaluation::Cost(solution) => info!(
                cost = solution.cost(),
                route = %self.network.display_route(solution.route()),
                candidates,
                feasible_candidates,
                "order evaluated"
            ),
            Evaluation::Infeasible { candidates } => {
                info!(candidates, "no candidate route satisfies the order")
            }
        }

        evaluation
    }

    /// Every candidate route with its simulation, in enumeration order.
    pub fn candidates(&self, order: &Order) -> Vec<RouteSimulation> {
        self.simulations(order).collect()
    }

    fn simulations<'a>(&'a self, order: &'a Order) -> impl Iterator<Item = RouteSimulation> + 'a {
        CandidateRoutes::new(&self.network)
            .map(move |route| simulate_route(&self.network, order, route, self.params.billing))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        solver::{
            candidates::candidate_count,
            evaluation::INFEASIBLE_COST,
            leg_billing::LegBilling,
        },
        test_utils,
    };

    fn default_evaluator() -> Evaluator {
        Evaluator::new(
            Arc::new(test_utils::create_default_network()),
            EvaluatorParams::default(),
        )
    }

    #[test]
    fn test_default_network_fixture() {
        let evaluator = default_evaluator();
        let order = test_utils::create_order(evaluator.network(), &[("A", 3.0), ("B", 2.0)]);

        let evaluation = evaluator.evaluate(&order);
        let solution = evaluation.solution().unwrap();

        assert_eq!(solution.cost(), 115.0);
        assert_eq!(
            evaluator.network().display_route(solution.route()),
            "C3 -> C2 -> C1 -> L1"
        );
        assert_eq!(solution.candidates(), 6);
        assert_eq!(solution.feasible_candidates(), 6);
        assert_eq!(evaluation.to_reported_cost(), 115.0);
    }

    #[test]
    fn test_deterministic() {
        let evaluator = default_evaluator();
        let order = test_utils::create_order(
            evaluator.network(),
            &[("A", 4.0), ("B", 3.0), ("C", 7.0)],
        );

        let first = evaluator.evaluate(&order).minimum_cost();
        for _ in 0..10 {
            assert_eq!(evaluator.evaluate(&order).minimum_cost(), first);
        }
        assert!(first.is_some());
    }

    #[test]
    fn test_more_than_total_stock_is_infeasible() {
        let evaluator = default_evaluator();
        // 3 + 2 + 1 units of A exist across all centers
        let order = test_utils::create_order(evaluator.network(), &[("A", 7.0), ("B", 1.0)]);

        let evaluation = evaluator.evaluate(&order);

        assert!(!evaluation.is_feasible());
        assert_eq!(evaluation.candidates(), 6);
        assert_eq!(evaluation.minimum_cost(), None);
        assert_eq!(evaluation.to_reported_cost(), INFEASIBLE_COST);
    }

    #[test]
    fn test_exactly_total_stock_is_feasible() {
        let evaluator = default_evaluator();
        let order = test_utils::create_order(evaluator.network(), &[("A", 6.0)]);

        assert!(evaluator.evaluate(&order).is_feasible());
    }

    #[test]
    fn test_unknown_product_is_infeasible() {
        let evaluator = default_evaluator();
        let order = test_utils::create_order(evaluator.network(), &[("A", 1.0), ("Z", 1.0)]);

        assert_eq!(evaluator.evaluate(&order).to_reported_cost(), INFEASIBLE_COST);
    }

    #[test]
    fn test_zero_order_costs_nothing() {
        let evaluator = default_evaluator();
        let order = test_utils::create_order(evaluator.network(), &[("A", 0.0), ("B", 0.0)]);

        let evaluation = evaluator.evaluate(&order);

        assert_eq!(evaluation.minimum_cost(), Some(0.0));
        assert!(
            evaluator
                .candidates(&order)
                .iter()
                .all(|simulation| simulation.cost() == 0.0)
        );
    }

    #[test]
    fn test_single_source_sufficiency() {
        let network = test_utils::create_network(
            "L1",
            vec![("C1", vec![("A", 3.0), ("B", 2.0)])],
            &[("C1", "L1", 30.0)],
        );
        let evaluator = Evaluator::new(Arc::new(network), EvaluatorParams::default());
        let order = test_utils::create_order(evaluator.network(), &[("A", 3.0), ("B", 2.0)]);

        let evaluation = evaluator.evaluate(&order);

        // (3 + 2) * 0.5 * 30
        assert_eq!(
            evaluation.minimum_cost(),
            Some(order.total_quantity() * 0.5 * 30.0)
        );
        assert_eq!(evaluation.minimum_cost(), Some(75.0));
        assert_eq!(evaluation.candidates(), 1);
    }

    #[test]
    fn test_every_candidate_pays_at_least_the_delivery_leg() {
        let evaluator = default_evaluator();
        let order = test_utils::create_order(evaluator.network(), &[("A", 3.0), ("B", 2.0)]);
        let network = evaluator.network();
        let full_weight = order.total_quantity() * network.product_weight();

        for simulation in evaluator.candidates(&order) {
            let last_source = simulation.route()[simulation.route().len() - 2];
            let delivery = full_weight * network.distance(last_source, network.sink()).resolve();

            assert!(simulation.cost() >= delivery);
        }
    }

    #[test]
    fn test_candidates_are_all_simulated() {
        let evaluator = default_evaluator();
        let order = test_utils::create_order(evaluator.network(), &[("A", 1.0)]);

        let simulations = evaluator.candidates(&order);

        assert_eq!(simulations.len(), candidate_count(3));
    }

    #[test]
    fn test_unknown_leg_loses_to_known_legs() {
        // S1 -> S2 -> T uses the unknown S2 -> T leg
        let network = test_utils::create_network(
            "T",
            vec![("S1", vec![("A", 1.0)]), ("S2", vec![("A", 1.0)])],
            &[("S1", "S2", 1.0), ("S2", "S1", 1.0), ("S1", "T", 1.0)],
        );
        let evaluator = Evaluator::new(Arc::new(network), EvaluatorParams::default());
        let order = test_utils::create_order(evaluator.network(), &[("A", 2.0)]);

        let evaluation = evaluator.evaluate(&order);

        // S2 -> S1 -> T: 0.5 * 1 + 1.0 * 1
        assert_eq!(evaluation.minimum_cost(), Some(1.5));
    }

    #[test]
    fn test_unreachable_sink_still_reports_a_cost() {
        let network = test_utils::create_network("T", vec![("S1", vec![("A", 1.0)])], &[]);
        let evaluator = Evaluator::new(Arc::new(network), EvaluatorParams::default());
        let order = test_utils::create_order(evaluator.network(), &[("A", 1.0)]);

        assert_eq!(
            evaluator.evaluate(&order).minimum_cost(),
            Some(0.5 * crate::problem::distance_matrix::UNREACHABLE_DISTANCE)
        );
    }

    #[test]
    fn test_delivery_leg_only_billing() {
        let evaluator = Evaluator::new(
            Arc::new(test_utils::create_default_network()),
            EvaluatorParams {
                billing: LegBilling::DeliveryLegOnly,
            },
        );
        let order = test_utils::create_order(evaluator.network(), &[("A", 3.0), ("B", 2.0)]);

        let evaluation = evaluator.evaluate(&order);
        let solution = evaluation.solution().unwrap();

        assert_eq!(solution.cost(), 75.0);
        assert_eq!(
            evaluator.network().display_route(solution.route()),
            "C2 -> C3 -> C1 -> L1"
        );
    }

    #[test]
    fn test_reported_cost_is_rounded() {
        let network = test_utils::create_network(
            "T",
            vec![("S1", vec![("A", 1.0)])],
            &[("S1", "T", 0.3333)],
        );
        let evaluator = Evaluator::new(Arc::new(network), EvaluatorParams::default());
        let order = test_utils::create_order(evaluator.network(), &[("A", 1.0)]);

        // 0.5 * 0.3333 = 0.16665
        assert_eq!(evaluator.evaluate(&order).to_reported_cost(), 0.17);
    }

    #[test]
    fn test_reported_cost_ties_round_to_even() {
        let network = test_utils::create_network(
            "T",
            vec![("S1", vec![("A", 1.0)])],
            &[("S1", "T", 0.25)],
        );
        let evaluator = Evaluator::new(Arc::new(network), EvaluatorParams::default());
        let order = test_utils::create_order(evaluator.network(), &[("A", 1.0)]);

        let evaluation = evaluator.evaluate(&order);

        // 0.5 * 0.25 = 0.125 exactly
        assert_eq!(evaluation.minimum_cost(), Some(0.125));
        assert_eq!(evaluation.to_reported_cost(), 0.12);
    }
}

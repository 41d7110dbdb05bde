use crate::{problem::node::NodeIdx, utils::rounding::round_to_decimals};

use super::simulation::{LegCost, RouteSimulation};

/// Reported cost when no candidate route satisfies the order.
pub const INFEASIBLE_COST: f64 = -1.0;

/// Decimals kept in a reported cost.
pub const REPORTED_COST_DECIMALS: usize = 2;

#[derive(Debug, Clone)]
pub struct RouteCostSolution {
    best: RouteSimulation,
    candidates: usize,
    feasible_candidates: usize,
}

impl RouteCostSolution {
    pub fn cost(&self) -> f64 {
        self.best.cost()
    }

    pub fn route(&self) -> &[NodeIdx] {
        self.best.route()
    }

    pub fn legs(&self) -> &[LegCost] {
        self.best.legs()
    }

    pub fn candidates(&self) -> usize {
        self.candidates
    }

    pub fn feasible_candidates(&self) -> usize {
        self.feasible_candidates
    }
}

#[derive(Debug, Clone)]
pub enum Evaluation {
    Cost(RouteCostSolution),
    /// No candidate route collected the full order.
    Infeasible { candidates: usize },
}

impl Evaluation {
    pub(crate) fn from_best(
        best: Option<RouteSimulation>,
        candidates: usize,
        feasible_candidates: usize,
    ) -> Self {
        match best {
            Some(best) => Evaluation::Cost(RouteCostSolution {
                best,
                candidates,
                feasible_candidates,
            }),
            None => Evaluation::Infeasible { candidates },
        }
    }

    pub fn minimum_cost(&self) -> Option<f64> {
        match self {
            Evaluation::Cost(solution) => Some(solution.cost()),
            Evaluation::Infeasible { .. } => None,
        }
    }

    pub fn solution(&self) -> Option<&RouteCostSolution> {
        match self {
            Evaluation::Cost(solution) => Some(solution),
            Evaluation::Infeasible { .. } => None,
        }
    }

    pub fn is_feasible(&self) -> bool {
        matches!(self, Evaluation::Cost(_))
    }

    pub fn candidates(&self) -> usize {
        match self {
            Evaluation::Cost(solution) => solution.candidates(),
            Evaluation::Infeasible { candidates } => *candidates,
        }
    }

    /// Minimum cost rounded to two decimals, or [`INFEASIBLE_COST`].
    pub fn to_reported_cost(&self) -> f64 {
        self.minimum_cost()
            .map(|cost| round_to_decimals(cost, REPORTED_COST_DECIMALS))
            .unwrap_or(INFEASIBLE_COST)
    }
}

use std::time::Duration;

use stockroute_optimizer::solver::evaluator::Evaluator;

pub struct AppState {
    pub evaluator: Evaluator,
    pub evaluation_timeout: Duration,
}

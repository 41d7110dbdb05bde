pub mod candidates;
pub mod evaluation;
pub mod evaluator;
pub mod evaluator_params;
pub mod leg_billing;
pub mod simulation;

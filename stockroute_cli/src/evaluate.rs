use std::sync::Arc;

use clap::Args;
use stockroute_optimizer::solver::{evaluation::Evaluation, evaluator::Evaluator};
use tracing::info;

use crate::input::{BillingArgs, NetworkArgs, OrderArgs};

#[derive(Args)]
pub struct EvaluateArgs {
    #[command(flatten)]
    network: NetworkArgs,

    #[command(flatten)]
    order: OrderArgs,

    #[command(flatten)]
    billing: BillingArgs,
}

pub fn run(args: EvaluateArgs) -> anyhow::Result<()> {
    let evaluator = Evaluator::new(Arc::new(args.network.load()?), args.billing.params());
    let network = evaluator.network();
    let order = args.order.build(network)?;

    info!(
        lines = order.len(),
        total_quantity = order.total_quantity(),
        billing = %args.billing.billing(),
        "evaluating order"
    );

    let evaluation = evaluator.evaluate(&order);

    match &evaluation {
        Evaluation::Cost(solution) => {
            println!("minimum cost: {:.2}", evaluation.to_reported_cost());
            println!("route: {}", network.display_route(solution.route()));
            for leg in solution.legs() {
                println!(
                    "  {} -> {}: weight {} cost {:.2}",
                    network.node_id(leg.from),
                    network.node_id(leg.to),
                    leg.weight,
                    leg.cost
                );
            }
            println!(
                "candidates: {} ({} feasible)",
                solution.candidates(),
                solution.feasible_candidates()
            );
        }
        Evaluation::Infeasible { candidates } => {
            println!(
                "minimum cost: {} (infeasible over {} candidates)",
                evaluation.to_reported_cost(),
                candidates
            );
        }
    }

    Ok(())
}

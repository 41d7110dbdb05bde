use std::sync::Arc;

use clap::Args;
use comfy_table::Table;
use stockroute_optimizer::solver::{evaluator::Evaluator, simulation::RouteSimulation};

use crate::input::{BillingArgs, NetworkArgs, OrderArgs};

#[derive(Args)]
pub struct RoutesArgs {
    #[command(flatten)]
    network: NetworkArgs,

    #[command(flatten)]
    order: OrderArgs,

    #[command(flatten)]
    billing: BillingArgs,
}

pub fn run(args: RoutesArgs) -> anyhow::Result<()> {
    let evaluator = Evaluator::new(Arc::new(args.network.load()?), args.billing.params());
    let network = evaluator.network();
    let order = args.order.build(network)?;

    let candidates = evaluator.candidates(&order);
    let best = best_candidate(&candidates);

    let mut table = Table::new();
    table.set_header(vec!["", "route", "cost", "feasible"]);

    for (index, simulation) in candidates.iter().enumerate() {
        let marker = if best == Some(index) { "*" } else { "" };

        table.add_row(vec![
            marker.to_owned(),
            network.display_route(simulation.route()),
            format!("{:.2}", simulation.cost()),
            simulation.is_feasible().to_string(),
        ]);
    }

    println!("{table}");

    Ok(())
}

/// Cheapest feasible candidate, the first one on ties.
fn best_candidate(candidates: &[RouteSimulation]) -> Option<usize> {
    candidates
        .iter()
        .enumerate()
        .filter(|(_, simulation)| simulation.is_feasible())
        .fold(None, |best: Option<(usize, f64)>, (index, simulation)| {
            match best {
                Some((_, cost)) if cost <= simulation.cost() => best,
                _ => Some((index, simulation.cost())),
            }
        })
        .map(|(index, _)| index)
}

use std::path::PathBuf;

use anyhow::{Context, bail};
use clap::Args;
use stockroute_optimizer::{
    default_network::default_network,
    json::network_file::read_network_file,
    problem::{network::Network, order::Order},
    solver::{evaluator_params::EvaluatorParams, leg_billing::LegBilling},
};

use crate::parsers;

#[derive(Args)]
pub struct NetworkArgs {
    /// Network file, the built-in network when omitted
    #[arg(short, long, env = "STOCKROUTE_NETWORK_FILE")]
    network: Option<PathBuf>,
}

impl NetworkArgs {
    pub fn load(&self) -> anyhow::Result<Network> {
        match &self.network {
            Some(path) => read_network_file(path)
                .with_context(|| format!("loading network from {}", path.display())),
            None => Ok(default_network()?),
        }
    }
}

#[derive(Args)]
pub struct BillingArgs {
    /// Which legs are charged
    #[arg(long, env = "STOCKROUTE_LEG_BILLING", default_value_t = LegBilling::EveryLeg)]
    billing: LegBilling,
}

impl BillingArgs {
    pub fn billing(&self) -> LegBilling {
        self.billing
    }

    pub fn params(&self) -> EvaluatorParams {
        EvaluatorParams {
            billing: self.billing,
        }
    }
}

#[derive(Args)]
pub struct OrderArgs {
    /// Ordered product and quantity, e.g. `--order A=3 --order B=2`
    #[arg(short = 'o', long = "order", value_parser = parsers::parse_order_item, required = true)]
    items: Vec<(String, f64)>,
}

impl OrderArgs {
    /// Rejects products no source holds, like the HTTP boundary does.
    pub fn build(&self, network: &Network) -> anyhow::Result<Order> {
        let missing = network.unknown_products(self.items.iter().map(|(id, _)| id.as_str()));
        if !missing.is_empty() {
            bail!(
                "Products not available in any center: {}",
                missing.join(", ")
            );
        }

        Ok(Order::new(network, self.items.iter().cloned())?)
    }
}

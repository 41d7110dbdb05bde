use clap::Args;
use stockroute_optimizer::json::types::JsonNetwork;

use crate::input::NetworkArgs;

#[derive(Args)]
pub struct ShowNetworkArgs {
    #[command(flatten)]
    network: NetworkArgs,
}

pub fn run(args: ShowNetworkArgs) -> anyhow::Result<()> {
    let network = args.network.load()?;
    let json = serde_json::to_string_pretty(&JsonNetwork::from_network(&network))?;

    println!("{json}");

    Ok(())
}

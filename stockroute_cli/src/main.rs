use clap::{Parser, Subcommand};

use mimalloc::MiMalloc;

use crate::{
    evaluate::EvaluateArgs, generate::GenerateSubcommands, network::ShowNetworkArgs,
    routes::RoutesArgs,
};

mod evaluate;
mod generate;
mod input;
mod network;
mod parsers;
mod routes;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(short, long, global = true)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Minimum cost of an order over every candidate route
    Evaluate {
        #[command(flatten)]
        args: EvaluateArgs,
    },
    /// Every candidate route of an order with its cost
    Routes {
        #[command(flatten)]
        args: RoutesArgs,
    },
    /// Print the network as JSON
    Network {
        #[command(flatten)]
        args: ShowNetworkArgs,
    },
    #[command(visible_alias = "g")]
    Generate {
        #[command(subcommand)]
        commands: GenerateSubcommands,
    },
}

fn main() -> Result<(), anyhow::Error> {
    dotenvy::from_filename("./.env.local").ok();

    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(if cli.debug {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .init();

    match cli.command {
        Commands::Evaluate { args } => evaluate::run(args)?,
        Commands::Routes { args } => routes::run(args)?,
        Commands::Network { args } => network::run(args)?,
        Commands::Generate { commands } => generate::run(commands)?,
    }

    Ok(())
}

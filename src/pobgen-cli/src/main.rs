mod cli;
mod commands;
mod config;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use cli::*;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Export {
            items,
            tree,
            dictionary,
            output,
        } => {
            commands::export::handle(&items, &tree, dictionary, output.as_deref())?;
        }

        Commands::Decode { code } => {
            commands::decode::handle(&code)?;
        }

        Commands::Tree { items, tree } => {
            commands::tree::handle(&items, &tree)?;
        }

        Commands::Configure {
            dictionary,
            target_version,
            show,
        } => {
            commands::configure::handle(dictionary, target_version, show)?;
        }
    }

    Ok(())
}

/// Log to stderr; stdout carries only command output
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

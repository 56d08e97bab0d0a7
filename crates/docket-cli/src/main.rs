//! Docket CLI - review queue for machine-extracted documents.

mod cli;
mod commands;
mod observer;
mod store;

use clap::Parser;
use cli::{Cli, Commands};
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = match store::load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let result = match cli.command {
        Commands::Status { file, json } => commands::status::run(file, &config, json),

        Commands::List {
            file,
            filters,
            page,
            page_size,
            json,
        } => commands::list::run(file, &config, filters, page, page_size, json),

        Commands::Show { file, id, json } => commands::show::run(file, &config, id, json),

        Commands::Approve {
            file,
            id,
            comment,
            user,
        } => commands::act::approve(file, &config, id, comment, user),

        Commands::Reject {
            file,
            id,
            reason,
            user,
        } => commands::act::reject(file, &config, id, reason, user),

        Commands::Assign { file, id, reviewer } => {
            commands::act::assign(file, &config, id, reviewer)
        }

        Commands::Revise { file, id, notes } => commands::act::revise(file, &config, id, notes),

        Commands::Resubmit { file, id } => commands::act::resubmit(file, &config, id),

        Commands::Batch {
            file,
            approve,
            reject,
            filters,
            all,
            reason,
            user,
        } => commands::batch::run(
            file, &config, approve, reject, filters, all, reason, user, cli.verbose,
        ),

        Commands::History {
            file,
            id,
            backup,
            json,
        } => commands::history::run(file, id, backup, json),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Log to stderr. `RUST_LOG` wins over `--verbose`.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "docket=debug" } else { "docket=warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

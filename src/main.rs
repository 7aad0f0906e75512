use clap::Parser;
use log::info;
use std::path::Path;

use portal_indexer::cli::args::get_log_level;
use portal_indexer::cli::{commands, Cli, Commands};
use portal_indexer::Config;

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    setup_logging(cli.verbose);

    info!("Starting portal-indexer");

    let config = Config::load(cli.config.as_deref().map(Path::new))?;

    match cli.command_or_default() {
        Commands::Index => {
            commands::index(config)?;
        }
        Commands::Search { query, limit } => {
            commands::search(&config, query, limit)?;
        }
        Commands::Get { slug, category } => {
            commands::get(&config, slug, category)?;
        }
        Commands::Topic { slug } => {
            commands::show_topic(&config, &slug)?;
        }
        Commands::Status { format } => {
            commands::status(&config, format)?;
        }
    }

    Ok(())
}

fn setup_logging(verbose: bool) {
    env_logger::Builder::new()
        .parse_filters(get_log_level(verbose))
        .parse_default_env()
        .format_timestamp(None)
        .format_target(false)
        .format_module_path(false)
        .init();
}

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;

use bookshelf::cli::handlers::{
    CommandContext, handle_init, handle_mutate, handle_query, handle_schema, handle_serve,
};
use bookshelf::cli::{Cli, Commands};
use bookshelf::config::{BookshelfConfig, StoreSettings};
use bookshelf::logging;

fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init(cli.verbose, cli.log_file.map(PathBuf::from));

    match cli.command {
        Commands::Init {
            path,
            id_mode,
            id_length,
            format,
        } => handle_init(StoreSettings {
            path,
            id_length,
            id_mode: id_mode.into(),
            format: format.into(),
        }),
        Commands::Serve { host, port } => {
            let ctx = load_context(cli.config.as_deref())?;
            handle_serve(ctx, host, port)
        }
        Commands::Query { query, variables } => {
            let ctx = load_context(cli.config.as_deref())?;
            handle_query(ctx, query, variables)
        }
        Commands::Mutate {
            mutation,
            variables,
        } => {
            let ctx = load_context(cli.config.as_deref())?;
            handle_mutate(ctx, mutation, variables)
        }
        Commands::Schema => {
            let ctx = load_context(cli.config.as_deref())?;
            handle_schema(ctx)
        }
    }
}

fn load_context(config_path: Option<&str>) -> Result<CommandContext> {
    let (config, root) = match config_path {
        Some(path) => BookshelfConfig::load_from(Path::new(path)),
        None => BookshelfConfig::load(&std::env::current_dir()?),
    }
    .context("Failed to load bookshelf configuration")?;

    CommandContext::new(config, &root).context("Failed to open document store")
}

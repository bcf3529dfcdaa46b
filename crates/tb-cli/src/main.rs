//! Tributary CLI - catalog data tables and explore their lineage

use clap::Parser;
use std::io::IsTerminal;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;

use cli::{Cli, Commands};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.global.verbose);

    let result = match &cli.command {
        Commands::Init(args) => commands::init::execute(args, &cli.global),
        Commands::Sample(args) => commands::sample::execute(args, &cli.global),
        Commands::Table(args) => commands::table::execute(args, &cli.global),
        Commands::Column(args) => commands::column::execute(args, &cli.global),
        Commands::Transform(args) => commands::transform::execute(args, &cli.global),
        Commands::Mapping(args) => commands::mapping::execute(args, &cli.global),
        Commands::Search(args) => commands::search::execute(args, &cli.global),
        Commands::Lineage(args) => commands::lineage::execute(args, &cli.global),
        Commands::View(args) => commands::view::execute(args, &cli.global),
        Commands::Export(args) => commands::export::execute(args, &cli.global),
        Commands::Import(args) => commands::import::execute(args, &cli.global),
        Commands::Stats(args) => commands::stats::execute(args, &cli.global),
        Commands::Types(args) => commands::types::execute(args),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => report(&err),
    }
}

/// Log filter for the `-v` flag: debug when verbose, warnings otherwise
fn log_filter(verbose: bool) -> EnvFilter {
    EnvFilter::new(if verbose { "debug" } else { "warn" })
}

/// Install the stderr subscriber. `log` records from tb-core and tb-render
/// reach it through the tracing-log bridge.
fn init_logging(verbose: bool) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(log_filter(verbose))
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(verbose)
        .without_time()
        .try_init();
}

/// Lookup misses are warnings and leave the exit status at zero
fn report(err: &anyhow::Error) -> ExitCode {
    let lookup_miss = err
        .chain()
        .filter_map(|cause| cause.downcast_ref::<tb_core::CoreError>())
        .any(tb_core::CoreError::is_lookup_miss);
    if lookup_miss {
        eprintln!("warning: {:#}", err);
        return ExitCode::SUCCESS;
    }

    eprintln!("error: {:#}", err);
    ExitCode::FAILURE
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_subscriber::filter::LevelFilter;

    #[test]
    fn test_log_filter_follows_verbose() {
        assert_eq!(log_filter(false).max_level_hint(), Some(LevelFilter::WARN));
        assert_eq!(log_filter(true).max_level_hint(), Some(LevelFilter::DEBUG));
    }
}

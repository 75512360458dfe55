use clap::Parser;
use tracing_subscriber::EnvFilter;

use doc_guard::cli::{Cli, Commands};
use doc_guard::commands::{run_check, run_init, run_review};
use doc_guard::{LOG_ENV, log_level};

fn init_logging(cli: &Cli) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(log_level(cli.verbose, cli.quiet)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(&cli);

    let exit_code = match &cli.command {
        Commands::Check(args) => run_check(args, &cli),
        Commands::Review(args) => run_review(args, &cli),
        Commands::Init(args) => run_init(args, cli.color),
    };

    std::process::exit(exit_code);
}

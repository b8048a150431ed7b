mod cli;
mod shell;

use clap::Parser;
use podsum_logging::DEFAULT_LOG_FILE;

fn main() -> anyhow::Result<()> {
    let args = cli::Args::parse();
    podsum_logging::initialize(
        args.log.into(),
        log::LevelFilter::Info,
        std::path::Path::new(DEFAULT_LOG_FILE),
    );
    shell::run_app(args.shell_config())
}

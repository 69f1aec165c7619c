#![doc = include_str!("../README.md")]

pub mod cli;
pub mod command;
pub mod config;
pub mod error;
pub mod fs;
pub mod ops;
pub mod validation;

pub use error::*;

pub fn run() -> Result<()> {
    let cli = cli::Cli::parse_normalized();
    init_logging(cli.verbose);
    command::replace::execute(&cli.args)
}

/// Logs go to stderr. `RUST_LOG` takes precedence over `--verbose`.
fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default))
        .format_timestamp(None)
        .init();
}

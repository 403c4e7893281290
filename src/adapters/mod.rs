#[cfg(feature = "cli")]
pub mod cli;
pub mod request;

#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
pub fn run() -> Result<(), crate::error::AppError> {
    use crate::adapters::cli::{Args, init_logging, parse_request};

    let args = Args::parse();
    init_logging(&args);

    let request = parse_request(&args)?;
    let out = request.evaluate()?;

    crate::adapters::cli::print_output(&out, &args)?;

    Ok(())
}

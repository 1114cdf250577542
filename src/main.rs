use anyhow::Result;
use clap::Parser;
use std::io;
use std::process::ExitCode;

use forensic_imaging::presentation::cli::{Cli, dispatch, init_cli_logger};

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_cli_logger(cli.verbose);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    dispatch(cli, &mut out)
}

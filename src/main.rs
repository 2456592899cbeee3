mod cli;
mod config;
mod convert;
mod convert_cmd;
mod display;
mod filetime_cmd;
mod locale;
mod logging;
mod pick;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Pick(args) => pick::run(args),
        Command::Convert(args) => convert_cmd::run(args),
        Command::ToFiletime(args) => filetime_cmd::run(args),
    }
}

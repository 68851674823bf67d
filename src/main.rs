mod cli;
mod commands;

use clap::Parser;
use cli::Cli;

fn main() -> miette::Result<()> {
    let cli = Cli::parse();
    commands::setup::run(cli.customer)
}

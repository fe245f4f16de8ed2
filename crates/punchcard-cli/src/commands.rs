use super::args::Cli;
use super::handlers;
use anyhow::Result;

pub fn run(cli: Cli) -> Result<()> {
    handlers::report::handle(&cli.input, cli.start_date, cli.end_date, cli.format)
}

mod cmd;
mod logging;

use crate::cmd::cli::Cli;
use crate::cmd::config::Config;

use clap::Parser;
use std::process;

fn main() {
    let cli = Cli::parse();
    let cfg: Config = cli.into_config();
    logging::init(cfg.verbosity);

    if let Err(e) = cfg.run() {
        eprintln!("{e}");
        process::exit(1);
    }
}

mod app;
mod cli;
mod config;
mod consts;
mod core;
mod error;
mod output;
mod rollover;
mod utils;
mod vault;
mod watch;

use clap::Parser;

use cli::Cli;
use config::Config;
use utils::init_logging;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.debug);

    let loaded = Config::load(cli.config.as_deref(), cli.quiet);
    let cli = cli.with_config(&loaded.config);

    if let Err(e) = app::run(&cli, loaded) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

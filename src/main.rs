mod cli;
mod config;
mod dependencies;
mod emitters;
mod execution;
mod logger;
mod package_managers;
mod types;
mod workspace;


use clap::Parser;

use crate::cli::Cli;
use crate::execution::CommandFailed;

fn main() {
    let cli = Cli::parse();
    logger::init_logger(cli.verbose);

    if let Err(err) = cli.execute() {
        let code = err
            .downcast_ref::<CommandFailed>()
            .map_or(1, |failed| failed.code);
        eprintln!("Error: {:#}", err);
        std::process::exit(code);
    }
}

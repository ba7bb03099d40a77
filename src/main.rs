//! eslintrc-gen CLI entry point

use clap::Parser;
use eslintrc_gen::cli::{self, Cli};
use std::process;

fn main() {
    let cli = Cli::parse();
    eslintrc_gen::logging::init_tracing(cli.verbose);

    let exit_code = cli::run(&cli);

    process::exit(exit_code);
}

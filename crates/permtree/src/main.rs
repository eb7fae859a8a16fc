// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! permtree binary entry point.

use clap::Parser;

use permtree::cli::{run, Cli, ERROR_EXIT_CODE};
use permtree::logging::init_logging;

fn main() {
    init_logging();
    let cli = Cli::parse();

    let stdout = std::io::stdout();
    let code = match run(&cli, &mut stdout.lock()) {
        Ok(outcome) => outcome.exit_code(),
        Err(e) => {
            eprintln!("Error: {e}");
            ERROR_EXIT_CODE
        }
    };
    std::process::exit(code);
}

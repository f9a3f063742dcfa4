// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use finscope::{cli, commands};

fn main() -> Result<()> {
    env_logger::init();

    let matches = cli::build_cli().get_matches();

    match matches.subcommand() {
        Some(("recipes", _)) => commands::report::list(),
        Some((name, sub)) => {
            // A missing or corrupt dataset stops here, before anything is rendered.
            let ctx = commands::Context::from_matches(sub)?;
            commands::handle(&ctx, name, sub)?;
        }
        None => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}

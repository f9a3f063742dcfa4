// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, value_parser};

fn filter_arg(id: &'static str, help: &'static str) -> Arg {
    Arg::new(id)
        .long(id)
        .help(help)
        .value_name("VALUES")
        .value_delimiter(',')
        .action(ArgAction::Append)
        .global(true)
}

fn output_args(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .help("Print as pretty JSON")
            .action(ArgAction::SetTrue)
            .global(true),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .help("Print as JSON lines")
            .action(ArgAction::SetTrue)
            .conflicts_with("json")
            .global(true),
    )
}

pub fn build_cli() -> Command {
    let cmd = Command::new("finscope")
        .about("Filter and aggregate a personal-finance behaviour dataset")
        .version(clap::crate_version!())
        .arg(
            Arg::new("data")
                .long("data")
                .value_name("PATH")
                .help("Dataset CSV (overrides FINSCOPE_DATA and the config file)")
                .global(true),
        )
        .arg(filter_arg("year", "Years to include, comma separated"))
        .arg(filter_arg("scenario", "Financial scenarios to include"))
        .arg(filter_arg("income-type", "Income types to include"))
        .arg(filter_arg("stress", "Stress levels to include (Low, Medium, High)"))
        .arg(filter_arg("category", "Spending categories to include"));

    output_args(cmd)
        .subcommand(Command::new("summary").about("Headline, KPIs and insights"))
        .subcommand(
            Command::new("report")
                .about("Render one chart table, or all of them")
                .arg(Arg::new("recipe").value_name("RECIPE").required_unless_present("all"))
                .arg(
                    Arg::new("all")
                        .long("all")
                        .action(ArgAction::SetTrue)
                        .conflicts_with("recipe"),
                ),
        )
        .subcommand(
            Command::new("dimensions")
                .about("Distinct values per filter dimension")
                .arg(Arg::new("dimension").help("Only list this dimension, e.g. income-type")),
        )
        .subcommand(
            Command::new("preview").about("First rows of the filtered data").arg(
                Arg::new("rows")
                    .long("rows")
                    .value_parser(value_parser!(usize))
                    .default_value("100"),
            ),
        )
        .subcommand(
            Command::new("export")
                .about("Write the filtered data as CSV")
                .arg(Arg::new("out").long("out").value_name("PATH").required(true)),
        )
        .subcommand(Command::new("recipes").about("List available chart recipes"))
}

// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::path::PathBuf;

use clap::{Arg, ArgAction, Command, value_parser};

use crate::models::Category;

const AFTER_HELP: &str = "\
Quick start:
  spendclip add --amount 500 --category Food --description Coffee break
  spendclip set-limit --month 11 --limit 30000
  spendclip summary --month 10
  spendclip update --id 5 --amount 550";

fn category_arg() -> Arg {
    Arg::new("category")
        .short('c')
        .long("category")
        .value_parser(Category::names())
        .ignore_case(true)
        .help("Expense category")
}

fn month_arg() -> Arg {
    Arg::new("month")
        .short('m')
        .long("month")
        .value_name("MONTH")
        .help("Month as a number (1-12) or a name")
}

fn json_args() -> [Arg; 2] {
    [
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print as pretty JSON"),
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .conflicts_with("json")
            .help("Print as JSON lines"),
    ]
}

fn id_arg(help: &'static str) -> Arg {
    Arg::new("id")
        .long("id")
        .required(true)
        .value_parser(value_parser!(u32).range(1..))
        .help(help)
}

pub fn build_cli() -> Command {
    Command::new("spendclip")
        .version(clap::crate_version!())
        .about("Expense tracker with monthly budget limits")
        .after_help(AFTER_HELP)
        .arg(
            Arg::new("data-dir")
                .long("data-dir")
                .global(true)
                .value_name("DIR")
                .value_parser(value_parser!(PathBuf))
                .help("Directory holding expenses.csv and limits.json"),
        )
        .subcommand(
            Command::new("init")
                .about("Create the data files")
                .arg(
                    Arg::new("reset")
                        .long("reset")
                        .action(ArgAction::SetTrue)
                        .help("Discard the existing ledger and start empty"),
                ),
        )
        .subcommand(
            Command::new("add")
                .about("Add an expense")
                .arg(
                    Arg::new("description")
                        .short('d')
                        .long("description")
                        .required(true)
                        .num_args(1..)
                        .help("Brief description of the expense"),
                )
                .arg(
                    Arg::new("amount")
                        .short('a')
                        .long("amount")
                        .required(true)
                        .allow_hyphen_values(true)
                        .help("Amount spent"),
                )
                .arg(category_arg().required(true))
                .arg(
                    Arg::new("date")
                        .long("date")
                        .value_name("YYYY-MM-DD")
                        .help("Date of the expense (defaults to today)"),
                ),
        )
        .subcommand(
            Command::new("update")
                .about("Update the description or amount of an expense")
                .arg(id_arg("Expense ID"))
                .arg(
                    Arg::new("description")
                        .short('d')
                        .long("description")
                        .num_args(1..)
                        .help("New description"),
                )
                .arg(
                    Arg::new("amount")
                        .short('a')
                        .long("amount")
                        .allow_hyphen_values(true)
                        .help("New amount"),
                ),
        )
        .subcommand(
            Command::new("list")
                .about("List expenses")
                .arg(month_arg())
                .arg(category_arg())
                .args(json_args()),
        )
        .subcommand(
            Command::new("summary")
                .about("Total spent, overall or for one month")
                .arg(month_arg()),
        )
        .subcommand(
            Command::new("delete")
                .about("Delete an expense")
                .arg(id_arg("Expense ID to delete")),
        )
        .subcommand(
            Command::new("set-limit")
                .about("Set the budget limit for a month")
                .arg(month_arg().required(true))
                .arg(
                    Arg::new("limit")
                        .short('l')
                        .long("limit")
                        .required(true)
                        .value_name("AMOUNT")
                        .allow_hyphen_values(true)
                        .help("Budget limit amount"),
                )
                .arg(
                    Arg::new("year")
                        .long("year")
                        .value_parser(value_parser!(i32))
                        .help("Year of the budget period (defaults to the current year)"),
                ),
        )
        .subcommand(
            Command::new("limits")
                .about("Show the budget limits")
                .args(json_args()),
        )
}

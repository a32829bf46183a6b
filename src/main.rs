// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::path::PathBuf;

use anyhow::Result;

use spendclip::{cli, commands, config::Config, utils};

fn main() -> Result<()> {
    utils::init_tracing();
    let matches = cli::build_cli().get_matches();

    let Some((name, sub)) = matches.subcommand() else {
        cli::build_cli().print_help()?;
        println!();
        return Ok(());
    };

    let data_dir = sub
        .get_one::<PathBuf>("data-dir")
        .or_else(|| matches.get_one::<PathBuf>("data-dir"));
    let config = Config::resolve(data_dir.map(PathBuf::as_path))?;
    tracing::debug!(data_dir = %config.data_dir.display(), command = name, "dispatching");

    match name {
        "init" => commands::init::handle(&config, sub)?,
        "add" => commands::expenses::add(&config, sub)?,
        "update" => commands::expenses::update(&config, sub)?,
        "list" => commands::expenses::list(&config, sub)?,
        "summary" => commands::expenses::summary(&config, sub)?,
        "delete" => commands::expenses::delete(&config, sub)?,
        "set-limit" => commands::limits::set(&config, sub)?,
        "limits" => commands::limits::list(&config, sub)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}

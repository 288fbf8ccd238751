// Copyright (c) 2026 ALAS Technology. MIT License.
// See LICENSE for details.

//! # XRPL Transaction Toolkit
//!
//! Entry point for the `xrpl-tx` binary. Parses CLI arguments, initializes
//! logging and runs one subcommand:
//!
//! - `validate`  — print the validation errors of a transaction
//! - `normalize` — re-emit a transaction as canonical wire JSON
//! - `flags`     — decode a flags mask or encode flag names
//! - `fields`    — print the field table of a transaction type
//! - `version`   — print build version information

mod cli;
mod commands;
mod logging;

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use serde_json::Value;

use cli::{Commands, XrplTxCli};

fn main() -> Result<ExitCode> {
    let cli = XrplTxCli::parse();
    logging::init_logging(&cli.log_level, cli.log_format);

    match cli.command {
        Commands::Validate(args) => {
            let input = commands::read_input(args.input.file.as_deref())?;
            let outcome = commands::validate(&input, args.network_id)?;
            print_json(&outcome.report)?;
            Ok(if outcome.valid {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
        Commands::Normalize(args) => {
            let input = commands::read_input(args.file.as_deref())?;
            print_json(&commands::normalize(&input)?)?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Flags(args) => {
            let output = commands::flags(args.transaction_type, args.mask, &args.names)?;
            print_json(&output)?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Fields(args) => {
            print_json(&commands::fields(args.transaction_type))?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Version => {
            print_version();
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn print_json(value: &Value) -> Result<()> {
    let text = serde_json::to_string_pretty(value).context("failed to render output")?;
    println!("{}", text);
    Ok(())
}

/// Prints version information to stdout.
fn print_version() {
    println!("xrpl-tx      {}", env!("CARGO_PKG_VERSION"));
    println!("transactions {}", xrpl_models::transaction::TransactionType::ALL.len());
    println!("rustc        {}", rustc_version());
}

/// Returns the Rust compiler version used to build this binary.
fn rustc_version() -> &'static str {
    option_env!("RUSTC_VERSION").unwrap_or("unknown")
}

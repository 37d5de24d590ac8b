//! CLI subcommands

pub mod booking;
pub mod customer;
pub mod menu;
pub mod room;
pub mod seed;

use clap::Args;
use serde::Serialize;
use std::fmt::Display;

pub type CommandResult = Result<(), Box<dyn std::error::Error>>;

/// Output switch shared by `list` and `show`
#[derive(Debug, Args)]
pub struct OutputArgs {
    /// Print JSON instead of one line per record
    #[arg(long)]
    pub json: bool,
}

/// Print records one per line, or as a JSON array
pub fn print_records<T: Serialize + Display>(records: &[T], output: &OutputArgs) -> CommandResult {
    if output.json {
        println!("{}", serde_json::to_string_pretty(records)?);
    } else if records.is_empty() {
        println!("(none)");
    } else {
        for record in records {
            println!("{}", record);
        }
    }
    Ok(())
}

/// Print a single record, or it as a JSON object
pub fn print_record<T: Serialize + Display>(record: &T, output: &OutputArgs) -> CommandResult {
    if output.json {
        println!("{}", serde_json::to_string_pretty(record)?);
    } else {
        println!("{}", record);
    }
    Ok(())
}

//! Hotel CLI
//!
//! Front-desk command line for the hotel repository

use clap::{Parser, Subcommand, ValueEnum};
use hotel_core::logging_facility::{self, Profile};
use hotel_engine::Repository;
use std::path::PathBuf;

mod commands;

#[derive(Debug, Parser)]
#[command(name = "hotel")]
#[command(about = "Hotel - customers, rooms and bookings", long_about = None)]
struct Cli {
    /// SQLite database file (created on first use)
    #[arg(long, global = true, env = "HOTEL_DB", default_value = ".hotel/hotel.db")]
    db: PathBuf,

    /// Log output format (logs go to stderr)
    #[arg(
        long,
        global = true,
        env = "HOTEL_LOG_FORMAT",
        value_enum,
        default_value_t = LogFormat::Text
    )]
    log_format: LogFormat,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum LogFormat {
    Text,
    Json,
}

impl LogFormat {
    fn profile(self) -> Profile {
        match self {
            LogFormat::Text => Profile::Development,
            LogFormat::Json => Profile::Production,
        }
    }
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Customer records
    Customer(commands::customer::CustomerArgs),
    /// Room records
    Room(commands::room::RoomArgs),
    /// Bookings (adding or deleting one updates room availability)
    Booking(commands::booking::BookingArgs),
    /// Seed import operations
    Seed(commands::seed::SeedArgs),
    /// Interactive numbered menu (default)
    Menu,
}

fn main() {
    // .env must be loaded before clap reads HOTEL_* variables
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    logging_facility::init(cli.log_format.profile());

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let mut repo = Repository::open(&cli.db)?;

    match cli.command.unwrap_or(Commands::Menu) {
        Commands::Customer(args) => commands::customer::execute(args, &mut repo),
        Commands::Room(args) => commands::room::execute(args, &mut repo),
        Commands::Booking(args) => commands::booking::execute(args, &mut repo),
        Commands::Seed(args) => commands::seed::execute(args, &mut repo),
        Commands::Menu => commands::menu::execute(&mut repo),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_subcommand_means_menu() {
        let cli = Cli::try_parse_from(["hotel", "--db", "x.db"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.db, PathBuf::from("x.db"));
    }

    #[test]
    fn test_log_format_maps_to_profile() {
        let cli = Cli::try_parse_from(["hotel", "--log-format", "json", "room", "list"]).unwrap();
        assert_eq!(cli.log_format.profile(), Profile::Production);
    }
}

//! Booking commands
//!
//! Dates are `YYYY-MM-DD`.

use super::{print_record, print_records, CommandResult, OutputArgs};
use clap::{Args, Subcommand};
use hotel_core::model::{BookingId, CustomerId, NewBooking, RoomId};
use hotel_engine::Repository;

#[derive(Debug, Args)]
pub struct BookingArgs {
    #[command(subcommand)]
    pub command: BookingCommand,
}

#[derive(Debug, Subcommand)]
pub enum BookingCommand {
    /// Book a room (marks it unavailable)
    Add(BookingFields),
    /// List all bookings
    List(OutputArgs),
    /// Show one booking
    Show {
        id: BookingId,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Replace every field of a booking (availability is not touched)
    Update {
        id: BookingId,
        #[command(flatten)]
        fields: BookingFields,
    },
    /// Delete a booking (marks its room available)
    Delete { id: BookingId },
}

#[derive(Debug, Args)]
pub struct BookingFields {
    #[arg(long)]
    pub customer_id: CustomerId,

    #[arg(long)]
    pub room_id: RoomId,

    #[arg(long)]
    pub check_in: String,

    #[arg(long)]
    pub check_out: String,
}

impl BookingFields {
    fn parse(&self) -> hotel_core::Result<NewBooking> {
        NewBooking::parse(self.customer_id, self.room_id, &self.check_in, &self.check_out)
    }
}

pub fn execute(args: BookingArgs, repo: &mut Repository) -> CommandResult {
    match args.command {
        BookingCommand::Add(fields) => {
            let booking = repo.add_booking(fields.parse()?)?;
            println!("Added booking {}", booking);
        }
        BookingCommand::List(output) => print_records(&repo.get_bookings()?, &output)?,
        BookingCommand::Show { id, output } => print_record(&repo.get_booking(id)?, &output)?,
        BookingCommand::Update { id, fields } => {
            let booking = repo.update_booking(id, fields.parse()?)?;
            println!("Updated booking {}", booking);
        }
        BookingCommand::Delete { id } => {
            let room_id = repo.delete_booking(id)?;
            println!("Deleted booking #{}; room {} is available", id, room_id);
        }
    }
    Ok(())
}

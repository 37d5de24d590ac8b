//! Room commands

use super::{print_record, print_records, CommandResult, OutputArgs};
use clap::{ArgAction, Args, Subcommand};
use hotel_core::model::{NewRoom, RoomId};
use hotel_engine::Repository;

#[derive(Debug, Args)]
pub struct RoomArgs {
    #[command(subcommand)]
    pub command: RoomCommand,
}

#[derive(Debug, Subcommand)]
pub enum RoomCommand {
    /// Add a room (starts available)
    Add(RoomFields),
    /// List all rooms
    List(OutputArgs),
    /// Show one room
    Show {
        id: RoomId,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Replace every field of a room
    Update {
        id: RoomId,
        #[command(flatten)]
        fields: RoomFields,
        /// New availability flag
        #[arg(long, action = ArgAction::Set)]
        available: bool,
    },
    /// Delete a room with no bookings
    Delete { id: RoomId },
}

#[derive(Debug, Args)]
pub struct RoomFields {
    #[arg(long = "number")]
    pub room_number: String,

    #[arg(long = "type")]
    pub room_type: String,

    #[arg(long)]
    pub price: f64,
}

impl From<RoomFields> for NewRoom {
    fn from(fields: RoomFields) -> Self {
        NewRoom::new(fields.room_number, fields.room_type, fields.price)
    }
}

pub fn execute(args: RoomArgs, repo: &mut Repository) -> CommandResult {
    match args.command {
        RoomCommand::Add(fields) => {
            let room = repo.add_room(fields.into())?;
            println!("Added {}", room);
        }
        RoomCommand::List(output) => print_records(&repo.get_rooms()?, &output)?,
        RoomCommand::Show { id, output } => print_record(&repo.get_room(id)?, &output)?,
        RoomCommand::Update {
            id,
            fields,
            available,
        } => {
            let room = repo.update_room(id, fields.into(), available)?;
            println!("Updated {}", room);
        }
        RoomCommand::Delete { id } => {
            repo.delete_room(id)?;
            println!("Deleted room #{}", id);
        }
    }
    Ok(())
}

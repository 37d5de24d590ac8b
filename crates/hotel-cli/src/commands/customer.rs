//! Customer commands
//!
//! Usage: hotel customer add --name <NAME> --phone <PHONE>

use super::{print_record, print_records, CommandResult, OutputArgs};
use clap::{Args, Subcommand};
use hotel_core::model::{CustomerId, NewCustomer};
use hotel_engine::Repository;

#[derive(Debug, Args)]
pub struct CustomerArgs {
    #[command(subcommand)]
    pub command: CustomerCommand,
}

#[derive(Debug, Subcommand)]
pub enum CustomerCommand {
    /// Add a customer
    Add(CustomerFields),
    /// List all customers
    List(OutputArgs),
    /// Show one customer
    Show {
        id: CustomerId,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Replace a customer's name and phone
    Update {
        id: CustomerId,
        #[command(flatten)]
        fields: CustomerFields,
    },
    /// Delete a customer with no bookings
    Delete { id: CustomerId },
}

#[derive(Debug, Args)]
pub struct CustomerFields {
    #[arg(long)]
    pub name: String,

    #[arg(long)]
    pub phone: String,
}

impl From<CustomerFields> for NewCustomer {
    fn from(fields: CustomerFields) -> Self {
        NewCustomer::new(fields.name, fields.phone)
    }
}

pub fn execute(args: CustomerArgs, repo: &mut Repository) -> CommandResult {
    match args.command {
        CustomerCommand::Add(fields) => {
            let customer = repo.add_customer(fields.into())?;
            println!("Added customer {}", customer);
        }
        CustomerCommand::List(output) => print_records(&repo.get_customers()?, &output)?,
        CustomerCommand::Show { id, output } => print_record(&repo.get_customer(id)?, &output)?,
        CustomerCommand::Update { id, fields } => {
            let customer = repo.update_customer(id, fields.into())?;
            println!("Updated customer {}", customer);
        }
        CustomerCommand::Delete { id } => {
            repo.delete_customer(id)?;
            println!("Deleted customer #{}", id);
        }
    }
    Ok(())
}

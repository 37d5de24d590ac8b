//! Interactive numbered menu
//!
//! Reads one answer per line. A malformed answer or a failed operation is
//! reported and the menu is shown again; `0` or end of input leaves.

use super::CommandResult;
use hotel_core::model::{NewBooking, NewCustomer, NewRoom};
use hotel_core::{ExError, HotelError};
use hotel_engine::Repository;
use std::io::{self, BufRead, Write};
use std::str::FromStr;
use thiserror::Error;

const OPTIONS: &[&str] = &[
    "1. Add Customer",
    "2. Add Room",
    "3. Add Booking",
    "4. Show Customers",
    "5. Show Rooms",
    "6. Show Bookings",
    "7. Update Customer",
    "8. Update Room",
    "9. Update Booking",
    "10. Delete Customer",
    "11. Delete Room",
    "12. Delete Booking",
    "0. Exit",
];

#[derive(Debug, Error)]
enum MenuError {
    #[error("end of input")]
    Eof,

    #[error(transparent)]
    Io(#[from] io::Error),

    #[error("invalid {field}: '{value}'")]
    Malformed { field: &'static str, value: String },

    #[error(transparent)]
    Op(#[from] ExError),
}

impl From<HotelError> for MenuError {
    fn from(err: HotelError) -> Self {
        MenuError::Op(err.into())
    }
}

/// Run the menu on the process's stdin and stdout
pub fn execute(repo: &mut Repository) -> CommandResult {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run(repo, stdin.lock(), stdout.lock())?;
    Ok(())
}

/// Run the menu until `0` or end of input
pub fn run<R: BufRead, W: Write>(repo: &mut Repository, input: R, output: W) -> io::Result<()> {
    let mut menu = Menu {
        repo,
        input,
        output,
    };

    loop {
        for option in OPTIONS {
            writeln!(menu.output, "{}", option)?;
        }

        let choice = match menu.prompt_parsed::<u8>("Enter choice: ", "choice") {
            Ok(0) | Err(MenuError::Eof) => return Ok(()),
            Ok(choice) => choice,
            Err(MenuError::Io(e)) => return Err(e),
            Err(_) => {
                writeln!(menu.output, "Invalid choice!")?;
                continue;
            }
        };

        match menu.dispatch(choice) {
            Ok(()) => {}
            Err(MenuError::Eof) => return Ok(()),
            Err(MenuError::Io(e)) => return Err(e),
            Err(MenuError::Op(e)) => report(&mut menu.output, &e)?,
            Err(e) => writeln!(menu.output, "Error: {}", e)?,
        }
    }
}

/// Print a failed operation with its cause and a retry hint where one applies
fn report<W: Write>(output: &mut W, err: &ExError) -> io::Result<()> {
    writeln!(output, "Error: {}", err)?;
    if let Some(cause) = err.source_error() {
        writeln!(output, "  caused by: {}", cause)?;
    }
    if err.kind().is_retryable() {
        writeln!(output, "  the database may be busy; try again")?;
    }
    Ok(())
}

struct Menu<'a, R, W> {
    repo: &'a mut Repository,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Menu<'_, R, W> {
    fn dispatch(&mut self, choice: u8) -> Result<(), MenuError> {
        match choice {
            1 => {
                let customer = self.read_customer("Enter name: ", "Enter phone: ")?;
                let created = self.repo.add_customer(customer)?;
                writeln!(self.output, "Added customer {}", created)?;
            }
            2 => {
                let room = self.read_room(
                    "Enter room number: ",
                    "Enter room type: ",
                    "Enter price: ",
                )?;
                let created = self.repo.add_room(room)?;
                writeln!(self.output, "Added {}", created)?;
            }
            3 => {
                let booking = self.read_booking(
                    "Enter customer ID: ",
                    "Enter room ID: ",
                    "Enter check-in date (YYYY-MM-DD): ",
                    "Enter check-out date (YYYY-MM-DD): ",
                )?;
                let created = self.repo.add_booking(booking)?;
                writeln!(self.output, "Added booking {}", created)?;
            }
            4 => {
                let customers = self.repo.get_customers()?;
                self.print_all("Customers:", &customers)?;
            }
            5 => {
                let rooms = self.repo.get_rooms()?;
                self.print_all("Rooms:", &rooms)?;
            }
            6 => {
                let bookings = self.repo.get_bookings()?;
                self.print_all("Bookings:", &bookings)?;
            }
            7 => {
                let id = self.prompt_parsed("Enter customer ID: ", "customer ID")?;
                let customer = self.read_customer("Enter new name: ", "Enter new phone: ")?;
                let updated = self.repo.update_customer(id, customer)?;
                writeln!(self.output, "Updated customer {}", updated)?;
            }
            8 => {
                let id = self.prompt_parsed("Enter room ID: ", "room ID")?;
                let room = self.read_room(
                    "Enter new room number: ",
                    "Enter new room type: ",
                    "Enter new price: ",
                )?;
                let available = self.read_availability()?;
                let updated = self.repo.update_room(id, room, available)?;
                writeln!(self.output, "Updated {}", updated)?;
            }
            9 => {
                let id = self.prompt_parsed("Enter booking ID: ", "booking ID")?;
                let booking = self.read_booking(
                    "Enter new customer ID: ",
                    "Enter new room ID: ",
                    "Enter new check-in date (YYYY-MM-DD): ",
                    "Enter new check-out date (YYYY-MM-DD): ",
                )?;
                let updated = self.repo.update_booking(id, booking)?;
                writeln!(self.output, "Updated booking {}", updated)?;
            }
            10 => {
                let id = self.prompt_parsed("Enter customer ID: ", "customer ID")?;
                self.repo.delete_customer(id)?;
                writeln!(self.output, "Deleted customer #{}", id)?;
            }
            11 => {
                let id = self.prompt_parsed("Enter room ID: ", "room ID")?;
                self.repo.delete_room(id)?;
                writeln!(self.output, "Deleted room #{}", id)?;
            }
            12 => {
                let id = self.prompt_parsed("Enter booking ID: ", "booking ID")?;
                let room_id = self.repo.delete_booking(id)?;
                writeln!(
                    self.output,
                    "Deleted booking #{}; room {} is available",
                    id, room_id
                )?;
            }
            _ => writeln!(self.output, "Invalid choice!")?,
        }
        Ok(())
    }

    fn prompt(&mut self, label: &str) -> Result<String, MenuError> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(MenuError::Eof);
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    fn prompt_parsed<T: FromStr>(
        &mut self,
        label: &str,
        field: &'static str,
    ) -> Result<T, MenuError> {
        let value = self.prompt(label)?;
        value
            .trim()
            .parse()
            .map_err(|_| MenuError::Malformed { field, value })
    }

    fn read_customer(&mut self, name: &str, phone: &str) -> Result<NewCustomer, MenuError> {
        let name = self.prompt(name)?;
        let phone = self.prompt(phone)?;
        Ok(NewCustomer::new(name, phone))
    }

    fn read_room(&mut self, number: &str, kind: &str, price: &str) -> Result<NewRoom, MenuError> {
        let room_number = self.prompt(number)?;
        let room_type = self.prompt(kind)?;
        let price = self.prompt_parsed(price, "price")?;
        Ok(NewRoom::new(room_number, room_type, price))
    }

    fn read_booking(
        &mut self,
        customer: &str,
        room: &str,
        check_in: &str,
        check_out: &str,
    ) -> Result<NewBooking, MenuError> {
        let customer_id = self.prompt_parsed(customer, "customer ID")?;
        let room_id = self.prompt_parsed(room, "room ID")?;
        let check_in = self.prompt(check_in)?;
        let check_out = self.prompt(check_out)?;
        Ok(NewBooking::parse(customer_id, room_id, &check_in, &check_out)?)
    }

    fn read_availability(&mut self) -> Result<bool, MenuError> {
        let value =
            self.prompt("Enter availability (1 for available, 0 for not available): ")?;
        match value.trim() {
            "1" => Ok(true),
            "0" => Ok(false),
            _ => Err(MenuError::Malformed {
                field: "availability",
                value,
            }),
        }
    }

    fn print_all<T: std::fmt::Display>(&mut self, title: &str, records: &[T]) -> Result<(), MenuError> {
        writeln!(self.output, "{}", title)?;
        if records.is_empty() {
            writeln!(self.output, "  (none)")?;
        }
        for record in records {
            writeln!(self.output, "  {}", record)?;
        }
        Ok(())
    }
}

//! Customer operations

#![allow(clippy::result_large_err)]

use crate::repository::{ensure_customer_exists, finish_op, Repository};
use hotel_core::model::{Customer, CustomerId, NewCustomer};
use hotel_core::rules::validation::validate_new_customer;
use hotel_core::{log_op_start, HotelError};
use hotel_core_types::Sensitive;
use hotel_store::errors::{from_rusqlite, Result};
use hotel_store::SqliteRepo;
use std::time::Instant;

impl Repository {
    /// Add a customer and return it with its assigned id
    ///
    /// # Errors
    /// - `InvalidInput`: blank name or phone (nothing is written)
    /// - `Persistence`: database error
    pub fn add_customer(&mut self, customer: NewCustomer) -> Result<Customer> {
        log_op_start!("add_customer", phone = %Sensitive::new(&customer.phone));
        let start = Instant::now();

        let result = (|| -> Result<_> {
            validate_new_customer(&customer)?;
            SqliteRepo::insert_customer(&self.conn, &customer)
        })();

        finish_op("add_customer", start, result)
    }

    /// All customers ordered by id
    pub fn get_customers(&self) -> Result<Vec<Customer>> {
        log_op_start!("get_customers");
        let start = Instant::now();

        let result = SqliteRepo::list_customers(&self.conn);
        if let Ok(rows) = &result {
            tracing::debug!(row_count = rows.len(), "listed customers");
        }

        finish_op("get_customers", start, result)
    }

    /// One customer by id
    ///
    /// # Errors
    /// `NotFound` if no customer has this id.
    pub fn get_customer(&self, customer_id: CustomerId) -> Result<Customer> {
        log_op_start!("get_customer", customer_id = customer_id);
        let start = Instant::now();

        let result = SqliteRepo::get_customer(&self.conn, customer_id).and_then(|found| {
            found.ok_or_else(|| HotelError::CustomerNotFound { customer_id }.into())
        });

        finish_op("get_customer", start, result)
    }

    /// Overwrite a customer's name and phone, keeping its id
    ///
    /// # Errors
    /// - `InvalidInput`: blank name or phone
    /// - `NotFound`: no customer has this id
    pub fn update_customer(
        &mut self,
        customer_id: CustomerId,
        customer: NewCustomer,
    ) -> Result<Customer> {
        log_op_start!(
            "update_customer",
            customer_id = customer_id,
            phone = %Sensitive::new(&customer.phone)
        );
        let start = Instant::now();

        let result = (|| -> Result<_> {
            validate_new_customer(&customer)?;
            match SqliteRepo::update_customer(&self.conn, customer_id, &customer)? {
                0 => Err(HotelError::CustomerNotFound { customer_id }.into()),
                _ => Ok(customer.into_customer(customer_id)),
            }
        })();

        finish_op("update_customer", start, result)
    }

    /// Delete a customer that no booking references
    ///
    /// # Errors
    /// - `NotFound`: no customer has this id
    /// - `ConstraintViolation`: bookings still reference the customer
    pub fn delete_customer(&mut self, customer_id: CustomerId) -> Result<()> {
        log_op_start!("delete_customer", customer_id = customer_id);
        let start = Instant::now();

        let result = (|| -> Result<_> {
            let tx = self.conn.transaction().map_err(from_rusqlite)?;

            ensure_customer_exists(&tx, customer_id)?;
            let booking_count = SqliteRepo::count_bookings_for_customer(&tx, customer_id)?;
            if booking_count > 0 {
                return Err(HotelError::CustomerHasBookings {
                    customer_id,
                    booking_count,
                }
                .into());
            }

            SqliteRepo::delete_customer(&tx, customer_id)?;
            tx.commit().map_err(from_rusqlite)
        })();

        finish_op("delete_customer", start, result)
    }
}

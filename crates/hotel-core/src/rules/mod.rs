//! Input rules enforced before any write reaches storage

pub mod validation;

pub use validation::{parse_date, validate_new_customer, validate_new_room};

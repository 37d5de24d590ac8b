use serde::{Deserialize, Serialize};

/// Customer identity, assigned by the store on insert
pub type CustomerId = i64;

/// A hotel guest
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    /// Auto-assigned identity, stable for the lifetime of the record
    pub id: CustomerId,

    /// Full name (never blank)
    pub name: String,

    /// Contact phone number (never blank)
    pub phone: String,
}

/// Field values for creating or overwriting a customer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCustomer {
    pub name: String,
    pub phone: String,
}

impl NewCustomer {
    pub fn new(name: impl Into<String>, phone: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
        }
    }

    /// Attach an identity, producing the stored record
    pub fn into_customer(self, id: CustomerId) -> Customer {
        Customer {
            id,
            name: self.name,
            phone: self.phone,
        }
    }
}

impl std::fmt::Display for Customer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{} {} ({})", self.id, self.name, self.phone)
    }
}

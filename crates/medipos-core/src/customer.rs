//! # Customer Directory
//!
//! Customers a bill can be issued to. The directory is read-mostly; the
//! billing page's "New Customer" form is the only writer. Names and phone
//! numbers are not required to be unique.

use crate::error::CoreResult;
use crate::ids::{IdGenerator, UuidGenerator};
use crate::types::{Customer, NewCustomer};
use crate::validation::validate_new_customer;

/// Read/write access to customers.
pub trait CustomerDirectory {
    fn list_customers(&self) -> Vec<Customer>;

    fn find_customer(&self, id: &str) -> Option<Customer>;

    /// Creates a customer with a fresh id.
    fn create_customer(&mut self, fields: NewCustomer) -> CoreResult<Customer>;
}

/// Customer list held in memory for the session.
#[derive(Debug)]
pub struct InMemoryCustomerDirectory {
    customers: Vec<Customer>,
    ids: Box<dyn IdGenerator>,
}

impl InMemoryCustomerDirectory {
    pub fn new(customers: Vec<Customer>) -> Self {
        Self::with_id_generator(customers, Box::new(UuidGenerator))
    }

    pub fn with_id_generator(customers: Vec<Customer>, ids: Box<dyn IdGenerator>) -> Self {
        InMemoryCustomerDirectory { customers, ids }
    }

    /// Customers whose name contains `term` (case-insensitive) or whose
    /// phone contains it verbatim. An empty term matches everyone.
    pub fn search(&self, term: &str) -> Vec<Customer> {
        let term = term.trim();
        let lowered = term.to_lowercase();
        self.customers
            .iter()
            .filter(|c| c.name.to_lowercase().contains(&lowered) || c.phone.contains(term))
            .cloned()
            .collect()
    }
}

impl CustomerDirectory for InMemoryCustomerDirectory {
    fn list_customers(&self) -> Vec<Customer> {
        self.customers.clone()
    }

    fn find_customer(&self, id: &str) -> Option<Customer> {
        self.customers.iter().find(|c| c.id == id).cloned()
    }

    fn create_customer(&mut self, fields: NewCustomer) -> CoreResult<Customer> {
        validate_new_customer(&fields)?;

        let customer = Customer {
            id: self.ids.next_id(),
            name: fields.name.trim().to_string(),
            phone: fields.phone.trim().to_string(),
            email: non_blank(fields.email),
            address: non_blank(fields.address),
        };
        self.customers.push(customer.clone());
        Ok(customer)
    }
}

/// Empty form fields come through as `Some("")`.
fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{CoreError, ValidationError};
    use crate::ids::SequentialIds;

    fn customer(id: &str, name: &str, phone: &str) -> Customer {
        Customer {
            id: id.to_string(),
            name: name.to_string(),
            phone: phone.to_string(),
            email: None,
            address: None,
        }
    }

    fn directory() -> InMemoryCustomerDirectory {
        InMemoryCustomerDirectory::with_id_generator(
            vec![
                customer("1", "John Doe", "555-123-4567"),
                customer("2", "Jane Smith", "555-987-6543"),
            ],
            Box::new(SequentialIds::new("cus")),
        )
    }

    #[test]
    fn test_search_by_name_or_phone() {
        let directory = directory();
        assert_eq!(directory.search("jane")[0].id, "2");
        assert_eq!(directory.search("123-45")[0].id, "1");
        assert_eq!(directory.search("").len(), 2);
        assert!(directory.search("nobody").is_empty());
    }

    #[test]
    fn test_create_customer_generates_id() {
        let mut directory = directory();
        let created = directory
            .create_customer(NewCustomer {
                name: " Lisa Anderson ".to_string(),
                phone: "555-234-5678".to_string(),
                email: Some("".to_string()),
                address: Some("101 Elm St".to_string()),
            })
            .unwrap();

        assert_eq!(created.id, "cus-1");
        assert_eq!(created.name, "Lisa Anderson");
        assert_eq!(created.email, None);
        assert_eq!(created.address.as_deref(), Some("101 Elm St"));
        assert_eq!(directory.find_customer("cus-1"), Some(created));
    }

    #[test]
    fn test_create_customer_allows_duplicate_details() {
        let mut directory = directory();
        let fields = NewCustomer {
            name: "John Doe".to_string(),
            phone: "555-123-4567".to_string(),
            ..NewCustomer::default()
        };

        let a = directory.create_customer(fields.clone()).unwrap();
        let b = directory.create_customer(fields).unwrap();
        assert_ne!(a.id, b.id);
        assert_eq!(directory.list_customers().len(), 4);
    }

    #[test]
    fn test_create_customer_requires_name() {
        let mut directory = directory();
        let err = directory
            .create_customer(NewCustomer {
                phone: "555-000-0000".to_string(),
                ..NewCustomer::default()
            })
            .unwrap_err();

        assert_eq!(
            err,
            CoreError::Validation(ValidationError::Required {
                field: "name".to_string()
            })
        );
        assert_eq!(directory.list_customers().len(), 2);
    }
}

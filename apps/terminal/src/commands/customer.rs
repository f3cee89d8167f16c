//! # Customer Commands
//!
//! The customer picker on the billing page: list, search, create, and
//! select who the bill is for.

use medipos_core::notification::NotificationKind;
use medipos_core::types::{Customer, NewCustomer};
use medipos_core::validation::validate_search_query;
use medipos_core::{CoreError, CustomerDirectory, Notification, NotificationSink};
use tracing::{debug, info};

use crate::commands::cart::CartResponse;
use crate::error::ApiError;
use crate::state::{BillingState, ConfigState, CustomerState};

pub fn list_customers(customers: &CustomerState) -> Vec<Customer> {
    debug!("list_customers command");
    customers.with_directory(|d| d.list_customers())
}

/// Searches customers by name (case-insensitive) or phone.
pub fn search_customers(
    customers: &CustomerState,
    query: String,
) -> Result<Vec<Customer>, ApiError> {
    debug!(query = %query, "search_customers command");

    let query = validate_search_query(&query)?;
    Ok(customers.with_directory(|d| d.search(&query)))
}

/// Creates a customer from the "New Customer" form and selects it for the
/// current bill.
pub fn create_customer(
    customers: &CustomerState,
    billing: &BillingState,
    sink: &mut dyn NotificationSink,
    fields: NewCustomer,
) -> Result<Customer, ApiError> {
    debug!(name = %fields.name, "create_customer command");

    let customer = customers.with_directory_mut(|d| d.create_customer(fields))?;
    billing.with_session_mut(|s| s.select_customer(customer.clone()));

    info!(customer_id = %customer.id, name = %customer.name, "customer created");
    sink.notify(Notification::success(
        NotificationKind::CustomerCreated,
        "Customer added successfully",
    ));
    Ok(customer)
}

/// Picks the customer the bill is issued to.
pub fn select_customer(
    customers: &CustomerState,
    billing: &BillingState,
    config: &ConfigState,
    customer_id: String,
) -> Result<CartResponse, ApiError> {
    debug!(customer_id = %customer_id, "select_customer command");

    let customer = customers
        .with_directory(|d| d.find_customer(&customer_id))
        .ok_or(CoreError::CustomerNotFound(customer_id))?;
    billing.with_session_mut(|s| s.select_customer(customer));

    Ok(CartResponse::new(billing.with_session(|s| s.bill()), config))
}

pub fn clear_customer(billing: &BillingState, config: &ConfigState) -> CartResponse {
    debug!("clear_customer command");

    billing.with_session_mut(|s| s.clear_customer());
    CartResponse::new(billing.with_session(|s| s.bill()), config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use medipos_core::ids::SequentialIds;
    use medipos_core::InMemoryCustomerDirectory;

    use crate::error::ErrorCode;
    use crate::seed;

    fn customers() -> CustomerState {
        CustomerState::new(InMemoryCustomerDirectory::with_id_generator(
            seed::customers(),
            Box::new(SequentialIds::new("cust")),
        ))
    }

    #[test]
    fn test_search_by_phone_and_name() {
        let customers = customers();

        let by_phone = search_customers(&customers, "987".to_string()).unwrap();
        assert_eq!(by_phone[0].name, "Jane Smith");

        let by_name = search_customers(&customers, "brown".to_string()).unwrap();
        assert_eq!(by_name[0].id, "5");
    }

    #[test]
    fn test_create_selects_new_customer() {
        let customers = customers();
        let billing = BillingState::new();
        let mut sink: Vec<Notification> = Vec::new();

        let created = create_customer(
            &customers,
            &billing,
            &mut sink,
            NewCustomer {
                name: "Asha Patel".to_string(),
                phone: "555-000-1111".to_string(),
                email: Some(String::new()),
                address: None,
            },
        )
        .unwrap();

        assert_eq!(created.id, "cust-1");
        assert_eq!(created.email, None);
        assert_eq!(list_customers(&customers).len(), 6);
        assert_eq!(
            billing.with_session(|s| s.customer().map(|c| c.id.clone())),
            Some("cust-1".to_string())
        );
        assert_eq!(sink[0].kind, NotificationKind::CustomerCreated);
    }

    #[test]
    fn test_select_unknown_customer() {
        let err = select_customer(
            &customers(),
            &BillingState::new(),
            &ConfigState::default(),
            "99".to_string(),
        )
        .unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
    }

    #[test]
    fn test_select_then_clear() {
        let customers = customers();
        let billing = BillingState::new();
        let config = ConfigState::default();

        let cart = select_customer(&customers, &billing, &config, "3".to_string()).unwrap();
        assert_eq!(cart.bill.customer.unwrap().name, "Robert Johnson");

        let cart = clear_customer(&billing, &config);
        assert!(cart.bill.customer.is_none());
    }
}

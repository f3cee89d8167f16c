//! # Commands Module
//!
//! Every command the client can send, and the dispatcher that routes a
//! command line to its handler.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs        ◄─── You are here (Command enum, dispatch, Response)
//! ├── auth.rs       ◄─── login, logout, whoami, nav_links, role checks
//! ├── config.rs     ◄─── Configuration retrieval
//! ├── product.rs    ◄─── Product search, CRUD
//! ├── inventory.rs  ◄─── Inventory table, dashboard
//! ├── customer.rs   ◄─── Customer list/search/create/select
//! ├── cart.rs       ◄─── Cart, discount, checkout
//! ├── report.rs     ◄─── Sales report
//! └── settings.rs   ◄─── Settings toggles
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Command Flow                                         │
//! │                                                                         │
//! │  stdin:  {"cmd":"add_to_cart","productId":"1"}                          │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  serde_json ──► Command::AddToCart { product_id }   (else BAD_REQUEST)  │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  auth::authorize(session, command.access())   (UNAUTHORIZED/FORBIDDEN)  │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  cart::add_to_cart(&catalog, &billing, &config, &mut notifications, ..) │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  stdout: {"ok":true,"data":{...},"notifications":[...]}                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod auth;
pub mod cart;
pub mod config;
pub mod customer;
pub mod inventory;
pub mod product;
pub mod report;
pub mod settings;

use chrono::NaiveDate;
use medipos_core::access::{Role, Route};
use medipos_core::inventory::InventoryFilter;
use medipos_core::settings::SettingKey;
use medipos_core::types::{NewCustomer, NewProduct, Product};
use medipos_core::{Discount, Notification};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

use crate::error::ApiError;
use crate::state::States;
use auth::Access;

/// A command line, tagged by `cmd`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "cmd", rename_all = "snake_case", rename_all_fields = "camelCase")]
pub enum Command {
    // Auth
    Login {
        username: String,
        password: String,
        role: Role,
    },
    Logout,
    Whoami,
    NavLinks,
    GetConfig,

    // Products & inventory
    ListProducts,
    SearchProducts {
        #[serde(default)]
        query: String,
    },
    AddProduct {
        product: NewProduct,
    },
    UpdateProduct {
        product: Product,
    },
    DeleteProduct {
        id: String,
    },
    Inventory {
        #[serde(default)]
        search: String,
        #[serde(default)]
        near_expiry_only: bool,
    },
    Dashboard,

    // Customers
    ListCustomers,
    SearchCustomers {
        #[serde(default)]
        query: String,
    },
    CreateCustomer {
        customer: NewCustomer,
    },
    SelectCustomer {
        customer_id: String,
    },
    ClearCustomer,

    // Cart
    GetCart,
    AddToCart {
        product_id: String,
    },
    UpdateCartItem {
        product_id: String,
        quantity: i64,
    },
    RemoveFromCart {
        product_id: String,
    },
    ClearCart,
    SetDiscount {
        discount: Discount,
    },
    Checkout,

    // Admin
    SalesReport {
        start: NaiveDate,
        end: NaiveDate,
    },
    GetSettings,
    ToggleSetting {
        key: SettingKey,
    },
}

impl Command {
    /// What the session must satisfy before this command runs.
    pub fn access(&self) -> Access {
        match self {
            Command::Login { .. } | Command::Whoami | Command::GetConfig => Access::Public,
            Command::Logout | Command::NavLinks => Access::SignedIn,
            Command::Dashboard => Access::Page(Route::Dashboard),
            Command::ListProducts
            | Command::SearchProducts { .. }
            | Command::AddProduct { .. }
            | Command::UpdateProduct { .. }
            | Command::DeleteProduct { .. }
            | Command::Inventory { .. } => Access::Page(Route::Inventory),
            Command::ListCustomers
            | Command::SearchCustomers { .. }
            | Command::CreateCustomer { .. }
            | Command::SelectCustomer { .. }
            | Command::ClearCustomer
            | Command::GetCart
            | Command::AddToCart { .. }
            | Command::UpdateCartItem { .. }
            | Command::RemoveFromCart { .. }
            | Command::ClearCart
            | Command::SetDiscount { .. }
            | Command::Checkout => Access::Page(Route::Billing),
            Command::SalesReport { .. } => Access::Page(Route::Reports),
            Command::GetSettings | Command::ToggleSetting { .. } => Access::Page(Route::Settings),
        }
    }
}

/// One response line.
///
/// ```json
/// {"ok":true,"data":{...},"notifications":[...]}
/// {"ok":false,"error":{"code":"NOT_FOUND","message":"..."},"notifications":[]}
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ApiError>,
    pub notifications: Vec<Notification>,
}

impl Response {
    fn new(result: Result<Value, ApiError>, notifications: Vec<Notification>) -> Self {
        match result {
            Ok(data) => Response {
                ok: true,
                data: Some(data),
                error: None,
                notifications,
            },
            Err(error) => Response {
                ok: false,
                data: None,
                error: Some(error),
                notifications,
            },
        }
    }
}

fn to_data<T: Serialize>(value: T) -> Result<Value, ApiError> {
    serde_json::to_value(value)
        .map_err(|e| ApiError::internal(format!("Failed to encode response: {}", e)))
}

/// Parses one command line and runs it.
///
/// Never fails: parse errors, auth failures and rejected operations all
/// come back as `ok: false` responses.
pub fn dispatch(states: &States, line: &str) -> Response {
    let command = match serde_json::from_str::<Command>(line) {
        Ok(command) => command,
        Err(e) => {
            warn!(error = %e, "unparseable command line");
            return Response::new(
                Err(ApiError::bad_request(format!("Invalid command: {}", e))),
                Vec::new(),
            );
        }
    };

    let mut notifications: Vec<Notification> = Vec::new();
    let result = execute(states, command, &mut notifications);
    if let Err(err) = &result {
        warn!(code = ?err.code, message = %err.message, "command rejected");
    }
    Response::new(result, notifications)
}

/// Runs an already-parsed command.
pub fn execute(
    states: &States,
    command: Command,
    sink: &mut Vec<Notification>,
) -> Result<Value, ApiError> {
    let user = auth::authorize(&states.session, command.access())?;

    match command {
        Command::Login {
            username,
            password,
            role,
        } => to_data(auth::login(&states.session, &states.billing, username, password, role)?),
        Command::Logout => to_data(auth::logout(&states.session, &states.billing)),
        Command::Whoami => to_data(auth::whoami(&states.session)),
        Command::NavLinks => match user {
            Some(user) => to_data(auth::get_nav_links(&user)),
            None => Err(ApiError::unauthorized()),
        },
        Command::GetConfig => to_data(config::get_config(&states.config)),

        Command::ListProducts => to_data(product::list_products(&states.catalog)),
        Command::SearchProducts { query } => {
            to_data(product::search_products(&states.catalog, query)?)
        }
        Command::AddProduct { product: fields } => {
            to_data(product::add_product(&states.catalog, fields)?)
        }
        Command::UpdateProduct { product: updated } => {
            to_data(product::update_product(&states.catalog, updated)?)
        }
        Command::DeleteProduct { id } => to_data(product::delete_product(&states.catalog, id)?),
        Command::Inventory {
            search,
            near_expiry_only,
        } => to_data(inventory::inventory(
            &states.catalog,
            &states.config,
            InventoryFilter {
                search,
                near_expiry_only,
            },
        )),
        Command::Dashboard => to_data(inventory::dashboard(
            &states.catalog,
            &states.sales,
            &states.config,
        )),

        Command::ListCustomers => to_data(customer::list_customers(&states.customers)),
        Command::SearchCustomers { query } => {
            to_data(customer::search_customers(&states.customers, query)?)
        }
        Command::CreateCustomer { customer: fields } => to_data(customer::create_customer(
            &states.customers,
            &states.billing,
            sink,
            fields,
        )?),
        Command::SelectCustomer { customer_id } => to_data(customer::select_customer(
            &states.customers,
            &states.billing,
            &states.config,
            customer_id,
        )?),
        Command::ClearCustomer => {
            to_data(customer::clear_customer(&states.billing, &states.config))
        }

        Command::GetCart => to_data(cart::get_cart(&states.billing, &states.config)),
        Command::AddToCart { product_id } => to_data(cart::add_to_cart(
            &states.catalog,
            &states.billing,
            &states.config,
            sink,
            product_id,
        )?),
        Command::UpdateCartItem {
            product_id,
            quantity,
        } => to_data(cart::update_cart_item(
            &states.catalog,
            &states.billing,
            &states.config,
            sink,
            product_id,
            quantity,
        )?),
        Command::RemoveFromCart { product_id } => to_data(cart::remove_from_cart(
            &states.billing,
            &states.config,
            product_id,
        )),
        Command::ClearCart => to_data(cart::clear_cart(&states.billing, &states.config)),
        Command::SetDiscount { discount } => to_data(cart::set_discount(
            &states.billing,
            &states.config,
            sink,
            discount,
        )?),
        Command::Checkout => to_data(cart::checkout(&states.billing, &states.config, sink)?),

        Command::SalesReport { start, end } => to_data(report::sales_report(
            &states.sales,
            &states.config,
            start,
            end,
        )?),
        Command::GetSettings => to_data(settings::get_settings(&states.settings)),
        Command::ToggleSetting { key } => {
            to_data(settings::toggle_setting(&states.settings, sink, key))
        }
    }
}

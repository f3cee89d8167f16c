//! # State Module
//!
//! Manages application state for the terminal app.
//!
//! ## Multiple State Types
//! Instead of one struct that owns everything behind a single lock, each
//! concern gets its own state type. Commands take only the pieces they
//! need; [`States`] just carries them to the dispatcher.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         States                                          │
//! │                                                                         │
//! │  ┌──────────────┐ ┌──────────────┐ ┌──────────────┐ ┌──────────────┐   │
//! │  │ CatalogState │ │ CustomerState│ │ BillingState │ │ SessionState │   │
//! │  │ RwLock       │ │ RwLock       │ │ Arc<Mutex>   │ │ Arc<Mutex>   │   │
//! │  └──────────────┘ └──────────────┘ └──────────────┘ └──────────────┘   │
//! │  ┌──────────────┐ ┌──────────────┐ ┌──────────────┐                    │
//! │  │ SettingsState│ │ SalesState   │ │ ConfigState  │                    │
//! │  │ Arc<Mutex>   │ │ read-only    │ │ read-only    │                    │
//! │  └──────────────┘ └──────────────┘ └──────────────┘                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod billing;
mod catalog;
mod config;
mod sales;
mod session;

pub use billing::BillingState;
pub use catalog::{CatalogState, CustomerState};
pub use config::ConfigState;
pub use sales::SalesState;
pub use session::{SessionState, SettingsState};

use medipos_core::{InMemoryCatalog, InMemoryCustomerDirectory};

use crate::seed;

/// Every state object the commands can ask for.
#[derive(Debug, Clone)]
pub struct States {
    pub config: ConfigState,
    pub session: SessionState,
    pub catalog: CatalogState,
    pub customers: CustomerState,
    pub billing: BillingState,
    pub settings: SettingsState,
    pub sales: SalesState,
}

impl States {
    /// States loaded with the demo pharmacy data.
    pub fn seeded(config: ConfigState) -> Self {
        States {
            config,
            session: SessionState::new(),
            catalog: CatalogState::new(InMemoryCatalog::new(seed::products())),
            customers: CustomerState::new(InMemoryCustomerDirectory::new(seed::customers())),
            billing: BillingState::new(),
            settings: SettingsState::new(),
            sales: SalesState {
                reports: seed::sales_reports(),
                top_sellers: seed::top_sellers(),
                todays_revenue: seed::todays_revenue(),
            },
        }
    }
}

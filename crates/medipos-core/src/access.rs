//! # Roles & Route Access
//!
//! Who may open which page. Authentication is simulated: any non-empty
//! username/password logs in with the role picked on the login form.
//!
//! ```text
//! ┌────────────┬───────────┬───────────┬─────────┬─────────┬──────────┐
//! │            │ Dashboard │ Inventory │ Billing │ Reports │ Settings │
//! ├────────────┼───────────┼───────────┼─────────┼─────────┼──────────┤
//! │ Admin      │     ✓     │     ✓     │    ✓    │    ✓    │    ✓     │
//! │ Employee   │     ✓     │     ✓     │    ✓    │    ✗    │    ✗     │
//! └────────────┴───────────┴───────────┴─────────┴─────────┴──────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreResult, ValidationError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum Role {
    Admin,
    Employee,
}

impl Role {
    /// Label shown under the user's name in the sidebar.
    pub fn label(&self) -> &'static str {
        match self {
            Role::Admin => "Administrator",
            Role::Employee => "Employee",
        }
    }
}

/// Pages of the application shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum Route {
    Dashboard,
    Inventory,
    Billing,
    Reports,
    Settings,
}

impl Route {
    /// Sidebar order.
    pub const ALL: [Route; 5] = [
        Route::Dashboard,
        Route::Inventory,
        Route::Billing,
        Route::Reports,
        Route::Settings,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            Route::Dashboard => "/",
            Route::Inventory => "/inventory",
            Route::Billing => "/billing",
            Route::Reports => "/reports",
            Route::Settings => "/settings",
        }
    }

    /// Header title for the page.
    pub fn title(&self) -> &'static str {
        match self {
            Route::Dashboard => "Dashboard",
            Route::Inventory => "Inventory Management",
            Route::Billing => "Billing & Sales",
            Route::Reports => "Reports & Analytics",
            Route::Settings => "Settings",
        }
    }

    /// Sidebar label for the page.
    pub fn label(&self) -> &'static str {
        match self {
            Route::Dashboard => "Dashboard",
            Route::Inventory => "Inventory",
            Route::Billing => "Billing",
            Route::Reports => "Reports",
            Route::Settings => "Settings",
        }
    }

    /// Maps a URL path to a route. Unknown paths have no route (404).
    pub fn from_path(path: &str) -> Option<Route> {
        Route::ALL.into_iter().find(|r| r.path() == path)
    }
}

/// Whether `role` may open `route`.
pub fn can_access(role: Role, route: Route) -> bool {
    match route {
        Route::Reports | Route::Settings => role == Role::Admin,
        Route::Dashboard | Route::Inventory | Route::Billing => true,
    }
}

/// A sidebar entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct NavLink {
    pub route: Route,
    pub label: String,
    pub path: String,
}

/// Sidebar entries visible to `role`, in order.
pub fn nav_links(role: Role) -> Vec<NavLink> {
    Route::ALL
        .into_iter()
        .filter(|route| can_access(role, *route))
        .map(|route| NavLink {
            route,
            label: route.label().to_string(),
            path: route.path().to_string(),
        })
        .collect()
}

// =============================================================================
// Simulated Login
// =============================================================================

/// The logged-in user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct User {
    pub username: String,
    pub role: Role,
}

/// Logs in without checking credentials against anything.
///
/// ## Rules
/// - Username and password must both be non-blank
/// - Any values are accepted; the role comes from the form
pub fn login(username: &str, password: &str, role: Role) -> CoreResult<User> {
    let username = username.trim();
    if username.is_empty() {
        return Err(ValidationError::Required {
            field: "username".to_string(),
        }
        .into());
    }
    if password.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "password".to_string(),
        }
        .into());
    }

    Ok(User {
        username: username.to_string(),
        role,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_can_access_matrix() {
        for route in Route::ALL {
            assert!(can_access(Role::Admin, route));
        }
        assert!(can_access(Role::Employee, Route::Dashboard));
        assert!(can_access(Role::Employee, Route::Inventory));
        assert!(can_access(Role::Employee, Route::Billing));
        assert!(!can_access(Role::Employee, Route::Reports));
        assert!(!can_access(Role::Employee, Route::Settings));
    }

    #[test]
    fn test_nav_links_by_role() {
        let employee: Vec<&str> = nav_links(Role::Employee)
            .iter()
            .map(|l| l.route.path())
            .collect();
        assert_eq!(employee, vec!["/", "/inventory", "/billing"]);
        assert_eq!(nav_links(Role::Admin).len(), 5);
    }

    #[test]
    fn test_route_from_path() {
        assert_eq!(Route::from_path("/billing"), Some(Route::Billing));
        assert_eq!(Route::from_path("/"), Some(Route::Dashboard));
        assert_eq!(Route::from_path("/nope"), None);
        assert_eq!(Route::Reports.title(), "Reports & Analytics");
    }

    #[test]
    fn test_login() {
        let user = login(" pharmacist ", "secret", Role::Employee).unwrap();
        assert_eq!(user.username, "pharmacist");
        assert_eq!(user.role, Role::Employee);

        assert!(login("", "secret", Role::Admin).is_err());
        assert!(login("admin", "   ", Role::Admin).is_err());
    }

    #[test]
    fn test_role_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"admin\"");
        assert_eq!(Role::Employee.label(), "Employee");
    }
}

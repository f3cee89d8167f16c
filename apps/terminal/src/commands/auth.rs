//! # Auth Commands
//!
//! Simulated login/logout and the role checks every other command goes
//! through.
//!
//! ## Who May Call What
//! ```text
//! ┌──────────────────────────────┬──────────┬──────────┬─────────┐
//! │ Command                      │ Nobody   │ Employee │ Admin   │
//! ├──────────────────────────────┼──────────┼──────────┼─────────┤
//! │ login, whoami, get_config    │    ✓     │    ✓     │    ✓    │
//! │ products, cart, customers... │    ✗     │    ✓     │    ✓    │
//! │ sales_report                 │    ✗     │    ✗     │    ✓    │
//! │ get_settings, toggle_setting │    ✗     │    ✗     │    ✓    │
//! └──────────────────────────────┴──────────┴──────────┴─────────┘
//! ```

use medipos_core::access::{self, can_access, nav_links, NavLink, Role, Route, User};
use serde::Serialize;
use tracing::{debug, info};

use crate::error::ApiError;
use crate::state::{BillingState, SessionState};

/// What a command needs from the session before it may run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// Runs without a login.
    Public,
    /// Any logged-in user.
    SignedIn,
    /// A logged-in user whose role may open the page.
    Page(Route),
}

/// Checks `access` against the current session.
///
/// ## Errors
/// - `UNAUTHORIZED` if nobody is logged in
/// - `FORBIDDEN` if the role may not open the page
pub fn authorize(session: &SessionState, access: Access) -> Result<Option<User>, ApiError> {
    if access == Access::Public {
        return Ok(session.current());
    }

    let user = session.current().ok_or_else(ApiError::unauthorized)?;
    if let Access::Page(route) = access {
        if !can_access(user.role, route) {
            return Err(ApiError::forbidden(route.title()));
        }
    }
    Ok(Some(user))
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub user: User,
    pub nav_links: Vec<NavLink>,
}

/// Logs in with the role chosen on the form.
///
/// Any non-blank username and password are accepted. Signing in as a
/// different user or role discards the open billing session, as logout
/// would; signing in again as the same user keeps it.
pub fn login(
    session: &SessionState,
    billing: &BillingState,
    username: String,
    password: String,
    role: Role,
) -> Result<LoginResponse, ApiError> {
    debug!(username = %username, ?role, "login command");

    let user = access::login(&username, &password, role)?;
    info!(username = %user.username, role = ?user.role, "user logged in");
    if session.current().is_some_and(|previous| previous != user) {
        billing.with_session_mut(|s| s.clear());
        info!("previous user's billing session discarded");
    }
    session.sign_in(user.clone());

    Ok(LoginResponse {
        nav_links: nav_links(user.role),
        user,
    })
}

/// Logs out. The open billing session is discarded with it.
pub fn logout(session: &SessionState, billing: &BillingState) -> Option<User> {
    debug!("logout command");

    let user = session.sign_out();
    billing.with_session_mut(|s| s.clear());
    if let Some(user) = &user {
        info!(username = %user.username, "user logged out");
    }
    user
}

pub fn whoami(session: &SessionState) -> Option<User> {
    debug!("whoami command");
    session.current()
}

/// Sidebar entries for the logged-in user.
pub fn get_nav_links(user: &User) -> Vec<NavLink> {
    debug!("nav_links command");
    nav_links(user.role)
}

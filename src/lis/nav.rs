//! Sidebar navigation.
//!
//! Menu items depend on the signed-in user's role, which is passed in
//! explicitly. The active item is the one whose path equals the current
//! path exactly.

use std::fmt;

use tracing::debug;

pub use super::records::UserRole as Role;

/// Pages of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    /// Sign-in form.
    Login,
    /// Landing page after sign-in.
    Dashboard,
    /// Sample management.
    Samples,
    /// Test orders.
    Orders,
    /// Results entry or validation.
    Results,
    /// Reports.
    Reporting,
    /// Test catalog.
    Catalog,
    /// User management.
    Users,
    /// Instrument status.
    Instruments,
    /// Audit trail.
    AuditTrail,
}

impl Route {
    const ALL: [Route; 10] = [
        Route::Login,
        Route::Dashboard,
        Route::Samples,
        Route::Orders,
        Route::Results,
        Route::Reporting,
        Route::Catalog,
        Route::Users,
        Route::Instruments,
        Route::AuditTrail,
    ];

    /// URL path of the page.
    pub fn path(self) -> &'static str {
        match self {
            Route::Login => "/login",
            Route::Dashboard => "/dashboard",
            Route::Samples => "/samples",
            Route::Orders => "/orders",
            Route::Results => "/results",
            Route::Reporting => "/reporting",
            Route::Catalog => "/catalog",
            Route::Users => "/users",
            Route::Instruments => "/instruments",
            Route::AuditTrail => "/audit-trail",
        }
    }

    /// Looks a route up by path.
    pub fn from_path(path: &str) -> Option<Route> {
        Self::ALL.into_iter().find(|r| r.path() == path)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// One sidebar entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    /// Target page.
    pub route: Route,
    /// Menu label.
    pub label: &'static str,
}

const fn item(route: Route, label: &'static str) -> NavItem {
    NavItem { route, label }
}

static LAB_TECHNICIAN: &[NavItem] = &[
    item(Route::Dashboard, "Dashboard"),
    item(Route::Samples, "Sample Management"),
    item(Route::Orders, "Test Orders"),
    item(Route::Results, "Results Entry"),
    item(Route::Reporting, "Reporting"),
];

static SUPERVISOR: &[NavItem] = &[
    item(Route::Dashboard, "Dashboard"),
    item(Route::Samples, "Sample Management"),
    item(Route::Orders, "Test Orders"),
    item(Route::Results, "Results & Validation"),
    item(Route::Instruments, "Instrument Status"),
    item(Route::Reporting, "Reporting"),
];

static SYSTEM_ADMINISTRATOR: &[NavItem] = &[
    item(Route::Dashboard, "Dashboard"),
    item(Route::Samples, "Sample Management"),
    item(Route::Orders, "Test Orders"),
    item(Route::Results, "Results & Validation"),
    item(Route::Reporting, "Reporting"),
    item(Route::Catalog, "Test Catalog"),
    item(Route::Users, "User Management"),
    item(Route::Instruments, "Instrument Status"),
    item(Route::AuditTrail, "Audit Trail"),
];

/// Sidebar state for one signed-in user.
///
/// # Examples
///
/// ```
/// use labgrid::lis::nav::{Navigation, Role, Route};
///
/// let mut nav = Navigation::new(Role::Supervisor, "/samples");
/// assert_eq!(nav.active().map(|i| i.label), Some("Sample Management"));
/// assert!(!nav.can_visit(Route::Users));
///
/// assert_eq!(nav.logout(), Route::Login);
/// assert_eq!(nav.current_path(), "/login");
/// ```
#[derive(Debug, Clone)]
pub struct Navigation {
    role: Role,
    current: String,
}

impl Navigation {
    /// Navigation for `role`, currently showing `current_path`.
    pub fn new(role: Role, current_path: impl Into<String>) -> Self {
        Self {
            role,
            current: current_path.into(),
        }
    }

    /// Role the menu is built for.
    pub fn role(&self) -> Role {
        self.role
    }

    /// Menu items, in display order.
    pub fn items(&self) -> &'static [NavItem] {
        match self.role {
            Role::LabTechnician => LAB_TECHNICIAN,
            Role::Supervisor => SUPERVISOR,
            Role::SystemAdministrator => SYSTEM_ADMINISTRATOR,
        }
    }

    /// Path being shown.
    pub fn current_path(&self) -> &str {
        &self.current
    }

    /// Returns true when `item` points at the current path.
    pub fn is_active(&self, item: &NavItem) -> bool {
        item.route.path() == self.current
    }

    /// The highlighted item, if the current page is in the menu.
    pub fn active(&self) -> Option<&'static NavItem> {
        self.items().iter().find(|i| self.is_active(i))
    }

    /// Returns true when the role's menu links to `route`.
    pub fn can_visit(&self, route: Route) -> bool {
        self.items().iter().any(|i| i.route == route)
    }

    /// Moves to `route`. Any route is accepted; the menu only decides what is
    /// offered.
    pub fn navigate(&mut self, route: Route) {
        debug!(from = %self.current, to = %route, "navigate");
        self.current = route.path().to_string();
    }

    /// Signs out and moves to the login page.
    pub fn logout(&mut self) -> Route {
        self.navigate(Route::Login);
        Route::Login
    }
}

use std::collections::HashSet;

use super::AdminEntity;

/// An admin whose answers are fixed when it is built.
///
/// Useful for admins backed by static configuration, and for wiring a pool
/// by hand in tests.
#[derive(Debug, Clone, Default)]
pub struct StaticAdmin {
    routes: HashSet<String>,
    granted: HashSet<String>,
    hidden: bool,
}

impl StaticAdmin {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_route(mut self, name: impl Into<String>) -> Self {
        self.routes.insert(name.into());
        self
    }

    pub fn grant(mut self, action: impl Into<String>) -> Self {
        self.granted.insert(action.into());
        self
    }

    /// Keep the admin off the dashboard.
    pub fn hidden(mut self) -> Self {
        self.hidden = true;
        self
    }
}

impl AdminEntity for StaticAdmin {
    fn show_in_dashboard(&self) -> bool {
        !self.hidden
    }

    fn has_route(&self, name: &str) -> bool {
        self.routes.contains(name)
    }

    fn has_access(&self, action: &str) -> bool {
        self.granted.contains(action)
    }
}

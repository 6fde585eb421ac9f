//! Dashboard group registry and filtering for an admin backend.

// --- Modules ---
pub mod admin;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod logging;

pub mod prelude {
    // Config
    pub use crate::config::{DashboardConfig, Settings, UnresolvedAdminPolicy};

    // Admins and dashboard
    pub use crate::admin::{AdminEntity, StaticAdmin};
    pub use crate::dashboard::{GroupDescriptor, GroupRuntime, ItemDescriptor, Pool};
    pub use crate::error::PoolError;

    // Common Libs
    pub use log::{debug, error, info, trace, warn};
    pub use std::sync::Arc;
}

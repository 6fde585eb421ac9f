// Dashboard module
//
// This module contains the dashboard grouping functionality:
// - Group and item descriptors built from configuration
// - The pool resolving admins by code
// - The group runtime narrowing groups for the current actor

pub mod group;
pub mod pool;
pub mod runtime;

// Re-export commonly used types
pub use group::{GroupDescriptor, ItemDescriptor};
pub use pool::Pool;
pub use runtime::{GroupRuntime, CREATE_ACTION};

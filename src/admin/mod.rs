// Copyright (c) 2025 TexasFortress.AI
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

// Admin entities: the objects that manage one resource type and answer the
// dashboard's visibility, route and access questions.

pub mod static_admin;

pub use static_admin::StaticAdmin;

#[cfg(test)]
use mockall::automock;

/// Capability interface of an admin entity as seen by the dashboard.
///
/// Admins are registered in the [`Pool`](crate::dashboard::Pool) under a
/// string code and resolved by that code whenever a group item refers to
/// them. Answers may depend on the current actor, so callers must not cache
/// them across requests.
#[cfg_attr(test, automock)]
pub trait AdminEntity: Send + Sync {
    /// Whether the admin wants a tile on the dashboard at all.
    fn show_in_dashboard(&self) -> bool;

    /// Whether the admin exposes the named route (`"list"`, `"create"`, ...).
    fn has_route(&self, name: &str) -> bool;

    /// Whether the current actor may perform `action` through this admin.
    fn has_access(&self, action: &str) -> bool;
}

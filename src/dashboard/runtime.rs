// Copyright (c) 2025 TexasFortress.AI
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::sync::Arc;
use log::{debug, warn};

use crate::config::{DashboardConfig, UnresolvedAdminPolicy};
use crate::dashboard::group::{GroupDescriptor, ItemDescriptor};
use crate::dashboard::pool::Pool;

/// Default route and access action that make an admin creatable.
pub const CREATE_ACTION: &str = "create";

/// Per-request view over the pool used by dashboard templates.
pub struct GroupRuntime {
    pool: Arc<Pool>,
    create_action: String,
    unresolved_admin: UnresolvedAdminPolicy,
}

impl GroupRuntime {
    pub fn new(pool: Arc<Pool>) -> Self {
        Self {
            pool,
            create_action: CREATE_ACTION.to_string(),
            unresolved_admin: UnresolvedAdminPolicy::default(),
        }
    }

    pub fn with_config(pool: Arc<Pool>, config: &DashboardConfig) -> Self {
        Self {
            pool,
            create_action: config.create_action.clone(),
            unresolved_admin: config.unresolved_admin,
        }
    }

    /// Dashboard groups narrowed to the items whose admin exposes the create
    /// route and grants create access to the current actor.
    ///
    /// Group order and item order follow the pool. Groups with no creatable
    /// item are left out; surviving groups keep every attribute but `items`.
    /// Items referring to an unregistered admin are excluded, never an error.
    pub fn creatable_groups(&self) -> Vec<GroupDescriptor> {
        self.pool
            .groups()
            .iter()
            .filter_map(|group| group.retain_items(|item| self.is_creatable(group, item)))
            .collect()
    }

    fn is_creatable(&self, group: &GroupDescriptor, item: &ItemDescriptor) -> bool {
        let Some(admin) = self.pool.admin(&item.admin) else {
            match self.unresolved_admin {
                UnresolvedAdminPolicy::Skip => debug!(
                    "Skipping item '{}' in group '{}': admin '{}' is not registered",
                    item.key, group.key, item.admin
                ),
                UnresolvedAdminPolicy::Warn => warn!(
                    "Skipping item '{}' in group '{}': admin '{}' is not registered",
                    item.key, group.key, item.admin
                ),
            }
            return false;
        };

        admin.has_route(&self.create_action) && admin.has_access(&self.create_action)
    }
}

// Copyright (c) 2025 TexasFortress.AI
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::sync::Arc;
use log::{debug, warn};

use crate::admin::AdminEntity;
use crate::dashboard::group::GroupDescriptor;
use crate::error::PoolError;

/// Registry of admin entities and dashboard groups.
///
/// Groups keep their registration order; admins are looked up by code.
/// Once built, the pool is shared read-only (typically behind an `Arc`).
#[derive(Default)]
pub struct Pool {
    admins: HashMap<String, Arc<dyn AdminEntity>>,
    groups: Vec<GroupDescriptor>,
}

impl Pool {
    pub fn new() -> Self {
        Self::default()
    }

    // Register an admin under `code`, replacing any previous one
    pub fn register_admin(&mut self, code: impl Into<String>, admin: Arc<dyn AdminEntity>) {
        let code = code.into();
        if self.admins.insert(code.clone(), admin).is_some() {
            warn!("Admin '{}' registered twice, keeping the latest", code);
        } else {
            debug!("Registered admin: {}", code);
        }
    }

    // Append a group; keys must be unique across the pool and within the group
    pub fn add_group(&mut self, group: GroupDescriptor) -> Result<(), PoolError> {
        if self.groups.iter().any(|g| g.key == group.key) {
            return Err(PoolError::DuplicateGroup(group.key));
        }

        let mut seen = HashSet::new();
        for item in &group.items {
            if !seen.insert(item.key.as_str()) {
                return Err(PoolError::DuplicateItem {
                    group: group.key.clone(),
                    item: item.key.clone(),
                });
            }
        }

        debug!("Added dashboard group '{}' with {} items", group.key, group.items.len());
        self.groups.push(group);
        Ok(())
    }

    pub fn groups(&self) -> &[GroupDescriptor] {
        &self.groups
    }

    pub fn group(&self, key: &str) -> Result<&GroupDescriptor, PoolError> {
        self.groups
            .iter()
            .find(|g| g.key == key)
            .ok_or_else(|| PoolError::GroupNotFound(key.to_string()))
    }

    /// Registered admin codes, sorted.
    pub fn admin_codes(&self) -> Vec<&str> {
        let mut codes: Vec<&str> = self.admins.keys().map(String::as_str).collect();
        codes.sort_unstable();
        codes
    }

    pub fn has_admin(&self, code: &str) -> bool {
        self.admins.contains_key(code)
    }

    pub fn admin(&self, code: &str) -> Option<Arc<dyn AdminEntity>> {
        self.admins.get(code).cloned()
    }

    pub fn admin_by_code(&self, code: &str) -> Result<Arc<dyn AdminEntity>, PoolError> {
        self.admin(code)
            .ok_or_else(|| PoolError::AdminNotFound(code.to_string()))
    }

    /// Admins referenced by the group's items, in item order. Items whose
    /// admin is not registered are left out.
    pub fn admins_by_group(&self, key: &str) -> Result<Vec<Arc<dyn AdminEntity>>, PoolError> {
        let group = self.group(key)?;
        Ok(group
            .items
            .iter()
            .filter_map(|item| self.admin(&item.admin))
            .collect())
    }

    /// Groups pruned to the items whose admin wants to be shown on the
    /// dashboard. Groups left without items are dropped.
    pub fn dashboard_groups(&self) -> Vec<GroupDescriptor> {
        self.groups
            .iter()
            .filter_map(|group| {
                group.retain_items(|item| {
                    self.admins
                        .get(&item.admin)
                        .map_or(false, |admin| admin.show_in_dashboard())
                })
            })
            .collect()
    }
}

impl fmt::Debug for Pool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pool")
            .field("admins", &self.admin_codes())
            .field("groups", &self.groups)
            .finish()
    }
}

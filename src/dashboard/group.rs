use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One dashboard entry pointing at a single admin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemDescriptor {
    /// Unique within the owning group.
    pub key: String,
    /// Code the admin is registered under in the pool.
    pub admin: String,
    pub label: String,
    #[serde(default)]
    pub roles: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub route: Option<String>,
    #[serde(default)]
    pub route_params: BTreeMap<String, String>,
    #[serde(default)]
    pub route_absolute: bool,
}

impl ItemDescriptor {
    pub fn new(key: impl Into<String>, admin: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            admin: admin.into(),
            label: label.into(),
            roles: Vec::new(),
            route: None,
            route_params: BTreeMap::new(),
            route_absolute: false,
        }
    }

    pub fn with_route(mut self, route: impl Into<String>) -> Self {
        self.route = Some(route.into());
        self
    }
}

/// A named, ordered collection of dashboard items sharing display metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupDescriptor {
    /// Unique within the pool.
    pub key: String,
    pub label: String,
    pub label_catalogue: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default)]
    pub items: Vec<ItemDescriptor>,
    #[serde(default)]
    pub item_adds: Vec<ItemDescriptor>,
    #[serde(default)]
    pub keep_open: bool,
    #[serde(default)]
    pub on_top: bool,
    #[serde(default)]
    pub roles: Vec<String>,
}

impl GroupDescriptor {
    pub fn new(key: impl Into<String>, label: impl Into<String>, label_catalogue: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            label_catalogue: label_catalogue.into(),
            icon: None,
            items: Vec::new(),
            item_adds: Vec::new(),
            keep_open: false,
            on_top: false,
            roles: Vec::new(),
        }
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn with_item(mut self, item: ItemDescriptor) -> Self {
        self.items.push(item);
        self
    }

    /// Copy of this group holding only the items accepted by `keep`, or
    /// `None` when nothing is left. Item order and every other attribute
    /// are preserved.
    pub(crate) fn retain_items<F>(&self, mut keep: F) -> Option<GroupDescriptor>
    where
        F: FnMut(&ItemDescriptor) -> bool,
    {
        let items: Vec<ItemDescriptor> = self.items.iter().filter(|&item| keep(item)).cloned().collect();
        if items.is_empty() {
            return None;
        }

        Some(GroupDescriptor {
            items,
            ..self.clone()
        })
    }
}

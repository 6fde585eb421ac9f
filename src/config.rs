// Copyright (c) 2025 TexasFortress.AI
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use config::{Environment, File};
use serde::{Deserialize, Serialize};
use std::env;
use log::warn;

/// What the group runtime does when an item points at an admin code that is
/// not registered in the pool. The item is excluded either way; the policy
/// only decides how loudly that is reported.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum UnresolvedAdminPolicy {
    #[default]
    Skip,
    Warn,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    pub level: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardConfig {
    pub unresolved_admin: UnresolvedAdminPolicy,
    /// Route and access action an admin must expose to count as creatable.
    pub create_action: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub log: LogConfig,
    pub dashboard: DashboardConfig,
}

impl Settings {
    pub fn new(config_path: Option<&str>) -> Result<Self, config::ConfigError> {
        let mut config_builder = config::Config::builder()
            .set_default("log.level", "info")?
            .set_default("dashboard.unresolved_admin", "skip")?
            .set_default("dashboard.create_action", "create")?;

        if let Some(path) = config_path {
            config_builder = config_builder.add_source(File::with_name(path));
        }

        // e.g. `SONATA_GROUPS_DASHBOARD__CREATE_ACTION=...` overrides `dashboard.create_action`
        config_builder = config_builder.add_source(
            Environment::with_prefix("SONATA_GROUPS")
                .prefix_separator("_")
                .separator("__")
                .ignore_empty(true),
        );

        let env_vars = [
            ("LOG_LEVEL", "log.level"),
            ("DASHBOARD_UNRESOLVED_ADMIN", "dashboard.unresolved_admin"),
        ];

        for (env_var, config_path) in &env_vars {
            if let Ok(value) = env::var(env_var) {
                if *env_var == "DASHBOARD_UNRESOLVED_ADMIN" {
                    let normalized = value.to_ascii_lowercase();
                    if normalized == "skip" || normalized == "warn" {
                        config_builder = config_builder.set_override(*config_path, normalized)?;
                    } else {
                        warn!("Invalid unresolved admin policy in {}: {}", env_var, value);
                    }
                } else {
                    config_builder = config_builder.set_override(*config_path, value)?;
                }
            }
        }

        config_builder.build()?.try_deserialize()
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        LogConfig { level: "info".to_string() }
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            unresolved_admin: UnresolvedAdminPolicy::Skip,
            create_action: "create".to_string(),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log: LogConfig::default(),
            dashboard: DashboardConfig::default(),
        }
    }
}

// Copyright (c) 2025 TexasFortress.AI
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use thiserror::Error;

/// Errors raised by the fallible pool lookups and registrations.
///
/// Filtering never produces one of these: an admin that cannot be resolved
/// simply drops out of the result.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PoolError {
    #[error("Group not found: {0}")]
    GroupNotFound(String),

    #[error("Admin not found: {0}")]
    AdminNotFound(String),

    #[error("Group already registered: {0}")]
    DuplicateGroup(String),

    #[error("Duplicate item '{item}' in group '{group}'")]
    DuplicateItem { group: String, item: String },
}

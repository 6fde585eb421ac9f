// Copyright (c) 2025 TexasFortress.AI
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use mockall::mock;
use sonata_groups::admin::AdminEntity;
use sonata_groups::dashboard::{GroupDescriptor, ItemDescriptor};

mock! {
    pub Admin {}

    impl AdminEntity for Admin {
        fn show_in_dashboard(&self) -> bool;
        fn has_route(&self, name: &str) -> bool;
        fn has_access(&self, action: &str) -> bool;
    }
}

/// Group with one item per admin code, keyed `item0`, `item1`, ...
pub fn group_of(key: &str, admins: &[&str]) -> GroupDescriptor {
    let mut group = GroupDescriptor::new(key, key, "default");
    for (i, admin) in admins.iter().enumerate() {
        group = group.with_item(ItemDescriptor::new(format!("item{}", i), *admin, *admin));
    }
    group
}

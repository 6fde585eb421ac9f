#[cfg(test)]
mod tests {
    use crate::common::{group_of, MockAdmin};
    use sonata_groups::admin::StaticAdmin;
    use sonata_groups::dashboard::Pool;
    use sonata_groups::error::PoolError;
    use std::sync::Arc;

    #[test]
    fn test_pool_keeps_group_registration_order() {
        let mut pool = Pool::new();
        pool.add_group(group_of("zeta", &[])).unwrap();
        pool.add_group(group_of("alpha", &[])).unwrap();
        pool.add_group(group_of("mid", &[])).unwrap();

        let keys: Vec<&str> = pool.groups().iter().map(|g| g.key.as_str()).collect();
        assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_reregistering_admin_replaces_it() {
        let mut pool = Pool::new();
        pool.register_admin("admin.post", Arc::new(StaticAdmin::new()));
        pool.register_admin("admin.post", Arc::new(StaticAdmin::new().with_route("create")));

        assert_eq!(pool.admin_codes(), vec!["admin.post"]);
        assert!(pool.admin_by_code("admin.post").unwrap().has_route("create"));
    }

    #[test]
    fn test_errors_name_the_missing_key() {
        let pool = Pool::new();

        let err = pool.group("content").unwrap_err();
        assert_eq!(err.to_string(), "Group not found: content");

        let err = pool.admin_by_code("admin.post").err().unwrap();
        assert_eq!(err, PoolError::AdminNotFound("admin.post".to_string()));
        assert_eq!(err.to_string(), "Admin not found: admin.post");
    }

    #[test]
    fn test_dashboard_groups_with_mocked_admins() {
        let mut shown = MockAdmin::new();
        shown.expect_show_in_dashboard().times(2).return_const(true);
        let mut hidden = MockAdmin::new();
        hidden.expect_show_in_dashboard().return_const(false);

        let mut pool = Pool::new();
        pool.register_admin("admin.shown", Arc::new(shown));
        pool.register_admin("admin.hidden", Arc::new(hidden));
        pool.add_group(group_of("first", &["admin.shown", "admin.hidden"])).unwrap();
        pool.add_group(group_of("second", &["admin.hidden"])).unwrap();
        pool.add_group(group_of("third", &["admin.shown"])).unwrap();

        let groups = pool.dashboard_groups();
        let keys: Vec<&str> = groups.iter().map(|g| g.key.as_str()).collect();
        assert_eq!(keys, vec!["first", "third"]);
        assert_eq!(groups[0].items.len(), 1);
    }

    #[test]
    fn test_admins_by_group_in_item_order() {
        let mut pool = Pool::new();
        pool.register_admin("admin.a", Arc::new(StaticAdmin::new().with_route("a")));
        pool.register_admin("admin.b", Arc::new(StaticAdmin::new().with_route("b")));
        pool.add_group(group_of("content", &["admin.b", "admin.missing", "admin.a"])).unwrap();

        let admins = pool.admins_by_group("content").unwrap();
        assert_eq!(admins.len(), 2);
        assert!(admins[0].has_route("b"));
        assert!(admins[1].has_route("a"));

        assert_eq!(
            pool.admins_by_group("missing").err(),
            Some(PoolError::GroupNotFound("missing".to_string()))
        );
    }
}

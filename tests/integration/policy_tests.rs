//! Access policy integration tests
//!
//! Drive the policy with users shaped like the backend sends them.

#[cfg(test)]
mod tests {
    use crate::common::{DecisionAssertions, UserFactory};
    use tracker_access::{AccessPolicy, Feature, NavItem, Navigation, Role, RoleColor, RoleTag};

    // ==================== End-to-End Scenarios ====================

    /// Team lead of team 5 sees assignment controls but not the global ticket list
    #[test]
    fn test_team_lead_ticket_screen() {
        let policy = AccessPolicy::default();
        let lead = UserFactory::team_lead(1, 5);

        assert!(!policy.can_access(Some(&lead), "view_all_tickets"));
        assert!(policy.can_access(Some(&lead), "assign_tickets"));
        policy
            .evaluate(Some(&lead), "view_all_tickets")
            .assert_denied_with("TEAM_LEAD");
        policy.evaluate(Some(&lead), "assign_tickets").assert_granted();
    }

    #[test]
    fn test_user_management_screen_for_org_admin() {
        let policy = AccessPolicy::default();
        let admin = UserFactory::org_admin(3);
        let lead = UserFactory::team_lead(3, 1);
        let member = UserFactory::member(3, 1);
        let stranger = UserFactory::member(4, 1);

        assert!(policy.can_access(Some(&admin), "create_users"));
        assert_eq!(
            policy.creatable_roles(Some(&admin)),
            vec![Role::OrgAdmin, Role::TeamLead, Role::User]
        );
        assert!(policy.can_reset_password(Some(&admin), Some(&lead)));
        assert!(policy.can_reset_password(Some(&admin), Some(&member)));
        assert!(!policy.can_reset_password(Some(&admin), Some(&stranger)));
    }

    #[test]
    fn test_team_lead_creates_only_users() {
        let policy = AccessPolicy::default();
        let lead = UserFactory::team_lead(1, 5);

        assert!(policy.can_access(Some(&lead), "create_team_users"));
        assert!(!policy.can_access(Some(&lead), "create_users"));
        for role in Role::ALL {
            assert_eq!(
                policy.can_create_role(Some(&lead), &role.into()),
                role == Role::User
            );
        }
    }

    // ==================== Untyped Boundary ====================

    #[test]
    fn test_unknown_role_from_backend_fails_closed() {
        let policy = AccessPolicy::default();
        let stranger = UserFactory::with_unknown_role("OWNER");
        let member = UserFactory::member(1, 1);

        assert_eq!(stranger.role, RoleTag::Unrecognized("OWNER".to_string()));
        for feature in Feature::ALL {
            assert!(!policy.can_access(Some(&stranger), feature.as_str()));
        }
        assert!(policy.creatable_roles(Some(&stranger)).is_empty());
        assert!(!policy.can_reset_password(Some(&stranger), Some(&member)));
        assert!(!policy.has_permission(&stranger.role, &Role::User.into()));
        assert!(Navigation::new(&policy).visible_items(Some(&stranger)).is_empty());

        // Display still works and echoes the raw value
        assert_eq!(policy.role_display_name(&stranger.role), "OWNER");
        assert_eq!(policy.role_color(&stranger.role), RoleColor::Default);
    }

    #[test]
    fn test_null_user_denied_everywhere() {
        let policy = AccessPolicy::default();

        for tag in Feature::ALL.iter().map(|f| f.as_str()).chain(["", "anything"]) {
            assert!(!policy.can_access(None, tag));
        }
        for role in Role::ALL {
            assert!(!policy.can_create_role(None, &role.into()));
        }
        assert!(policy.features_for(None).is_empty());
    }

    // ==================== Navigation ====================

    #[test]
    fn test_navigation_matches_feature_gates() {
        let policy = AccessPolicy::default();
        let nav = Navigation::new(&policy);

        for user in [
            UserFactory::super_admin(),
            UserFactory::org_admin(1),
            UserFactory::team_lead(1, 1),
            UserFactory::member(1, 1),
        ] {
            for item in NavItem::ALL {
                let expected = match item.gate() {
                    Some(feature) => policy.can_access_feature(Some(&user), feature),
                    None => true,
                };
                assert_eq!(nav.is_visible(Some(&user), item), expected);
                assert_eq!(nav.can_visit(Some(&user), item.route()), expected);
            }
        }
    }

    #[test]
    fn test_policy_is_shareable_across_threads() {
        let policy = std::sync::Arc::new(AccessPolicy::default());
        let handles: Vec<_> = Role::ALL
            .into_iter()
            .map(|role| {
                let policy = std::sync::Arc::clone(&policy);
                std::thread::spawn(move || {
                    let user = tracker_access::User::new(1, "t", role);
                    policy.features_for(Some(&user)).len()
                })
            })
            .collect();

        let counts: Vec<usize> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert_eq!(counts, vec![13, 12, 4, 0]);
    }
}

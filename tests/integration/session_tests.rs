//! Session context integration tests

#[cfg(test)]
mod tests {
    use crate::common::UserFactory;
    use std::sync::Arc;
    use tracker_access::{AccessPolicy, Role, SessionContext, User};

    #[test]
    fn test_demo_role_switcher() {
        let session = Arc::new(SessionContext::new(AccessPolicy::default()));
        let base = UserFactory::member(1, 5);

        session.sign_in(base.clone());
        assert!(!session.can_access("create_projects"));

        for (role, can_create_projects) in [
            (Role::TeamLead, true),
            (Role::OrgAdmin, true),
            (Role::User, false),
        ] {
            let switched = User {
                role: role.into(),
                ..base.clone()
            };
            session.replace(switched);
            assert_eq!(session.can_access("create_projects"), can_create_projects);
        }

        session.sign_out();
        assert!(!session.can_access("create_projects"));
    }

    #[test]
    fn test_reset_password_buttons() {
        let session = SessionContext::default();
        let lead = UserFactory::team_lead(2, 7);
        let teammate = UserFactory::member(2, 7);
        let other_team = UserFactory::member(2, 8);

        session.sign_in(lead.clone());
        assert!(session.can_reset_password(&teammate));
        assert!(!session.can_reset_password(&other_team));
        assert!(!session.can_reset_password(&lead));
    }

    #[test]
    fn test_snapshots_outlive_sign_out() {
        let session = SessionContext::default();
        session.sign_in(UserFactory::super_admin());
        let snapshot = session.current().unwrap();

        session.sign_out();
        assert!(session.current().is_none());
        assert!(
            session
                .policy()
                .can_access(Some(&snapshot), "manage_organizations")
        );
    }
}

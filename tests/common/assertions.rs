//! Custom test assertions
//!
//! Provides domain-specific assertions for access decisions.

use tracker_access::AccessDecision;

/// Assertions for AccessDecision
pub trait DecisionAssertions {
    /// Assert the decision granted access
    fn assert_granted(&self);

    /// Assert the decision denied access with a reason mentioning `fragment`
    fn assert_denied_with(&self, fragment: &str);
}

impl DecisionAssertions for AccessDecision {
    fn assert_granted(&self) {
        assert!(
            self.granted,
            "Expected access to {} to be granted, denied with {:?}",
            self.feature, self.denial_reason
        );
        assert!(self.denial_reason.is_none());
    }

    fn assert_denied_with(&self, fragment: &str) {
        assert!(!self.granted, "Expected access to {} to be denied", self.feature);
        let reason = self.denial_reason.as_deref().unwrap_or_default();
        assert!(
            reason.contains(fragment),
            "Expected denial reason to contain {:?}, got {:?}",
            fragment,
            reason
        );
    }
}

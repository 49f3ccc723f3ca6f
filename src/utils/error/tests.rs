//! Tests for error handling

#[cfg(test)]
mod tests {
    use super::super::types::PolicyError;

    // ==================== Helper Function Tests ====================

    #[test]
    fn test_config_helper() {
        let error = PolicyError::config("missing file");
        assert!(matches!(error, PolicyError::Config(msg) if msg == "missing file"));
    }

    #[test]
    fn test_invalid_role_helper() {
        let error = PolicyError::invalid_role("BOGUS_ROLE");
        assert!(matches!(error, PolicyError::InvalidRole(msg) if msg == "BOGUS_ROLE"));
    }

    #[test]
    fn test_unknown_feature_helper() {
        let error = PolicyError::unknown_feature("launch_rockets");
        assert!(matches!(error, PolicyError::UnknownFeature(msg) if msg == "launch_rockets"));
    }

    // ==================== Display Tests ====================

    #[test]
    fn test_error_display() {
        assert_eq!(
            PolicyError::config("bad level").to_string(),
            "Configuration error: bad level"
        );
        assert_eq!(
            PolicyError::invalid_role("ROOT").to_string(),
            "Invalid role: ROOT"
        );
        assert_eq!(
            PolicyError::decode("not a number").to_string(),
            "Decode error: not a number"
        );
    }

    // ==================== Conversion Tests ====================

    #[test]
    fn test_from_io_error() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let error: PolicyError = io.into();
        assert!(matches!(error, PolicyError::Io(_)));
        assert!(!error.is_input_error());
    }

    #[test]
    fn test_from_yaml_error() {
        let yaml_err = serde_yaml::from_str::<u32>("not: [a number").unwrap_err();
        let error: PolicyError = yaml_err.into();
        assert!(matches!(error, PolicyError::Yaml(_)));
    }

    #[test]
    fn test_input_errors_are_classified() {
        assert!(PolicyError::validation("x").is_input_error());
        assert!(PolicyError::decode("x").is_input_error());
        assert!(!PolicyError::config("x").is_input_error());
    }
}

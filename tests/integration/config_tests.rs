//! Configuration and ID codec integration tests

#[cfg(test)]
mod tests {
    use std::io::Write;
    use tempfile::NamedTempFile;
    use tracker_access::config::{IdAlphabet, LogFormat, LogLevel};
    use tracker_access::{Config, IdCodec, PolicyError};

    #[tokio::test]
    async fn test_load_file_layer() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "id_codec:\n  alphabet: url_safe\nlogging:\n  format: json").unwrap();

        let config = Config::from_file(file.path()).await.unwrap();
        assert_eq!(config.id_codec().alphabet, IdAlphabet::UrlSafe);
        assert_eq!(config.logging().format, LogFormat::Json);
        assert_eq!(config.logging().level, LogLevel::Info);

        let codec = IdCodec::new(config.id_codec());
        assert_eq!(codec.encode(42), "NDI");
    }

    #[tokio::test]
    async fn test_malformed_file_is_config_error() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "logging: [unclosed").unwrap();

        let err = Config::from_file(file.path()).await.unwrap_err();
        assert!(matches!(err, PolicyError::Config(_)));
        assert!(err.to_string().starts_with("Configuration error"));
    }

    #[test]
    fn test_ticket_url_round_trip() {
        let codec = IdCodec::default();
        let route = format!("/tickets/{}", codec.encode(1234));

        let encoded = route.rsplit('/').next().unwrap();
        assert_eq!(codec.decode(encoded), Some(1234));
        assert_eq!(codec.decode("garbage"), None);
    }
}

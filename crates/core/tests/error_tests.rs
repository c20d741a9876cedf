// ═══════════════════════════════════════════════════════════════════
// Error Tests: CoreError variants, Display formatting, From impls
// ═══════════════════════════════════════════════════════════════════

use finance_tracker_core::errors::CoreError;

// ── Display formatting ──────────────────────────────────────────────

mod display {
    use super::*;

    #[test]
    fn validation_error() {
        let err = CoreError::ValidationError("amount must be positive".into());
        assert_eq!(err.to_string(), "Validation failed: amount must be positive");
    }

    #[test]
    fn invalid_settings() {
        let err = CoreError::InvalidSettings("history_months must be at least 1".into());
        assert_eq!(
            err.to_string(),
            "Invalid settings: history_months must be at least 1"
        );
    }

    #[test]
    fn serialization() {
        let err = CoreError::Serialization("bad float".into());
        assert_eq!(err.to_string(), "Serialization error: bad float");
    }

    #[test]
    fn deserialization() {
        let err = CoreError::Deserialization("missing field".into());
        assert_eq!(err.to_string(), "Deserialization error: missing field");
    }

    #[test]
    fn export() {
        let err = CoreError::Export("writer closed".into());
        assert_eq!(err.to_string(), "Export failed: writer closed");
    }

    #[test]
    fn file_io() {
        let err = CoreError::FileIO("permission denied".into());
        assert_eq!(err.to_string(), "File I/O error: permission denied");
    }
}

// ── From conversions ────────────────────────────────────────────────

mod conversions {
    use super::*;

    #[test]
    fn from_io_error() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let err: CoreError = io.into();
        assert!(matches!(err, CoreError::FileIO(msg) if msg.contains("no such file")));
    }

    #[test]
    fn from_serde_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: CoreError = json_err.into();
        assert!(matches!(err, CoreError::Deserialization(_)));
    }

    #[test]
    fn question_mark_propagates_json_error() {
        fn parse(input: &str) -> Result<serde_json::Value, CoreError> {
            Ok(serde_json::from_str(input)?)
        }
        assert!(parse("[1, 2").is_err());
        assert!(parse("[1, 2]").is_ok());
    }

    #[test]
    fn errors_are_debug() {
        let err = CoreError::ValidationError("x".into());
        assert!(format!("{err:?}").contains("ValidationError"));
    }
}

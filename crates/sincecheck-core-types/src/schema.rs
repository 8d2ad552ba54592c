//! Canonical schema constants for structured logging and events
//!
//! These constants keep field names identical across the core, store,
//! engine and CLI layers.

// Canonical field keys for structured logging
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";
pub const FIELD_RUN_ID: &str = "run_id";

// Analysis identifiers
pub const FIELD_MODULE: &str = "module";
pub const FIELD_VERSION: &str = "version";
pub const FIELD_VERIFY_VERSION: &str = "verify_version";
pub const FIELD_ELEMENT_PATH: &str = "element_path";
pub const FIELD_SNAPSHOT_DIGEST: &str = "snapshot_digest";

// Collection sizes
pub const FIELD_VERSIONS_LEN: &str = "versions_len";
pub const FIELD_ELEMENTS_LEN: &str = "elements_len";
pub const FIELD_DIAGNOSTICS_LEN: &str = "diagnostics_len";

// Error fields
pub const FIELD_ERR_KIND: &str = "err_kind";
pub const FIELD_ERR_CODE: &str = "err_code";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants_accessibility() {
        assert!(!FIELD_COMPONENT.is_empty());
        assert!(!FIELD_OP.is_empty());
        assert!(!FIELD_MODULE.is_empty());
        assert!(!EVENT_START.is_empty());
        assert!(!EVENT_END.is_empty());
        assert!(!EVENT_END_ERROR.is_empty());
    }

    #[test]
    fn test_event_names_are_distinct() {
        assert_ne!(EVENT_START, EVENT_END);
        assert_ne!(EVENT_START, EVENT_END_ERROR);
        assert_ne!(EVENT_END, EVENT_END_ERROR);
    }

    #[test]
    fn test_error_field_keys_match_macro_field_names() {
        // The logging macros emit `err_kind` / `err_code` as bare identifiers
        assert_eq!(FIELD_ERR_KIND, "err_kind");
        assert_eq!(FIELD_ERR_CODE, "err_code");
    }
}

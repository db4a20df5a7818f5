use std::error::Error;

use linkstack::types::errors::*;

// === StorageError Tests ===

#[test]
fn storage_error_display_variants() {
    assert_eq!(
        StorageError::DatabaseError("disk full".to_string()).to_string(),
        "Storage database error: disk full"
    );
    assert_eq!(StorageError::LockPoisoned.to_string(), "Storage lock poisoned");
}

// === BookmarkError Tests ===

#[test]
fn bookmark_error_display_variants() {
    assert_eq!(
        BookmarkError::NotFound("bm-1".to_string()).to_string(),
        "Bookmark not found: bm-1"
    );
    assert_eq!(
        BookmarkError::InvalidReference("expected an id, got index 2".to_string()).to_string(),
        "Invalid bookmark reference: expected an id, got index 2"
    );
    assert_eq!(
        BookmarkError::StorageError("Error adding item to storage: boom".to_string()).to_string(),
        "Bookmark storage error: Error adding item to storage: boom"
    );
}

#[test]
fn bookmark_error_implements_error_trait() {
    let err: Box<dyn Error> = Box::new(BookmarkError::NotFound("id".to_string()));
    assert!(err.source().is_none());
}

// === ExtractError Tests ===

#[test]
fn extract_error_display_variants() {
    assert_eq!(
        ExtractError::InvalidUrl("not a url".to_string()).to_string(),
        "Invalid URL: not a url"
    );
    assert_eq!(
        ExtractError::NetworkError("connection refused".to_string()).to_string(),
        "Network error: connection refused"
    );
    assert_eq!(
        ExtractError::BodyError("truncated".to_string()).to_string(),
        "Failed to read response body: truncated"
    );
}

// === SubmissionError Tests ===

#[test]
fn submission_error_display_variants() {
    assert_eq!(
        SubmissionError::MetadataUnavailable("timeout".to_string()).to_string(),
        "Bookmark metadata unavailable: timeout"
    );
    assert_eq!(
        SubmissionError::StorageError("locked".to_string()).to_string(),
        "Failed to store bookmark: locked"
    );
}

#[test]
fn submission_error_from_bookmark_error_keeps_message() {
    let err: SubmissionError = BookmarkError::StorageError("bad json".to_string()).into();
    assert_eq!(
        err.to_string(),
        "Failed to store bookmark: Bookmark storage error: bad json"
    );
}

// === WidgetError Tests ===

#[test]
fn widget_error_wraps_sources() {
    let err: WidgetError = BookmarkError::NotFound("b".to_string()).into();
    assert_eq!(err.to_string(), "Bookmark not found: b");
    assert!(err.source().is_some());

    let disabled = WidgetError::AffordanceDisabled("edit".to_string());
    assert_eq!(disabled.to_string(), "Action not available: edit");
    assert!(disabled.source().is_none());
}

// === SettingsError Tests ===

#[test]
fn settings_error_display_variants() {
    assert_eq!(
        SettingsError::IoError("permission denied".to_string()).to_string(),
        "Settings I/O error: permission denied"
    );
    assert_eq!(
        SettingsError::SerializationError("eof".to_string()).to_string(),
        "Settings serialization error: eof"
    );
    assert_eq!(
        SettingsError::InvalidKey("server.nope".to_string()).to_string(),
        "Invalid settings key: server.nope"
    );
    assert_eq!(
        SettingsError::InvalidValue("expected u16".to_string()).to_string(),
        "Invalid settings value: expected u16"
    );
}

// === ServerError Tests ===

#[test]
fn server_error_display_variants() {
    assert_eq!(
        ServerError::Config("Invalid address: x".to_string()).to_string(),
        "Server configuration error: Invalid address: x"
    );
    let io = ServerError::Io(std::io::Error::new(std::io::ErrorKind::AddrInUse, "in use"));
    assert_eq!(io.to_string(), "Server I/O error: in use");
    assert!(io.source().is_some());
}

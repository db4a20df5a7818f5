use std::fmt;

// === StorageError ===

/// Errors raised by a local storage backend.
#[derive(Debug)]
pub enum StorageError {
    /// Database operation failed.
    DatabaseError(String),
    /// Another thread panicked while holding the storage lock.
    LockPoisoned,
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::DatabaseError(msg) => write!(f, "Storage database error: {}", msg),
            StorageError::LockPoisoned => write!(f, "Storage lock poisoned"),
        }
    }
}

impl std::error::Error for StorageError {}

// === BookmarkError ===

/// Errors related to bookmark store operations.
#[derive(Debug)]
pub enum BookmarkError {
    /// Bookmark with the given id or index was not found.
    NotFound(String),
    /// The reference does not match the store's identifier strategy.
    InvalidReference(String),
    /// Reading, parsing, serializing or writing the stored array failed.
    StorageError(String),
}

impl fmt::Display for BookmarkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BookmarkError::NotFound(id) => write!(f, "Bookmark not found: {}", id),
            BookmarkError::InvalidReference(msg) => {
                write!(f, "Invalid bookmark reference: {}", msg)
            }
            BookmarkError::StorageError(msg) => write!(f, "Bookmark storage error: {}", msg),
        }
    }
}

impl std::error::Error for BookmarkError {}

// === ExtractError ===

/// Errors related to fetching a page and extracting its metadata.
#[derive(Debug)]
pub enum ExtractError {
    /// The requested URL could not be parsed.
    InvalidUrl(String),
    /// The outbound request failed.
    NetworkError(String),
    /// The response body could not be read.
    BodyError(String),
}

impl fmt::Display for ExtractError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExtractError::InvalidUrl(msg) => write!(f, "Invalid URL: {}", msg),
            ExtractError::NetworkError(msg) => write!(f, "Network error: {}", msg),
            ExtractError::BodyError(msg) => write!(f, "Failed to read response body: {}", msg),
        }
    }
}

impl std::error::Error for ExtractError {}

// === SubmissionError ===

/// Errors related to submitting a new bookmark.
#[derive(Debug)]
pub enum SubmissionError {
    /// The metadata call failed or produced no usable response.
    MetadataUnavailable(String),
    /// Storing the bookmark failed.
    StorageError(String),
}

impl fmt::Display for SubmissionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmissionError::MetadataUnavailable(msg) => {
                write!(f, "Bookmark metadata unavailable: {}", msg)
            }
            SubmissionError::StorageError(msg) => {
                write!(f, "Failed to store bookmark: {}", msg)
            }
        }
    }
}

impl std::error::Error for SubmissionError {}

impl From<BookmarkError> for SubmissionError {
    fn from(err: BookmarkError) -> Self {
        SubmissionError::StorageError(err.to_string())
    }
}

// === WidgetError ===

/// Errors surfaced by the bookmark widget's event handlers.
#[derive(Debug)]
pub enum WidgetError {
    /// The action is not enabled for this variant.
    AffordanceDisabled(String),
    /// A bookmark store operation failed.
    Bookmark(BookmarkError),
    /// A submission failed.
    Submission(SubmissionError),
}

impl fmt::Display for WidgetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WidgetError::AffordanceDisabled(action) => {
                write!(f, "Action not available: {}", action)
            }
            WidgetError::Bookmark(err) => write!(f, "{}", err),
            WidgetError::Submission(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for WidgetError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            WidgetError::AffordanceDisabled(_) => None,
            WidgetError::Bookmark(err) => Some(err),
            WidgetError::Submission(err) => Some(err),
        }
    }
}

impl From<BookmarkError> for WidgetError {
    fn from(err: BookmarkError) -> Self {
        WidgetError::Bookmark(err)
    }
}

impl From<SubmissionError> for WidgetError {
    fn from(err: SubmissionError) -> Self {
        WidgetError::Submission(err)
    }
}

// === SettingsError ===

/// Errors related to settings management.
#[derive(Debug)]
pub enum SettingsError {
    /// An I/O error occurred while reading or writing settings.
    IoError(String),
    /// Failed to serialize or deserialize settings.
    SerializationError(String),
    /// The provided settings key is invalid.
    InvalidKey(String),
    /// The provided settings value is invalid.
    InvalidValue(String),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::IoError(msg) => write!(f, "Settings I/O error: {}", msg),
            SettingsError::SerializationError(msg) => {
                write!(f, "Settings serialization error: {}", msg)
            }
            SettingsError::InvalidKey(key) => write!(f, "Invalid settings key: {}", key),
            SettingsError::InvalidValue(msg) => {
                write!(f, "Invalid settings value: {}", msg)
            }
        }
    }
}

impl std::error::Error for SettingsError {}

// === ServerError ===

/// Errors raised while starting the metadata endpoint.
#[derive(Debug)]
pub enum ServerError {
    /// Binding or serving failed.
    Io(std::io::Error),
    /// The configured listen address is invalid.
    Config(String),
}

impl fmt::Display for ServerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServerError::Io(err) => write!(f, "Server I/O error: {}", err),
            ServerError::Config(msg) => write!(f, "Server configuration error: {}", msg),
        }
    }
}

impl std::error::Error for ServerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ServerError::Io(err) => Some(err),
            ServerError::Config(_) => None,
        }
    }
}

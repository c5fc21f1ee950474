//! Error types for the watcher

/// Closed failure taxonomy for the poll-validate-translate-notify cycle.
///
/// Every variant except `MissingConfig` is recovered inside the poll loop;
/// `MissingConfig` is only reachable at startup and exits the process.
#[derive(Debug, thiserror::Error)]
pub enum WatchError {
    /// The request could not complete at all (DNS, refused, timeout).
    #[error("{0}")]
    Transport(String),

    /// The server answered, but not with a success status.
    #[error("unexpected status {status} from {endpoint} (from_date={from_date})")]
    UnexpectedStatus {
        endpoint: String,
        status: u16,
        from_date: u64,
    },

    /// The body did not decode, or carried an in-band error marker.
    #[error("malformed payload from {endpoint}: {detail}")]
    MalformedPayload { endpoint: String, detail: String },

    /// The decoded payload does not have the expected shape.
    #[error("schema violation: {0}")]
    Schema(String),

    /// A homework carried a status code outside the known set.
    #[error("unknown review status '{status}' for homework '{name}'")]
    UnknownStatus { name: String, status: String },

    /// The chat API rejected or could not receive the message.
    #[error("notification delivery failed: {0}")]
    Delivery(String),

    /// A required environment variable is absent.
    #[error("missing required environment variable(s): {0}")]
    MissingConfig(String),
}

/// Result type alias for watcher operations
pub type Result<T> = std::result::Result<T, WatchError>;

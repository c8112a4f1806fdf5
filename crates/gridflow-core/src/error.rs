use crate::types::DataView;

/// Errors produced by the execution backend while submitting a query or
/// reading pages of its result.
///
/// The initializer never retries these internally; it classifies them,
/// salvages whatever partial metadata they carry, and reports a converted
/// [`TableError`] through the consumer's error callback.
#[derive(Debug, thiserror::Error)]
pub enum ExecError {
    /// The query executed but produced zero rows.
    ///
    /// May carry a partial data view when the backend recovered enough
    /// metadata to support downstream setup (headers, drill configuration)
    /// despite the empty result.
    #[error("Execution returned no data. Broaden filters or verify the query definition.")]
    NoData {
        /// Partial page recovered alongside the error, if any.
        view: Option<Box<DataView>>,
    },

    /// The backend answered with a payload that is neither a result nor a
    /// recognized error.
    #[error(
        "Unexpected backend response: {detail}. Check client/backend version compatibility."
    )]
    UnexpectedResponse {
        /// What made the response uninterpretable.
        detail: String,
    },

    /// The backend enforced its own deadline on the operation.
    #[error("Backend timed out after {elapsed_ms}ms (budget: {budget_ms}ms). Narrow the query or raise the backend budget.")]
    Timeout {
        /// How long the operation ran.
        elapsed_ms: u64,
        /// The budget the backend enforced.
        budget_ms: u64,
    },

    /// Any other backend failure.
    #[error("Backend call failed: {source}. Transient failures may succeed on a fresh execution.")]
    Backend {
        /// The underlying error.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Wraps `std::io::Error` from the transport layer.
    #[error("I/O error: {0}. Check connectivity to the backend.")]
    Io(#[from] std::io::Error),
}

impl ExecError {
    /// Whether this is the "no data" error kind.
    #[must_use]
    pub const fn is_no_data(&self) -> bool {
        matches!(self, Self::NoData { .. })
    }

    /// Whether this is the "unexpected response" error kind.
    #[must_use]
    pub const fn is_unexpected_response(&self) -> bool {
        matches!(self, Self::UnexpectedResponse { .. })
    }

    /// The partial data view attached to a "no data" error, if any.
    #[must_use]
    pub fn no_data_view(&self) -> Option<&DataView> {
        match self {
            Self::NoData { view: Some(view) } => Some(view),
            _ => None,
        }
    }
}

/// Convenience alias used throughout the gridflow crate hierarchy.
pub type ExecResult<T> = Result<T, ExecError>;

/// Consumer-facing error delivered through the error callback.
///
/// Converted from [`ExecError`] via `From`. The partial data view a
/// "no data" error may carry is consumed by the push-data branch before
/// conversion and is intentionally not part of this type.
#[derive(Debug, thiserror::Error)]
pub enum TableError {
    /// The execution produced zero rows.
    #[error("No data for the current execution. Broaden filters or verify the query definition.")]
    NoData,

    /// The backend response could not be interpreted.
    #[error("Unexpected backend response: {detail}. Upgrade the client or report the payload.")]
    UnexpectedResponse {
        /// What made the response uninterpretable.
        detail: String,
    },

    /// The backend enforced its own deadline on the operation.
    #[error("Backend timed out after {elapsed_ms}ms (budget: {budget_ms}ms).")]
    Timeout {
        /// How long the operation ran.
        elapsed_ms: u64,
        /// The budget the backend enforced.
        budget_ms: u64,
    },

    /// Any other backend failure.
    #[error("Backend call failed: {source}")]
    Backend {
        /// The underlying error.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// A configuration value is invalid.
    #[error("Invalid config: {field}={value} ({reason})")]
    InvalidConfig {
        /// Which config field.
        field: String,
        /// The invalid value.
        value: String,
        /// Why it is invalid.
        reason: String,
    },
}

impl From<ExecError> for TableError {
    fn from(err: ExecError) -> Self {
        match err {
            ExecError::NoData { .. } => Self::NoData,
            ExecError::UnexpectedResponse { detail } => Self::UnexpectedResponse { detail },
            ExecError::Timeout {
                elapsed_ms,
                budget_ms,
            } => Self::Timeout {
                elapsed_ms,
                budget_ms,
            },
            ExecError::Backend { source } => Self::Backend { source },
            ExecError::Io(source) => Self::Backend {
                source: Box::new(source),
            },
        }
    }
}

/// Convenience alias for consumer-facing fallible operations.
pub type TableResult<T> = Result<T, TableError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ResultDescriptor;
    use std::error::Error as _;

    #[test]
    fn errors_are_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ExecError>();
        assert_send_sync::<TableError>();
    }

    #[test]
    fn no_data_classifier_and_attached_view() {
        let bare = ExecError::NoData { view: None };
        assert!(bare.is_no_data());
        assert!(!bare.is_unexpected_response());
        assert!(bare.no_data_view().is_none());

        let with_view = ExecError::NoData {
            view: Some(Box::new(DataView::empty(ResultDescriptor::new()))),
        };
        assert!(with_view.is_no_data());
        let attached = with_view.no_data_view().expect("attached view");
        assert!(attached.is_empty());
    }

    #[test]
    fn unexpected_response_classifier() {
        let err = ExecError::UnexpectedResponse {
            detail: "HTTP 200 with empty body".into(),
        };
        assert!(err.is_unexpected_response());
        assert!(!err.is_no_data());
        assert!(err.no_data_view().is_none());
    }

    #[test]
    fn backend_error_is_neither_classified_kind() {
        let err = ExecError::Backend {
            source: Box::new(std::io::Error::other("503 from gateway")),
        };
        assert!(!err.is_no_data());
        assert!(!err.is_unexpected_response());
    }

    #[test]
    fn conversion_drops_attached_view() {
        let err = ExecError::NoData {
            view: Some(Box::new(DataView::empty(ResultDescriptor::new()))),
        };
        let converted = TableError::from(err);
        assert!(matches!(converted, TableError::NoData));
    }

    #[test]
    fn conversion_preserves_detail_and_source() {
        let converted = TableError::from(ExecError::UnexpectedResponse {
            detail: "truncated frame".into(),
        });
        assert!(converted.to_string().contains("truncated frame"));

        let converted = TableError::from(ExecError::Backend {
            source: Box::new(std::io::Error::other("connection reset")),
        });
        assert!(converted.source().is_some());
        assert!(converted.to_string().contains("connection reset"));
    }

    #[test]
    fn io_error_converts_to_backend() {
        let exec: ExecError = std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
        assert!(exec.to_string().contains("gone"));

        let converted = TableError::from(exec);
        assert!(matches!(converted, TableError::Backend { .. }));
    }

    #[test]
    fn display_messages_are_actionable() {
        let err = ExecError::Timeout {
            elapsed_ms: 750,
            budget_ms: 500,
        };
        let msg = err.to_string();
        assert!(msg.contains("750"));
        assert!(msg.contains("500"));

        let err = TableError::InvalidConfig {
            field: "page_size".into(),
            value: "0".into(),
            reason: "must be at least 1".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("page_size"));
        assert!(msg.contains("must be at least 1"));
    }
}

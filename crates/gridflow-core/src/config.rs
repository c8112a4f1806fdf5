//! Configuration for the paginated table pipeline.
//!
//! [`TableConfig`] carries the tuning knobs and the optional consumer
//! callback sink used during table initialization.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::{TableError, TableResult};
use crate::traits::TableCallbacks;

/// Number of result rows requested per page when none is configured.
pub const DEFAULT_PAGE_SIZE: usize = 100;

/// Title applied to exports when neither the config nor the request names one.
pub const DEFAULT_EXPORT_TITLE: &str = "Untitled export";

/// Configuration for table initialization.
///
/// All fields have sensible defaults. Override selectively via the builder
/// helpers or environment variables.
///
/// # Environment Variable Overrides
///
/// | Variable                | Field          | Default            |
/// |-------------------------|----------------|--------------------|
/// | `GRIDFLOW_PAGE_SIZE`    | `page_size`    | `100`              |
/// | `GRIDFLOW_EXPORT_TITLE` | `export_title` | `Untitled export`  |
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    /// Number of result rows requested per page.
    /// Default: 100.
    pub page_size: usize,

    /// Title applied to exports whose request does not carry its own.
    /// Default: "Untitled export".
    pub export_title: String,

    /// Optional consumer notification sink.
    ///
    /// `None` means notifications are skipped entirely (zero-overhead fast
    /// path for consumers that only need the returned facade).
    #[serde(skip)]
    pub callbacks: Option<Arc<dyn TableCallbacks>>,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            export_title: DEFAULT_EXPORT_TITLE.to_owned(),
            callbacks: None,
        }
    }
}

impl TableConfig {
    /// Load overrides from environment variables.
    ///
    /// Only overrides fields for which environment variables are set.
    /// Invalid values are silently ignored (defaults are kept).
    #[must_use]
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(val) = std::env::var("GRIDFLOW_PAGE_SIZE")
            && let Ok(size) = val.parse::<usize>()
            && size >= 1
        {
            self.page_size = size;
        }
        if let Ok(val) = std::env::var("GRIDFLOW_EXPORT_TITLE")
            && !val.trim().is_empty()
        {
            self.export_title = val;
        }
        self
    }

    /// Sets the page row count.
    #[must_use]
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    /// Sets the default export title.
    #[must_use]
    pub fn with_export_title(mut self, title: impl Into<String>) -> Self {
        self.export_title = title.into();
        self
    }

    /// Attach a consumer callback sink.
    #[must_use]
    pub fn with_callbacks(mut self, callbacks: Arc<dyn TableCallbacks>) -> Self {
        self.callbacks = Some(callbacks);
        self
    }

    /// Remove any callback sink and skip notifications.
    #[must_use]
    pub fn without_callbacks(mut self) -> Self {
        self.callbacks = None;
        self
    }

    /// Returns the configured callback sink, if any.
    #[must_use]
    pub fn callbacks(&self) -> Option<&Arc<dyn TableCallbacks>> {
        self.callbacks.as_ref()
    }

    /// Validate field ranges.
    ///
    /// # Errors
    ///
    /// Returns `TableError::InvalidConfig` when `page_size` is zero or the
    /// export title is blank.
    pub fn validate(&self) -> TableResult<()> {
        if self.page_size == 0 {
            return Err(TableError::InvalidConfig {
                field: "page_size".to_owned(),
                value: "0".to_owned(),
                reason: "must be at least 1".to_owned(),
            });
        }
        if self.export_title.trim().is_empty() {
            return Err(TableError::InvalidConfig {
                field: "export_title".to_owned(),
                value: self.export_title.clone(),
                reason: "must not be blank".to_owned(),
            });
        }
        Ok(())
    }
}

//! Paginated execution initializer.
//!
//! [`TableInitializer`] drives the two-phase fetch that brings a table to
//! life: submit the prepared execution, then read the first page of its
//! result. Outcomes are delivered through the consumer's [`TableCallbacks`]
//! and summarized in the returned [`InitOutcome`].
//!
//! # Callback Protocol
//!
//! For one `initialize()` call the callbacks fire in a fixed order:
//!
//! 1. `on_loading_changed(is_loading: true)`, before the execute round-trip
//!    is issued.
//! 2. On success: `on_loading_changed(is_loading: false)`, then
//!    `on_export_ready`, then `push_data` with the first page and its drill
//!    targets.
//! 3. On failure: `push_data` with partial drill targets for the error kinds
//!    that allow it (see [`TableInitializer::initialize`]), then `on_error`
//!    exactly once.
//!
//! After [`TableInitializer::abandon`] no callback fires at all. The
//! in-flight backend calls are not cancelled; they run to completion and
//! their outcomes are discarded.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;

use tracing::instrument;

use gridflow_core::config::TableConfig;
use gridflow_core::error::{ExecError, TableError};
use gridflow_core::export::TableExporter;
use gridflow_core::traits::{ExecutionHandle, ExecutionView, TableCallbacks};
use gridflow_core::types::{DataView, LoadingState, PushPayload};

use crate::drill::{available_drill_targets, available_drill_targets_from_result};
use crate::facade::TableFacade;

/// Fixed column width of a result page. The row count per page comes from
/// [`TableConfig::page_size`].
pub const COLS_PER_PAGE: usize = 1000;

/// Terminal outcome of one [`TableInitializer::initialize`] call.
///
/// Exactly one variant is produced per call. Errors and abandonment are
/// never surfaced as a failed future; the error was already delivered
/// through the consumer's `on_error` callback.
#[derive(Debug)]
pub enum InitOutcome {
    /// The first page arrived; the facade wraps it.
    Ready(Box<TableFacade>),
    /// The backend failed. The converted error went to `on_error`.
    Failed,
    /// The owner abandoned the initializer while work was in flight. No
    /// callback fired after the abandonment.
    Abandoned,
}

impl InitOutcome {
    /// Whether this outcome carries a facade.
    #[must_use]
    pub const fn is_ready(&self) -> bool {
        matches!(self, Self::Ready(_))
    }

    /// Unwraps the facade, if this is the success outcome.
    #[must_use]
    pub fn into_facade(self) -> Option<TableFacade> {
        match self {
            Self::Ready(facade) => Some(*facade),
            Self::Failed | Self::Abandoned => None,
        }
    }
}

/// Drives the two-phase fetch for one table, with advisory cancellation.
///
/// The initializer performs exactly one `execute()` call and at most one
/// `read_window()` call per attempt; it never retries internally.
pub struct TableInitializer {
    execution: Arc<dyn ExecutionHandle>,
    config: TableConfig,
    abandoned: AtomicBool,
}

impl TableInitializer {
    /// Creates an initializer for a prepared execution.
    #[must_use]
    pub fn new(execution: Arc<dyn ExecutionHandle>, config: TableConfig) -> Self {
        Self {
            execution,
            config,
            abandoned: AtomicBool::new(false),
        }
    }

    /// Whether [`abandon`](Self::abandon) has been called.
    #[must_use]
    pub fn is_abandoned(&self) -> bool {
        self.abandoned.load(Ordering::Acquire)
    }

    /// Discard the outcome of any in-flight initialization.
    ///
    /// Does not cancel the underlying backend calls; they run to completion
    /// and their results are dropped. No callback fires after this returns,
    /// and a pending `initialize()` resolves to [`InitOutcome::Abandoned`].
    ///
    /// # Panics
    ///
    /// Panics when called twice on the same instance. Abandonment is a
    /// one-way transition; a second call is a caller-side logic bug.
    pub fn abandon(&self) {
        let was_abandoned = self.abandoned.swap(true, Ordering::AcqRel);
        assert!(
            !was_abandoned,
            "abandon() called twice on the same table initializer"
        );
    }

    /// Run the two-phase fetch: submit the execution, then read the first
    /// page (`[page_size, COLS_PER_PAGE]` at offset `[0, 0]`).
    ///
    /// Emits `on_loading_changed(is_loading: true)` before the execute
    /// round-trip is issued, then follows the callback protocol described in
    /// the module docs. The returned future always resolves to an
    /// [`InitOutcome`].
    ///
    /// Calling this more than once on the same instance is a caller error
    /// with unspecified behavior; it is not guarded.
    #[instrument(
        skip_all,
        fields(
            fingerprint = self.execution.fingerprint(),
            page_size = self.config.page_size,
        )
    )]
    pub async fn initialize(&self) -> InitOutcome {
        self.emit_loading(true);

        let started = Instant::now();
        let result = match self.execution.execute().await {
            Ok(result) => result,
            Err(err) => return self.resolve_execute_failure(err),
        };
        tracing::debug!(
            elapsed_ms = started.elapsed().as_secs_f64() * 1000.0,
            "execution submitted"
        );

        let read_started = Instant::now();
        let window = result
            .read_window([0, 0], [self.config.page_size, COLS_PER_PAGE])
            .await;
        match window {
            Ok(view) => self.resolve_success(&result, view, read_started),
            Err(err) => self.resolve_read_failure(&result, err),
        }
    }

    fn resolve_success(
        &self,
        result: &Arc<dyn ExecutionView>,
        view: DataView,
        read_started: Instant,
    ) -> InitOutcome {
        if self.is_abandoned() {
            return InitOutcome::Abandoned;
        }
        tracing::debug!(
            row_count = view.row_count(),
            elapsed_ms = read_started.elapsed().as_secs_f64() * 1000.0,
            "first page ready"
        );

        let facade = TableFacade::new(
            Arc::clone(&self.execution),
            Arc::clone(result),
            view.clone(),
            self.config.clone(),
        );

        self.emit_loading(false);
        if let Some(callbacks) = self.config.callbacks.as_ref() {
            callbacks.on_export_ready(TableExporter::new(
                Arc::clone(result),
                self.config.export_title.clone(),
            ));
        }
        let drill_targets = available_drill_targets(&view);
        self.push(PushPayload {
            data_view: Some(view),
            drill_targets,
        });

        InitOutcome::Ready(Box::new(facade))
    }

    fn resolve_read_failure(&self, result: &Arc<dyn ExecutionView>, err: ExecError) -> InitOutcome {
        if self.is_abandoned() {
            return InitOutcome::Abandoned;
        }

        if err.is_unexpected_response() {
            // The page is unusable, but the result descriptor still says
            // what could be drilled.
            let drill_targets = available_drill_targets_from_result(result.as_ref());
            self.push(PushPayload {
                data_view: None,
                drill_targets,
            });
        } else if let Some(view) = err.no_data_view() {
            let drill_targets = available_drill_targets(view);
            self.push(PushPayload {
                data_view: None,
                drill_targets,
            });
            self.emit_loading(false);
        }

        tracing::warn!(
            error = %err,
            "table initialization failed while reading the first page"
        );
        self.emit_error(TableError::from(err));
        InitOutcome::Failed
    }

    fn resolve_execute_failure(&self, err: ExecError) -> InitOutcome {
        if self.is_abandoned() {
            return InitOutcome::Abandoned;
        }
        tracing::warn!(error = %err, "execution submit failed");
        self.emit_error(TableError::from(err));
        InitOutcome::Failed
    }

    fn emit_loading(&self, is_loading: bool) {
        if let Some(callbacks) = self.config.callbacks.as_ref() {
            callbacks.on_loading_changed(LoadingState { is_loading });
        }
    }

    fn push(&self, payload: PushPayload) {
        if let Some(callbacks) = self.config.callbacks.as_ref() {
            callbacks.push_data(&payload);
        }
    }

    fn emit_error(&self, error: TableError) {
        if let Some(callbacks) = self.config.callbacks.as_ref() {
            callbacks.on_error(&error, self.execution.as_ref());
        }
    }
}

// Implement Debug manually since trait objects don't derive Debug.
impl std::fmt::Debug for TableInitializer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TableInitializer")
            .field("fingerprint", &self.execution.fingerprint())
            .field("abandoned", &self.is_abandoned())
            .field("page_size", &self.config.page_size)
            .finish_non_exhaustive()
    }
}

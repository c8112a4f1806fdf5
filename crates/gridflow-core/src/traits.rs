//! Collaborator contracts for the gridflow table pipeline.
//!
//! - [`ExecutionHandle`]: a prepared, not-yet-run analytical query.
//! - [`ExecutionView`]: a submitted execution's result, readable in windows.
//! - [`TableCallbacks`]: the consumer-facing notification set.
//!
//! Async operations are represented as boxed futures so the traits remain
//! dyn-compatible for runtime polymorphism (`Arc<dyn ExecutionHandle>`,
//! `Arc<dyn ExecutionView>`, etc.).

use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use crate::error::{ExecError, TableError};
use crate::export::TableExporter;
use crate::types::{
    DataView, ExportRequest, ExportedFile, LoadingState, PushPayload, ResultDescriptor,
};

/// Boxed future carrying an `ExecResult<T>`.
pub type ExecFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T, ExecError>> + Send + 'a>>;

// ─── Execution Handle ───────────────────────────────────────────────────────

/// A prepared analytical query that can be submitted to the backend.
///
/// # Contract
///
/// - `execute()` performs one backend round-trip and yields the execution's
///   result session. The initializer calls it exactly once per attempt.
/// - Results must remain valid even when the caller discards them: the
///   backend may not leak resources on an unobserved outcome.
/// - `fingerprint()` must be stable for the lifetime of the handle; it is
///   used to correlate log lines and error reports with the query identity.
pub trait ExecutionHandle: Send + Sync {
    /// Submit the execution to the backend.
    ///
    /// # Errors
    ///
    /// Returns `ExecError` when the submission round-trip fails.
    fn execute<'a>(&'a self) -> ExecFuture<'a, Arc<dyn ExecutionView>>;

    /// Stable identifier for this execution definition.
    fn fingerprint(&self) -> &str;
}

// ─── Execution View ─────────────────────────────────────────────────────────

/// A submitted execution's result, readable in rectangular windows.
pub trait ExecutionView: Send + Sync {
    /// Fetch the window at zero-based `offset` (`[row, col]`) spanning
    /// `size` (`[rows, cols]`).
    ///
    /// The returned page may be smaller than requested when the window hits
    /// the result bounds.
    ///
    /// # Errors
    ///
    /// Returns `ExecError::NoData` for empty results (possibly carrying a
    /// partial view), `ExecError::UnexpectedResponse` for uninterpretable
    /// payloads, or any other `ExecError` for transport failures.
    fn read_window<'a>(&'a self, offset: [usize; 2], size: [usize; 2])
    -> ExecFuture<'a, DataView>;

    /// Metadata describing the result shape.
    fn descriptor(&self) -> &ResultDescriptor;

    /// Ask the backend to materialize this result as a downloadable file.
    ///
    /// # Errors
    ///
    /// Returns `ExecError` when the backend export fails.
    fn export<'a>(&'a self, request: ExportRequest) -> ExecFuture<'a, ExportedFile>;
}

// ─── Table Callbacks ────────────────────────────────────────────────────────

/// Consumer-facing notification set for table initialization.
///
/// This is a closed observer interface, not an event bus: the initializer
/// emits exactly these notifications in a documented order. Implementations
/// must be non-blocking and fast, because callbacks are invoked directly
/// from the initialization path.
pub trait TableCallbacks: fmt::Debug + Send + Sync {
    /// Called when the loading state flips.
    fn on_loading_changed(&self, state: LoadingState);

    /// Called once, on the success path, when the result can be exported.
    fn on_export_ready(&self, exporter: TableExporter);

    /// Called when data or drill metadata becomes available.
    fn push_data(&self, payload: &PushPayload);

    /// Called at most once per initialization attempt when the backend
    /// fails. `execution` identifies the query the error belongs to.
    fn on_error(&self, error: &TableError, execution: &dyn ExecutionHandle);
}

/// Shared handle for dynamic callback sinks.
pub type SharedTableCallbacks = Arc<dyn TableCallbacks>;

/// No-op sink used when no consumer callbacks are attached.
///
/// This is intentionally empty so callers can cheaply opt out of
/// notifications.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoOpTableCallbacks;

impl TableCallbacks for NoOpTableCallbacks {
    fn on_loading_changed(&self, _: LoadingState) {}

    fn on_export_ready(&self, _: TableExporter) {}

    fn push_data(&self, _: &PushPayload) {}

    fn on_error(&self, _: &TableError, _: &dyn ExecutionHandle) {}
}

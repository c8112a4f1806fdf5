//! Core traits, types, and error types for the gridflow table SDK.
//!
//! This crate defines the shared interfaces (`ExecutionHandle`,
//! `ExecutionView`, `TableCallbacks`), payload types (`DataView`,
//! `PushPayload`, `AvailableDrillTargets`), error types (`ExecError`,
//! `TableError`), configuration, and tracing conventions used across all
//! gridflow crates.
//!
//! It has minimal external dependencies and is intended to be depended on by
//! every other crate in the workspace.

pub mod config;
pub mod error;
pub mod export;
pub mod tracing_config;
pub mod traits;
pub mod types;

pub use config::{DEFAULT_EXPORT_TITLE, DEFAULT_PAGE_SIZE, TableConfig};
pub use error::{ExecError, ExecResult, TableError, TableResult};
pub use export::TableExporter;
pub use traits::{
    ExecFuture, ExecutionHandle, ExecutionView, NoOpTableCallbacks, SharedTableCallbacks,
    TableCallbacks,
};
pub use types::{
    AttributeDescriptor, AvailableDrillTargets, DataView, ExportFormat, ExportRequest,
    ExportedFile, LoadingState, MeasureDescriptor, PushPayload, ResultDescriptor,
};

//! # gridflow
//!
//! Client-side table initialization for analytics executions: submit a
//! prepared execution, read the first page of its result, and deliver
//! progress through a fixed callback protocol with advisory cancellation.
//!
//! The two-phase fetch resolves to exactly one of three outcomes (a ready
//! [`TableFacade`], a reported failure, or a silent abandonment) and the
//! consumer observes progress through [`TableCallbacks`]:
//!
//! 1. `on_loading_changed(is_loading: true)` before the backend round-trip
//!    starts.
//! 2. On success: `on_loading_changed(is_loading: false)`,
//!    `on_export_ready`, then `push_data` with the first page and its drill
//!    targets.
//! 3. On failure: `push_data` with whatever drill metadata could be
//!    salvaged, then `on_error` exactly once.
//!
//! Abandoning the initializer while a fetch is in flight suppresses every
//! later callback without cancelling the backend calls; this models tearing
//! down a view whose data is still loading.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use gridflow::prelude::*;
//!
//! # async fn demo() {
//! let descriptor = ResultDescriptor::new()
//!     .with_attribute(AttributeDescriptor::new("a_region", "Region"))
//!     .with_measure(MeasureDescriptor::new("m_revenue", "Revenue"));
//! let execution = MemoryExecution::new("revenue-by-region", descriptor)
//!     .with_rows(vec![vec!["East".into(), 1250.5.into()]]);
//!
//! let initializer = TableInitializer::new(
//!     Arc::new(execution),
//!     TableConfig::default().with_export_title("Revenue by region"),
//! );
//!
//! match initializer.initialize().await {
//!     InitOutcome::Ready(facade) => println!("{} rows", facade.row_count()),
//!     InitOutcome::Failed => eprintln!("reported via on_error"),
//!     InitOutcome::Abandoned => {}
//! }
//! # }
//! ```
//!
//! ## Crate Layout
//!
//! | Crate | Purpose |
//! |-------|---------|
//! | `gridflow-core` | Traits, types, errors, config, tracing conventions |
//! | `gridflow-table` | Initializer, facade, drill extraction, memory backend |
//! | `gridflow` | This umbrella crate |

pub use gridflow_core::{
    AttributeDescriptor, AvailableDrillTargets, DEFAULT_EXPORT_TITLE, DEFAULT_PAGE_SIZE, DataView,
    ExecError, ExecFuture, ExecResult, ExecutionHandle, ExecutionView, ExportFormat,
    ExportRequest, ExportedFile, LoadingState, MeasureDescriptor, NoOpTableCallbacks, PushPayload,
    ResultDescriptor, SharedTableCallbacks, TableCallbacks, TableConfig, TableError, TableExporter,
    TableResult, tracing_config,
};
pub use gridflow_table::{
    COLS_PER_PAGE, InitOutcome, MemoryExecution, MemoryView, TableFacade, TableInitializer,
    available_drill_targets, available_drill_targets_from_result,
};

/// Commonly-used imports for consumers of the SDK.
pub mod prelude {
    pub use gridflow_core::{
        AttributeDescriptor, DataView, ExecutionHandle, ExecutionView, LoadingState,
        MeasureDescriptor, PushPayload, ResultDescriptor, TableCallbacks, TableConfig, TableError,
        TableExporter,
    };
    pub use gridflow_table::{
        COLS_PER_PAGE, InitOutcome, MemoryExecution, TableFacade, TableInitializer,
    };
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crate::prelude::*;

    #[tokio::test]
    async fn prelude_covers_the_happy_path() {
        let descriptor = ResultDescriptor::new()
            .with_attribute(AttributeDescriptor::new("a_region", "Region"))
            .with_measure(MeasureDescriptor::new("m_revenue", "Revenue"));
        let execution = MemoryExecution::new("smoke", descriptor).with_rows(vec![vec![
            serde_json::json!("East"),
            serde_json::json!(1250.5),
        ]]);

        let initializer =
            TableInitializer::new(Arc::new(execution), TableConfig::default());
        let facade = initializer
            .initialize()
            .await
            .into_facade()
            .expect("facade");
        assert_eq!(facade.row_count(), 1);
    }
}

//! The fully-initialized table handed back to the consumer.

use std::fmt;
use std::sync::Arc;

use gridflow_core::config::TableConfig;
use gridflow_core::export::TableExporter;
use gridflow_core::traits::{ExecutionHandle, ExecutionView};
use gridflow_core::types::{DataView, ResultDescriptor};

/// The success-path output of table initialization.
///
/// Wraps the execution handle, the execution result, the first page of data,
/// and the configuration the table was initialized with. Constructed only
/// when the first page arrived; ownership transfers to the caller.
pub struct TableFacade {
    execution: Arc<dyn ExecutionHandle>,
    result: Arc<dyn ExecutionView>,
    view: DataView,
    config: TableConfig,
}

impl TableFacade {
    /// Wraps a completed initialization's parts.
    #[must_use]
    pub fn new(
        execution: Arc<dyn ExecutionHandle>,
        result: Arc<dyn ExecutionView>,
        view: DataView,
        config: TableConfig,
    ) -> Self {
        Self {
            execution,
            result,
            view,
            config,
        }
    }

    /// The execution this table was initialized from.
    #[must_use]
    pub fn execution(&self) -> &Arc<dyn ExecutionHandle> {
        &self.execution
    }

    /// The execution result backing this table.
    #[must_use]
    pub fn result(&self) -> &Arc<dyn ExecutionView> {
        &self.result
    }

    /// The first page of data.
    #[must_use]
    pub fn data_view(&self) -> &DataView {
        &self.view
    }

    /// Metadata describing the result shape.
    #[must_use]
    pub fn descriptor(&self) -> &ResultDescriptor {
        &self.view.descriptor
    }

    /// The configuration this table was initialized with.
    #[must_use]
    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    /// Number of rows in the first page.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.view.row_count()
    }

    /// Whether the first page contains no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.view.is_empty()
    }

    /// Mint an exporter over this table's result, using the configured
    /// export title.
    #[must_use]
    pub fn exporter(&self) -> TableExporter {
        TableExporter::new(Arc::clone(&self.result), self.config.export_title.clone())
    }
}

// Implement Debug manually since trait objects don't derive Debug.
impl fmt::Debug for TableFacade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TableFacade")
            .field("fingerprint", &self.execution.fingerprint())
            .field("rows", &self.view.row_count())
            .field("page_size", &self.config.page_size)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryExecution;
    use gridflow_core::types::{AttributeDescriptor, MeasureDescriptor};

    fn sample_descriptor() -> ResultDescriptor {
        ResultDescriptor::new()
            .with_attribute(AttributeDescriptor::new("a_region", "Region"))
            .with_measure(MeasureDescriptor::new("m_revenue", "Revenue"))
    }

    async fn sample_facade() -> TableFacade {
        let execution: Arc<dyn ExecutionHandle> = Arc::new(
            MemoryExecution::new("facade-test", sample_descriptor()).with_rows(vec![
                vec![serde_json::json!("East"), serde_json::json!(10.0)],
                vec![serde_json::json!("West"), serde_json::json!(7.5)],
            ]),
        );
        let result = execution.execute().await.expect("execute");
        let view = result
            .read_window([0, 0], [100, 100])
            .await
            .expect("read window");
        TableFacade::new(execution, result, view, TableConfig::default())
    }

    #[tokio::test]
    async fn facade_exposes_its_parts() {
        let facade = sample_facade().await;
        assert_eq!(facade.row_count(), 2);
        assert!(!facade.is_empty());
        assert_eq!(facade.descriptor().attributes[0].local_id, "a_region");
        assert_eq!(facade.execution().fingerprint(), "facade-test");
        assert_eq!(facade.config().page_size, 100);
    }

    #[tokio::test]
    async fn facade_mints_exporter_with_configured_title() {
        let facade = sample_facade().await;
        assert_eq!(facade.exporter().title(), "Untitled export");
    }

    #[tokio::test]
    async fn debug_impl_works() {
        let facade = sample_facade().await;
        let debug = format!("{facade:?}");
        assert!(debug.contains("TableFacade"));
        assert!(debug.contains("facade-test"));
    }
}

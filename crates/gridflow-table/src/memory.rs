//! In-memory execution backend.
//!
//! [`MemoryExecution`] implements the backend contracts over a fixed
//! dataset. It is the reference implementation used by tests, docs, and
//! demos: window reads clamp to the dataset bounds, an empty dataset
//! surfaces the "no data" error carrying a zero-row partial view, and
//! exports render a synthetic URI.

use std::sync::Arc;

use gridflow_core::error::ExecError;
use gridflow_core::traits::{ExecFuture, ExecutionHandle, ExecutionView};
use gridflow_core::types::{DataView, ExportRequest, ExportedFile, ResultDescriptor};

/// A prepared execution over an in-memory dataset.
#[derive(Debug, Clone)]
pub struct MemoryExecution {
    fingerprint: String,
    descriptor: ResultDescriptor,
    rows: Vec<Vec<serde_json::Value>>,
}

impl MemoryExecution {
    /// Creates an execution with an empty dataset.
    #[must_use]
    pub fn new(fingerprint: impl Into<String>, descriptor: ResultDescriptor) -> Self {
        Self {
            fingerprint: fingerprint.into(),
            descriptor,
            rows: Vec::new(),
        }
    }

    /// Replaces the dataset with the given rows.
    ///
    /// Each row is expected to match the descriptor width; narrower rows are
    /// served as-is.
    #[must_use]
    pub fn with_rows(mut self, rows: Vec<Vec<serde_json::Value>>) -> Self {
        self.rows = rows;
        self
    }
}

impl ExecutionHandle for MemoryExecution {
    fn execute<'a>(&'a self) -> ExecFuture<'a, Arc<dyn ExecutionView>> {
        Box::pin(async move {
            Ok(Arc::new(MemoryView {
                descriptor: self.descriptor.clone(),
                rows: self.rows.clone(),
            }) as Arc<dyn ExecutionView>)
        })
    }

    fn fingerprint(&self) -> &str {
        &self.fingerprint
    }
}

/// Result of a [`MemoryExecution`], readable in clamped windows.
#[derive(Debug)]
pub struct MemoryView {
    descriptor: ResultDescriptor,
    rows: Vec<Vec<serde_json::Value>>,
}

impl ExecutionView for MemoryView {
    fn read_window<'a>(
        &'a self,
        offset: [usize; 2],
        size: [usize; 2],
    ) -> ExecFuture<'a, DataView> {
        Box::pin(async move {
            if self.rows.is_empty() {
                return Err(ExecError::NoData {
                    view: Some(Box::new(DataView::empty(self.descriptor.clone()))),
                });
            }

            let width = self.descriptor.width();
            let row_start = offset[0].min(self.rows.len());
            let row_end = row_start.saturating_add(size[0]).min(self.rows.len());
            let col_start = offset[1].min(width);
            let col_end = col_start.saturating_add(size[1]).min(width);

            let rows: Vec<Vec<serde_json::Value>> = self.rows[row_start..row_end]
                .iter()
                .map(|row| {
                    let end = col_end.min(row.len());
                    let start = col_start.min(end);
                    row[start..end].to_vec()
                })
                .collect();

            Ok(DataView {
                descriptor: self.descriptor.clone(),
                offset: [row_start, col_start],
                size: [row_end - row_start, col_end - col_start],
                total_size: [self.rows.len(), width],
                rows,
            })
        })
    }

    fn descriptor(&self) -> &ResultDescriptor {
        &self.descriptor
    }

    fn export<'a>(&'a self, request: ExportRequest) -> ExecFuture<'a, ExportedFile> {
        Box::pin(async move {
            let title = request.title.unwrap_or_else(|| "export".to_owned());
            let slug: String = title
                .to_lowercase()
                .chars()
                .map(|c| if c.is_alphanumeric() { c } else { '-' })
                .collect();
            Ok(ExportedFile {
                uri: format!("memory://exports/{slug}.{}", request.format.extension()),
            })
        })
    }
}

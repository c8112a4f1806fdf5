//! Export handle delivered through the export-ready callback.

use std::fmt;
use std::sync::Arc;

use crate::error::ExecResult;
use crate::traits::ExecutionView;
use crate::types::{ExportRequest, ExportedFile};

/// Handle for exporting an initialized table's result.
///
/// Captures the execution result and the export title configured for the
/// table. Requests that do not carry their own title inherit the captured
/// one, so a consumer can trigger an export without knowing how the table
/// was configured.
pub struct TableExporter {
    result: Arc<dyn ExecutionView>,
    title: String,
}

impl TableExporter {
    /// Creates an exporter over an execution result.
    #[must_use]
    pub fn new(result: Arc<dyn ExecutionView>, title: impl Into<String>) -> Self {
        Self {
            result,
            title: title.into(),
        }
    }

    /// The title applied to requests that do not carry their own.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Materialize the result as a downloadable file.
    ///
    /// # Errors
    ///
    /// Returns `ExecError` when the backend export fails.
    pub async fn export(&self, request: ExportRequest) -> ExecResult<ExportedFile> {
        let request = if request.title.is_some() {
            request
        } else {
            request.with_title(self.title.clone())
        };
        self.result.export(request).await
    }
}

// Implement Debug manually since trait objects don't derive Debug.
impl fmt::Debug for TableExporter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TableExporter")
            .field("title", &self.title)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use crate::traits::ExecFuture;
    use crate::types::{DataView, ExportFormat, ResultDescriptor};

    /// Records the export requests it receives and answers with a fixed URI.
    #[derive(Debug)]
    struct RecordingView {
        descriptor: ResultDescriptor,
        requests: Mutex<Vec<ExportRequest>>,
    }

    impl RecordingView {
        fn new() -> Self {
            Self {
                descriptor: ResultDescriptor::new(),
                requests: Mutex::new(Vec::new()),
            }
        }
    }

    impl ExecutionView for RecordingView {
        fn read_window<'a>(
            &'a self,
            offset: [usize; 2],
            size: [usize; 2],
        ) -> ExecFuture<'a, DataView> {
            Box::pin(async move {
                let mut view = DataView::empty(self.descriptor.clone());
                view.offset = offset;
                view.size = size;
                Ok(view)
            })
        }

        fn descriptor(&self) -> &ResultDescriptor {
            &self.descriptor
        }

        fn export<'a>(&'a self, request: ExportRequest) -> ExecFuture<'a, ExportedFile> {
            Box::pin(async move {
                self.requests
                    .lock()
                    .expect("requests lock")
                    .push(request.clone());
                Ok(ExportedFile {
                    uri: "stub://exported".into(),
                })
            })
        }
    }

    #[tokio::test]
    async fn export_fills_in_configured_title() {
        let view = Arc::new(RecordingView::new());
        let exporter = TableExporter::new(view.clone(), "Quarterly revenue");

        let file = exporter
            .export(ExportRequest::new(ExportFormat::Csv))
            .await
            .expect("export");
        assert_eq!(file.uri, "stub://exported");

        let requests = view.requests.lock().expect("requests lock");
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].title.as_deref(), Some("Quarterly revenue"));
    }

    #[tokio::test]
    async fn export_keeps_explicit_title() {
        let view = Arc::new(RecordingView::new());
        let exporter = TableExporter::new(view.clone(), "Default title");

        exporter
            .export(ExportRequest::new(ExportFormat::Xlsx).with_title("Ad-hoc pull"))
            .await
            .expect("export");

        let requests = view.requests.lock().expect("requests lock");
        assert_eq!(requests[0].title.as_deref(), Some("Ad-hoc pull"));
    }

    #[test]
    fn debug_impl_shows_title() {
        let exporter = TableExporter::new(Arc::new(RecordingView::new()), "T");
        let debug = format!("{exporter:?}");
        assert!(debug.contains("TableExporter"));
        assert!(debug.contains("\"T\""));
    }
}

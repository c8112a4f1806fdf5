use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Result metadata
// ---------------------------------------------------------------------------

/// Descriptor of one attribute (a categorical dimension) of an execution
/// result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeDescriptor {
    /// Stable identifier, unique within one execution definition.
    pub local_id: String,
    /// Display title.
    pub title: String,
}

impl AttributeDescriptor {
    /// Creates a descriptor from its identifier and title.
    #[must_use]
    pub fn new(local_id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            local_id: local_id.into(),
            title: title.into(),
        }
    }
}

/// Descriptor of one measure (a computed numeric column) of an execution
/// result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeasureDescriptor {
    /// Stable identifier, unique within one execution definition.
    pub local_id: String,
    /// Display title.
    pub title: String,
    /// Optional number format hint (e.g. `#,##0.00`).
    pub format: Option<String>,
}

impl MeasureDescriptor {
    /// Creates a descriptor from its identifier and title.
    #[must_use]
    pub fn new(local_id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            local_id: local_id.into(),
            title: title.into(),
            format: None,
        }
    }

    /// Sets the number format hint.
    #[must_use]
    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }
}

/// Metadata describing the shape of an execution result.
///
/// Produced by the backend when an execution is submitted; available both on
/// the execution result and on every page read from it. Drill-target
/// extraction derives entirely from this descriptor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultDescriptor {
    /// Attribute descriptors, in result column order.
    pub attributes: Vec<AttributeDescriptor>,
    /// Measure descriptors, in result column order.
    pub measures: Vec<MeasureDescriptor>,
}

impl ResultDescriptor {
    /// Creates an empty descriptor.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an attribute descriptor.
    #[must_use]
    pub fn with_attribute(mut self, attribute: AttributeDescriptor) -> Self {
        self.attributes.push(attribute);
        self
    }

    /// Appends a measure descriptor.
    #[must_use]
    pub fn with_measure(mut self, measure: MeasureDescriptor) -> Self {
        self.measures.push(measure);
        self
    }

    /// Total column count described by this descriptor.
    #[must_use]
    pub fn width(&self) -> usize {
        self.attributes.len().saturating_add(self.measures.len())
    }
}

// ---------------------------------------------------------------------------
// Data view
// ---------------------------------------------------------------------------

/// One materialized page of execution result data.
///
/// The initializer passes views through to the consumer unmodified; cell
/// values are opaque JSON payloads. A view may also arrive attached to a
/// "no data" error when the backend recovered enough metadata for follow-up
/// setup even though the result has zero rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataView {
    /// Metadata describing the result this page belongs to.
    pub descriptor: ResultDescriptor,
    /// Zero-based `[row, col]` origin of this page within the full result.
    pub offset: [usize; 2],
    /// `[rows, cols]` actually contained in this page. May be smaller than
    /// requested when the window hits the result bounds.
    pub size: [usize; 2],
    /// `[rows, cols]` of the full result.
    pub total_size: [usize; 2],
    /// Row-major cell values.
    pub rows: Vec<Vec<serde_json::Value>>,
}

impl DataView {
    /// A zero-row view carrying only metadata.
    ///
    /// This is the shape attached to "no data" errors.
    #[must_use]
    pub fn empty(descriptor: ResultDescriptor) -> Self {
        let width = descriptor.width();
        Self {
            descriptor,
            offset: [0, 0],
            size: [0, 0],
            total_size: [0, width],
            rows: Vec::new(),
        }
    }

    /// Number of rows in this page.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Whether this page contains no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Callback payloads
// ---------------------------------------------------------------------------

/// Loading-state notification payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadingState {
    /// Whether the initializer is currently waiting on the backend.
    pub is_loading: bool,
}

/// Drill targets available for the current result.
///
/// Every attribute and measure that appears in the result descriptor is a
/// candidate for interactive drilling; duplicates across dimensions are
/// collapsed by `local_id`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailableDrillTargets {
    /// Drillable attributes, in descriptor order.
    pub attributes: Vec<AttributeDescriptor>,
    /// Drillable measures, in descriptor order.
    pub measures: Vec<MeasureDescriptor>,
}

impl AvailableDrillTargets {
    /// Whether no drill target is available.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty() && self.measures.is_empty()
    }

    /// Total number of drill targets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.attributes.len().saturating_add(self.measures.len())
    }
}

/// Payload pushed to the consumer when data or drill metadata becomes
/// available.
///
/// On the success path the payload carries the first page together with its
/// drill targets. The degraded error branches push drill targets alone, so
/// the consumer can still configure drilling before rendering the error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PushPayload {
    /// The page of data, when one is available.
    pub data_view: Option<DataView>,
    /// Drill targets computed for the current result.
    pub drill_targets: AvailableDrillTargets,
}

// ---------------------------------------------------------------------------
// Export
// ---------------------------------------------------------------------------

/// Export formats understood by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// Comma-separated values.
    Csv,
    /// Excel workbook.
    Xlsx,
}

impl ExportFormat {
    /// Conventional file extension for this format.
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Xlsx => "xlsx",
        }
    }
}

/// A request to materialize an execution result as a downloadable file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportRequest {
    /// Requested file format.
    pub format: ExportFormat,
    /// Title for the exported document. When absent, the exporter fills in
    /// the title configured for the table.
    pub title: Option<String>,
}

impl ExportRequest {
    /// Creates a request for the given format with no explicit title.
    #[must_use]
    pub const fn new(format: ExportFormat) -> Self {
        Self {
            format,
            title: None,
        }
    }

    /// Sets an explicit document title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}

/// Reference to an exported file produced by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportedFile {
    /// Location of the exported document.
    pub uri: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_descriptor() -> ResultDescriptor {
        ResultDescriptor::new()
            .with_attribute(AttributeDescriptor::new("a_region", "Region"))
            .with_measure(MeasureDescriptor::new("m_revenue", "Revenue").with_format("#,##0.00"))
    }

    #[test]
    fn descriptor_builder_preserves_order_and_width() {
        let descriptor = ResultDescriptor::new()
            .with_attribute(AttributeDescriptor::new("a_1", "First"))
            .with_attribute(AttributeDescriptor::new("a_2", "Second"))
            .with_measure(MeasureDescriptor::new("m_1", "Count"));

        assert_eq!(descriptor.attributes[0].local_id, "a_1");
        assert_eq!(descriptor.attributes[1].local_id, "a_2");
        assert_eq!(descriptor.measures[0].local_id, "m_1");
        assert_eq!(descriptor.width(), 3);
    }

    #[test]
    fn empty_view_carries_metadata_only() {
        let view = DataView::empty(sample_descriptor());
        assert!(view.is_empty());
        assert_eq!(view.row_count(), 0);
        assert_eq!(view.size, [0, 0]);
        assert_eq!(view.total_size, [0, 2]);
        assert_eq!(view.descriptor.measures[0].local_id, "m_revenue");
    }

    #[test]
    fn data_view_serde_roundtrip() {
        let view = DataView {
            descriptor: sample_descriptor(),
            offset: [0, 0],
            size: [2, 2],
            total_size: [10, 2],
            rows: vec![
                vec![serde_json::json!("East"), serde_json::json!(1250.5)],
                vec![serde_json::json!("West"), serde_json::json!(990.0)],
            ],
        };
        let json = serde_json::to_string(&view).expect("serialize");
        let decoded: DataView = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(decoded, view);
    }

    #[test]
    fn drill_targets_len_and_empty() {
        let empty = AvailableDrillTargets::default();
        assert!(empty.is_empty());
        assert_eq!(empty.len(), 0);

        let targets = AvailableDrillTargets {
            attributes: vec![AttributeDescriptor::new("a", "A")],
            measures: vec![
                MeasureDescriptor::new("m1", "M1"),
                MeasureDescriptor::new("m2", "M2"),
            ],
        };
        assert!(!targets.is_empty());
        assert_eq!(targets.len(), 3);
    }

    #[test]
    fn export_request_title_builder() {
        let bare = ExportRequest::new(ExportFormat::Csv);
        assert!(bare.title.is_none());
        assert_eq!(bare.format.extension(), "csv");

        let titled = ExportRequest::new(ExportFormat::Xlsx).with_title("Quarterly revenue");
        assert_eq!(titled.title.as_deref(), Some("Quarterly revenue"));
        assert_eq!(titled.format.extension(), "xlsx");
    }

    #[test]
    fn push_payload_default_is_bare() {
        let payload = PushPayload::default();
        assert!(payload.data_view.is_none());
        assert!(payload.drill_targets.is_empty());
    }
}

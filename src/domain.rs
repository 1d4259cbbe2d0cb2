//! Typed model for the assembled Lira configuration.

use serde::Serialize;
use serde_json::{Map, Value};

/// Request-body size cap Lira enforces; carried verbatim into the output.
pub const MAX_CONTENT_LENGTH: u32 = 10_000;

/// Workflow name of the 10x count adapter.
pub const TENX_WORKFLOW_NAME: &str = "Adapter10xCount";

/// Workflow name of the Smart-seq2 single-cell adapter.
pub const SS2_WORKFLOW_NAME: &str = "AdapterSmartSeq2SingleCell";

/// Base locations every WDL link is interpolated from.
///
/// Any string is accepted, including the empty string; prefixes are never
/// validated or normalized.
#[derive(Debug, Clone)]
pub struct PathPrefixes {
    /// Location of the adapter pipelines (submit.wdl and per-pipeline adapters).
    pub pipeline_tools: String,
    /// Location of the 10x count analysis pipeline.
    pub tenx: String,
    /// Location of the Smart-seq2 analysis pipeline.
    pub ss2: String,
}

/// Deployment environment document, validated once at load time.
#[derive(Debug, Clone)]
pub struct EnvConfig {
    /// Deployment environment name (dev, integration, staging, prod).
    pub env: String,
    /// Notification subscription bound to the 10x count adapter.
    ///
    /// Loaded from the `10x_subscription_id` key.
    pub tenx_subscription_id: String,
    /// Notification subscription bound to the Smart-seq2 adapter.
    pub ss2_subscription_id: String,
}

/// Opaque credentials document. Merged verbatim into the output.
pub type SecretsConfig = Map<String, Value>;

/// The assembled configuration document.
pub type OutputConfig = Map<String, Value>;

/// One adapter workflow entry in the output's `wdls` list.
#[derive(Debug, Clone, Serialize)]
pub struct WdlDescriptor {
    pub subscription_id: String,
    pub workflow_name: &'static str,
    /// Analysis WDL locations in inclusion order; the workflow engine
    /// resolves imports against this sequence, so order is meaningful.
    pub analysis_wdls: Vec<String>,
    pub wdl_link: String,
    pub wdl_default_inputs_link: String,
    pub options_link: String,
}

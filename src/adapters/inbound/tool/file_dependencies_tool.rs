use crate::application::dto::ReportRequest;
use crate::ports::inbound::DependencyReportPort;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Prefix of every message returned for a failed analysis
const ERROR_PREFIX: &str = "Error analyzing dependencies";

/// Arguments accepted by the file dependencies tool
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileDependenciesArgs {
    pub file_path: String,
}

/// ToolResponse - outcome of a single tool call
///
/// `Success` carries the envelope JSON text; callers parse it themselves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolResponse {
    Error { message: String },
    Success { text: String },
}

impl ToolResponse {
    pub fn is_error(&self) -> bool {
        matches!(self, ToolResponse::Error { .. })
    }

    /// Text shown to the caller: the envelope or the error message
    pub fn text(&self) -> &str {
        match self {
            ToolResponse::Error { message } => message,
            ToolResponse::Success { text } => text,
        }
    }

    /// Tool-call result content block
    pub fn to_content(&self) -> Value {
        serde_json::json!({
            "content": [{ "type": "text", "text": self.text() }],
            "isError": self.is_error()
        })
    }

    fn error(details: impl std::fmt::Display) -> Self {
        ToolResponse::Error {
            message: format!("{}: {}", ERROR_PREFIX, details),
        }
    }
}

/// FileDependenciesTool - inbound adapter turning tool calls into reports
///
/// Every failure, including malformed arguments, is returned as
/// [`ToolResponse::Error`]; a tool call never fails outright.
pub struct FileDependenciesTool<R> {
    port: R,
}

impl<R: DependencyReportPort> FileDependenciesTool<R> {
    pub fn new(port: R) -> Self {
        Self { port }
    }

    /// Handles a call with already-decoded arguments
    pub fn handle(&self, args: FileDependenciesArgs) -> ToolResponse {
        let request = match ReportRequest::new(args.file_path) {
            Ok(request) => request,
            Err(e) => return ToolResponse::error(e),
        };

        match self.port.analyze(request) {
            Ok(response) => ToolResponse::Success {
                text: response.envelope.to_json(),
            },
            Err(e) => {
                tracing::debug!("Dependency analysis failed: {:#}", e);
                ToolResponse::error(e)
            }
        }
    }

    /// Handles a call whose arguments are still raw JSON
    pub fn handle_json(&self, arguments: Value) -> ToolResponse {
        match serde_json::from_value::<FileDependenciesArgs>(arguments) {
            Ok(args) => self.handle(args),
            Err(e) => ToolResponse::error(format!("Invalid arguments: {}", e)),
        }
    }
}

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Name under which the dependency report tool is registered
pub const TOOL_NAME: &str = "get_file_dependencies";

/// ToolDefinition - advertised name, description and input schema of a tool
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolDefinition {
    pub name: String,
    pub description: String,
    #[serde(rename = "inputSchema")]
    pub input_schema: Value,
}

impl ToolDefinition {
    /// Definition of the file dependency report tool
    pub fn file_dependencies() -> Self {
        Self {
            name: TOOL_NAME.to_string(),
            description: "Analyze the forward dependencies of a file: every file it depends on, \
                          directly or transitively. Returns a JSON object with the dependency \
                          counts, a readable summary and the full XML dependency document."
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "file_path": {
                        "type": "string",
                        "description": "Path of the file to analyze, relative to the project root"
                    }
                },
                "required": ["file_path"]
            }),
        }
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|e| {
            json!({ "error": format!("Failed to serialize tool definition: {}", e) }).to_string()
        })
    }
}

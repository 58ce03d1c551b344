/// Tool-call adapter exposing the dependency report as a single tool
mod file_dependencies_tool;
mod tool_definition;

pub use file_dependencies_tool::{FileDependenciesArgs, FileDependenciesTool, ToolResponse};
pub use tool_definition::{ToolDefinition, TOOL_NAME};

//! Tool Registry - HTTP dispatch for all tools.

use std::sync::Arc;
use tracing::warn;

use crate::core::config::Config;

use super::definitions::{FabricSwaggerTool, ItemWorkflowTool};

/// Tool registry - dispatches HTTP tool calls by name.
pub struct ToolRegistry {
    config: Arc<Config>,
}

impl ToolRegistry {
    /// Create a new tool registry.
    pub fn new(config: Arc<Config>) -> Self {
        Self { config }
    }

    /// Dispatch an HTTP tool call to the appropriate handler.
    pub fn call_tool(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> Result<serde_json::Value, String> {
        match name {
            ItemWorkflowTool::NAME => ItemWorkflowTool::http_handler(arguments, self.config.clone()),
            FabricSwaggerTool::NAME => {
                FabricSwaggerTool::http_handler(arguments, self.config.clone())
            }
            _ => {
                warn!("Unknown tool requested: {}", name);
                Err(format!("Unknown tool: {}", name))
            }
        }
    }
}

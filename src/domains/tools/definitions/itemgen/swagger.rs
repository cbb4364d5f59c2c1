//! Fabric Swagger tool definition.
//!
//! Returns the Swagger definition of the Fabric artifact: endpoints,
//! request/response schemas and data models. The file is parsed and
//! re-serialized on every call, so malformed JSON is reported instead of
//! being passed through.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use std::sync::Arc;
use tracing::{info, instrument};

use super::common::document_result;
#[cfg(feature = "http")]
use super::common::http_params;
use crate::core::config::Config;
use crate::domains::documents::DocumentStore;

// ============================================================================
// Tool Parameters
// ============================================================================

/// The Swagger tool takes no arguments.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct FabricSwaggerParams {}

// ============================================================================
// Tool Definition
// ============================================================================

/// Swagger tool - serves the normalized API definition.
pub struct FabricSwaggerTool;

impl FabricSwaggerTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "getFabricSwagger";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Returns the Swagger definition of the Fabric artifact. This provides the complete API specification for Fabric items including endpoints, request/response schemas, and data models.";

    /// Execute the tool logic.
    #[instrument(skip_all)]
    pub fn execute(config: &Config) -> CallToolResult {
        let store = DocumentStore::new(&config.documents);
        info!("Swagger tool called, reading {}", store.schema_path());

        document_result(store.read_schema())
    }

    /// HTTP handler for this tool (for HTTP transport).
    #[cfg(feature = "http")]
    pub fn http_handler(
        arguments: serde_json::Value,
        config: Arc<Config>,
    ) -> Result<serde_json::Value, String> {
        let _params: FabricSwaggerParams = http_params(arguments)?;
        let result = Self::execute(&config);

        Ok(serde_json::json!({
            "content": result.content,
            "isError": result.is_error.unwrap_or(false)
        }))
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<FabricSwaggerParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Create a ToolRoute for STDIO transport.
    pub fn create_route<S>(config: Arc<Config>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), move |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone().unwrap_or_default();
            let config = config.clone();
            async move {
                let _params: FabricSwaggerParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(Self::execute(&config))
            }
            .boxed()
        })
    }
}

// ============================================================================
// Tests
// ============================================================================

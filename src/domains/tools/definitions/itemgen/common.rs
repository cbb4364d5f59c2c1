//! Helpers shared by the item generator tools.

use rmcp::model::{CallToolResult, Content};
use tracing::{info, warn};

use crate::domains::documents::DocumentError;

/// Flatten a document read into a tool result.
///
/// Successful reads become the result text. Failures are rendered as
/// markdown guidance and flagged with `is_error`, but still travel as a
/// normal result so the agent always gets readable text back.
pub fn document_result(result: Result<String, DocumentError>) -> CallToolResult {
    match result {
        Ok(content) => {
            info!("Returning {} bytes", content.len());
            CallToolResult::success(vec![Content::text(content)])
        }
        Err(e) => {
            warn!(kind = e.kind(), "{}", e);
            CallToolResult::error(vec![Content::text(e.to_guidance())])
        }
    }
}

/// Parse HTTP tool arguments the way rmcp does for stdio calls.
///
/// A missing or `null` value counts as no arguments; anything other than
/// a JSON object is rejected.
#[cfg(feature = "http")]
pub fn http_params<P: serde::de::DeserializeOwned>(arguments: serde_json::Value) -> Result<P, String> {
    let args = match arguments {
        serde_json::Value::Object(args) => args,
        serde_json::Value::Null => serde_json::Map::new(),
        other => return Err(format!("Invalid arguments: expected an object, got {}", other)),
    };

    serde_json::from_value(serde_json::Value::Object(args))
        .map_err(|e| format!("Invalid arguments: {}", e))
}

/// Extract the first text block of a tool result.
#[cfg(test)]
pub fn result_text(result: &CallToolResult) -> &str {
    match &result.content[0].raw {
        rmcp::model::RawContent::Text(text) => &text.text,
        _ => panic!("Expected text content"),
    }
}

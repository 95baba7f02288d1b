use crate::protocol::{ApiErrorCode, ApiErrorResponse, ToolResult};
use crate::store::CharacterStore;

/// Handle a `characters` tool call.
///
/// Returns every record in insertion order. The operation is total over any
/// roster state; only a serialization failure is surfaced, as an internal
/// error.
pub async fn handle(store: &CharacterStore) -> ToolResult {
    match serde_json::to_string(store.list()) {
        Ok(json) => ToolResult::text(json),
        Err(e) => {
            eprintln!("Serialization failed: {e}");
            ApiErrorResponse::canonical(ApiErrorCode::InternalError).into()
        }
    }
}

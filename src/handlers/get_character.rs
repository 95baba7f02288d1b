use crate::protocol::{ApiErrorCode, ApiErrorResponse, CharacterParams, ToolResult};
use crate::store::CharacterStore;

/// Handle a `character` lookup tool call.
///
/// A miss is not an error: the result text is JSON `null`. Only the mutation
/// tools treat an unknown id as a failure.
pub async fn handle(params: CharacterParams, store: &CharacterStore) -> ToolResult {
    match serde_json::to_string(&store.get(&params.id)) {
        Ok(json) => ToolResult::text(json),
        Err(e) => {
            eprintln!("Serialization failed: {e}");
            ApiErrorResponse::canonical(ApiErrorCode::InternalError).into()
        }
    }
}

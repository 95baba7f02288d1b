use crate::protocol::{ApiErrorCode, ApiErrorResponse, DeleteCharacterParams, ToolResult};
use crate::store::CharacterStore;

/// Handle a `deleteCharacter` tool call.
///
/// Removes the record and returns it. Deletion is permanent: a repeated
/// delete on the same id fails identically with `not_found`.
pub async fn handle(params: DeleteCharacterParams, store: &mut CharacterStore) -> ToolResult {
    match store.delete(&params.id) {
        Some(removed) => match serde_json::to_string(&removed) {
            Ok(json) => ToolResult::text(json),
            Err(e) => {
                eprintln!("Serialization failed: {e}");
                ApiErrorResponse::canonical(ApiErrorCode::InternalError).into()
            }
        },
        None => ApiErrorResponse::canonical(ApiErrorCode::NotFound).into(),
    }
}

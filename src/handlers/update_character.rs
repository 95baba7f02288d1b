use crate::protocol::{ApiErrorCode, ApiErrorResponse, ToolResult, UpdateCharacterParams};
use crate::store::CharacterStore;

/// Handle an `updateCharacter` tool call.
///
/// Supplied fields overwrite the stored record, except that a falsy value
/// (empty `name`, zero `age`) counts as omitted and is ignored. An unknown
/// id is the one domain failure, reported as `not_found`.
pub async fn handle(params: UpdateCharacterParams, store: &mut CharacterStore) -> ToolResult {
    match store.update(&params.id, params.name, params.age) {
        Some(updated) => match serde_json::to_string(&updated) {
            Ok(json) => ToolResult::text(json),
            Err(e) => {
                eprintln!("Serialization failed: {e}");
                ApiErrorResponse::canonical(ApiErrorCode::InternalError).into()
            }
        },
        None => ApiErrorResponse::canonical(ApiErrorCode::NotFound).into(),
    }
}

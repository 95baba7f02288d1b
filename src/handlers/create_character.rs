use crate::protocol::{ApiErrorCode, ApiErrorResponse, CreateCharacterParams, ToolResult};
use crate::store::CharacterStore;

/// Handle a `createCharacter` tool call.
///
/// Always succeeds: the store accepts any name, including the empty string,
/// and derives the new id from the roster size at insertion.
pub async fn handle(params: CreateCharacterParams, store: &mut CharacterStore) -> ToolResult {
    let created = store.create(params.name, params.age);

    match serde_json::to_string(&created) {
        Ok(json) => ToolResult::text(json),
        Err(e) => {
            eprintln!("Serialization failed: {e}");
            ApiErrorResponse::canonical(ApiErrorCode::InternalError).into()
        }
    }
}

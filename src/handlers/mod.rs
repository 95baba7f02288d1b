pub mod create_character;
pub mod delete_character;
pub mod get_character;
pub mod health;
pub mod list_characters;
pub mod update_character;

use crate::protocol::{
    CharacterParams, CreateCharacterParams, DeleteCharacterParams, JsonRpcError, JsonRpcRequest,
    JsonRpcResponse, ToolCallParams, ToolResult, UpdateCharacterParams,
};
use crate::store::CharacterStore;

/// Dispatch a JSON-RPC request to the appropriate handler.
///
/// Returns `None` for notifications (no response required).
pub async fn dispatch(req: &JsonRpcRequest, store: &mut CharacterStore) -> Option<JsonRpcResponse> {
    match req.method.as_str() {
        "initialize" => {
            let result = serde_json::json!({
                "protocolVersion": "2024-11-05",
                "capabilities": {
                    "tools": {}
                },
                "serverInfo": {
                    "name": "mcp-character-server",
                    "version": env!("CARGO_PKG_VERSION")
                }
            });
            Some(JsonRpcResponse::success(req.id.clone(), result))
        }

        "notifications/initialized" => None,

        "ping" => Some(JsonRpcResponse::success(req.id.clone(), serde_json::json!({}))),

        "tools/list" => {
            let result = serde_json::json!({
                "tools": [
                    {
                        "name": "characters",
                        "description": "List every character in the roster, in insertion order",
                        "inputSchema": {
                            "type": "object",
                            "properties": {}
                        }
                    },
                    {
                        "name": "character",
                        "description": "Look up a single character by id; a miss returns null",
                        "inputSchema": {
                            "type": "object",
                            "required": ["id"],
                            "properties": {
                                "id": {
                                    "type": "string",
                                    "description": "Character id"
                                }
                            }
                        }
                    },
                    {
                        "name": "createCharacter",
                        "description": "Create a character and assign it a fresh id",
                        "inputSchema": {
                            "type": "object",
                            "required": ["name"],
                            "properties": {
                                "name": {
                                    "type": "string",
                                    "description": "Character name"
                                },
                                "age": {
                                    "type": "integer",
                                    "description": "Character age (optional)"
                                }
                            }
                        }
                    },
                    {
                        "name": "updateCharacter",
                        "description": "Update the name and/or age of an existing character",
                        "inputSchema": {
                            "type": "object",
                            "required": ["id"],
                            "properties": {
                                "id": {
                                    "type": "string",
                                    "description": "Character id"
                                },
                                "name": {
                                    "type": "string",
                                    "description": "Replacement name (optional)"
                                },
                                "age": {
                                    "type": "integer",
                                    "description": "Replacement age (optional)"
                                }
                            }
                        }
                    },
                    {
                        "name": "deleteCharacter",
                        "description": "Remove a character from the roster and return it",
                        "inputSchema": {
                            "type": "object",
                            "required": ["id"],
                            "properties": {
                                "id": {
                                    "type": "string",
                                    "description": "Character id"
                                }
                            }
                        }
                    }
                ]
            });
            Some(JsonRpcResponse::success(req.id.clone(), result))
        }

        "tools/call" => {
            let params: ToolCallParams = match &req.params {
                Some(v) => match serde_json::from_value(v.clone()) {
                    Ok(p) => p,
                    Err(e) => {
                        return Some(JsonRpcResponse::error(
                            req.id.clone(),
                            JsonRpcError::invalid_params(format!(
                                "Invalid tools/call params: {e}"
                            )),
                        ));
                    }
                },
                None => {
                    return Some(JsonRpcResponse::error(
                        req.id.clone(),
                        JsonRpcError::invalid_params("Missing params for tools/call"),
                    ));
                }
            };

            let tool_result = dispatch_tool_call(&params, store).await;
            let result_json = serde_json::to_value(&tool_result)
                .expect("ToolResult must serialize to JSON Value");
            Some(JsonRpcResponse::success(req.id.clone(), result_json))
        }

        _ => Some(JsonRpcResponse::error(
            req.id.clone(),
            JsonRpcError::method_not_found(&req.method),
        )),
    }
}

async fn dispatch_tool_call(params: &ToolCallParams, store: &mut CharacterStore) -> ToolResult {
    match params.name.as_str() {
        "characters" => list_characters::handle(store).await,

        "character" => {
            let lookup_params: CharacterParams = match &params.arguments {
                Some(v) => match serde_json::from_value(v.clone()) {
                    Ok(p) => p,
                    Err(e) => {
                        return ToolResult::error(format!("Invalid arguments for character: {e}"));
                    }
                },
                None => {
                    return ToolResult::error("Missing arguments for character");
                }
            };
            get_character::handle(lookup_params, store).await
        }

        "createCharacter" => {
            let create_params: CreateCharacterParams = match &params.arguments {
                Some(v) => match serde_json::from_value(v.clone()) {
                    Ok(p) => p,
                    Err(e) => {
                        return ToolResult::error(format!(
                            "Invalid arguments for createCharacter: {e}"
                        ));
                    }
                },
                None => {
                    return ToolResult::error("Missing arguments for createCharacter");
                }
            };
            create_character::handle(create_params, store).await
        }

        "updateCharacter" => {
            let update_params: UpdateCharacterParams = match &params.arguments {
                Some(v) => match serde_json::from_value(v.clone()) {
                    Ok(p) => p,
                    Err(e) => {
                        return ToolResult::error(format!(
                            "Invalid arguments for updateCharacter: {e}"
                        ));
                    }
                },
                None => {
                    return ToolResult::error("Missing arguments for updateCharacter");
                }
            };
            update_character::handle(update_params, store).await
        }

        "deleteCharacter" => {
            let delete_params: DeleteCharacterParams = match &params.arguments {
                Some(v) => match serde_json::from_value(v.clone()) {
                    Ok(p) => p,
                    Err(e) => {
                        return ToolResult::error(format!(
                            "Invalid arguments for deleteCharacter: {e}"
                        ));
                    }
                },
                None => {
                    return ToolResult::error("Missing arguments for deleteCharacter");
                }
            };
            delete_character::handle(delete_params, store).await
        }

        "health" => health::handle().await,

        _ => ToolResult::error(format!("Unknown tool: {}", params.name)),
    }
}

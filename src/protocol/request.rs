use serde::{Deserialize, Serialize};

/// JSON-RPC 2.0 ID, which may be a number or a string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RpcId {
    Number(i64),
    Str(String),
}

/// JSON-RPC 2.0 request envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct JsonRpcRequest {
    pub jsonrpc: String,
    pub id: Option<RpcId>,
    pub method: String,
    pub params: Option<serde_json::Value>,
}

/// Parameters for the `character` lookup tool.
#[derive(Debug, Clone, Deserialize)]
pub struct CharacterParams {
    pub id: String,
}

/// Parameters for the `createCharacter` tool.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCharacterParams {
    pub name: String,
    pub age: Option<i64>,
}

/// Parameters for the `updateCharacter` tool.
///
/// `name` and `age` are independent partial updates; an absent field leaves
/// the stored value in place.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateCharacterParams {
    pub id: String,
    pub name: Option<String>,
    pub age: Option<i64>,
}

/// Parameters for the `deleteCharacter` tool.
#[derive(Debug, Clone, Deserialize)]
pub struct DeleteCharacterParams {
    pub id: String,
}

/// MCP `initialize` params.
#[derive(Debug, Clone, Deserialize)]
pub struct InitializeParams {
    #[serde(rename = "protocolVersion")]
    pub protocol_version: Option<String>,
    #[serde(rename = "clientInfo")]
    pub client_info: Option<ClientInfo>,
}

/// Client information sent during `initialize`.
#[derive(Debug, Clone, Deserialize)]
pub struct ClientInfo {
    pub name: Option<String>,
    pub version: Option<String>,
}

/// Parameters for `tools/call`.
#[derive(Debug, Clone, Deserialize)]
pub struct ToolCallParams {
    pub name: String,
    pub arguments: Option<serde_json::Value>,
}

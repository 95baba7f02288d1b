pub mod request;
pub mod response;

pub use request::{
    CharacterParams, CreateCharacterParams, DeleteCharacterParams, InitializeParams,
    JsonRpcRequest, RpcId, ToolCallParams, UpdateCharacterParams,
};
pub use response::{
    ApiError, ApiErrorCode, ApiErrorResponse, JsonRpcError, JsonRpcResponse, ToolResult,
    ToolResultContent,
};

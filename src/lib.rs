//! MCP server for an in-memory character roster.
//!
//! Exposes `characters`, `character`, `createCharacter`, `updateCharacter`,
//! and `deleteCharacter` tools over JSON-RPC 2.0 stdio transport, compatible
//! with any MCP-aware AI agent.

pub mod config;
pub mod handlers;
pub mod protocol;
pub mod server;
pub mod store;

pub mod schema;

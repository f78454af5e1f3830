/// MCP protocol implementation
///
/// This module handles the Model Context Protocol communication,
/// including JSON-RPC parsing and routing of the habit tools.

pub mod protocol;
pub mod server;

// Re-export main types
pub use server::McpServer;

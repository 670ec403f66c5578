//! MCP server implementation for form intake.
//!
//! This module is the interface-event layer: it receives form submissions as
//! MCP tool calls over stdio and hands them to the intake service.

pub mod handlers;

pub use handlers::IntakeMcpServer;

use anyhow::Result;
use rmcp::transport::io::stdio;
use rmcp::ServiceExt;

/// Run the intake MCP server with stdio transport.
///
/// Communicates via stdin/stdout using the MCP protocol and returns when the
/// client disconnects.
pub async fn run_server(server: IntakeMcpServer) -> Result<()> {
    let service = server.serve(stdio()).await?;

    service.waiting().await?;

    Ok(())
}

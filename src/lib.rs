//! Payments MCP Server Library
//!
//! This crate provides a Model Context Protocol (MCP) server over an
//! in-memory payment ledger, with a modular architecture organized by
//! domains.
//!
//! # Architecture
//!
//! The server is organized into the following modules:
//!
//! - **core**: Core infrastructure including configuration, error handling, and the main server
//! - **domains**: Business logic organized by bounded contexts
//!   - **payments**: The payment ledger, currency rate table, and filters
//!   - **tools**: MCP tools that can be executed by clients
//!   - **resources**: Data resources that can be read by clients
//!   - **prompts**: Synthesized report exchanges
//!
//! # Example
//!
//! ```rust,no_run
//! use payments_mcp_server::{core::Config, core::McpServer};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let server = McpServer::new(config);
//!     // Start the server...
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};

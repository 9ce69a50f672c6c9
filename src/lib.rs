//! MCP gateway for a markdown content site.
//!
//! Exposes seven read-only content tools (`list_posts`, `get_post`,
//! `list_pages`, `get_page`, `get_homepage`, `search_content`, `export_all`)
//! over JSON-RPC 2.0 on a single HTTP route, backed by the site's content API.
//! Authentication is optional: a missing bearer token is allowed through,
//! only a wrong one is rejected.

pub mod auth;
pub mod backend;
pub mod config;
pub mod error;
pub mod handlers;
pub mod protocol;
pub mod registry;
pub mod server;

pub mod schema;

/// Name reported in `serverInfo` and the `X-MCP-Server` header.
pub const SERVER_NAME: &str = env!("CARGO_PKG_NAME");
/// Version reported in `serverInfo` and the `X-MCP-Version` header.
pub const SERVER_VERSION: &str = env!("CARGO_PKG_VERSION");

//! Tools domain module.
//!
//! Tools are the operations MCP clients can call. This server exposes two
//! zero-argument, read-only tools backed by the documents domain.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual tool implementations (one file per tool)
//! - `router.rs` - Dynamic ToolRouter builder for the rmcp transports
//! - `registry.rs` - HTTP dispatch (`http` feature)
//!
//! ## Adding a New Tool
//!
//! 1. Create a new file in `definitions/`
//! 2. Define params, execute(), and http_handler()
//! 3. Export in `definitions/mod.rs`
//! 4. Add route in `router.rs` using `with_route()`
//! 5. Register in `registry.rs` for HTTP support

pub mod definitions;
#[cfg(feature = "http")]
mod registry;
pub mod router;

#[cfg(feature = "http")]
pub use registry::ToolRegistry;
pub use router::build_tool_router;

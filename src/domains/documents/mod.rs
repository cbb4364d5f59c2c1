//! Documents domain module.
//!
//! The server hands out two externally authored, read-only files:
//!
//! - the item generator **workflow instructions** (markdown, served verbatim)
//! - the Fabric **Swagger definition** (JSON, validated and re-indented)
//!
//! Nothing is cached. Every read goes back to disk, so edits to either file
//! are visible on the next tool call.
//!
//! ## Architecture
//!
//! - `info.rs` - static description of each served document
//! - `store.rs` - path resolution and the actual reads
//! - `error.rs` - failure taxonomy and the guidance text returned to agents

mod error;
mod info;
mod store;

pub use error::DocumentError;
pub use info::{DocumentInfo, SCHEMA_DOCUMENT, WORKFLOW_DOCUMENT};
pub use store::DocumentStore;

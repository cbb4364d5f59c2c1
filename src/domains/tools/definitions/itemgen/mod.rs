pub mod common;
pub mod swagger;
pub mod workflow;

pub use swagger::{FabricSwaggerParams, FabricSwaggerTool};
pub use workflow::{ItemWorkflowParams, ItemWorkflowTool};

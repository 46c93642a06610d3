//! Tools for the shop agent
//!
//! Exposes the two lookup operations as schema-described tools so the agent
//! loop can hand them to a tool-calling LLM. Both accept a single
//! natural-language string and return the same `{products, summary}` shape,
//! which is what lets the agent treat them interchangeably.

pub mod lookup;
pub mod mcp;
pub mod registry;

pub use lookup::{create_default_registry, SemanticLookupTool, StructuredLookupTool};
pub use mcp::{Tool, ToolError, ToolSchema};
pub use registry::ToolRegistry;

impl From<ToolError> for shop_agent_core::Error {
    fn from(err: ToolError) -> Self {
        shop_agent_core::Error::Tool(err.to_string())
    }
}

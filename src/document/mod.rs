//! View documents and traversal paths.
//!
//! - [`DocumentNode`] - A decoded view.json tree
//! - [`PathContext`] - The component and field lineage during traversal

pub mod node;
pub mod path;

pub use node::{parse_document, DocumentNode, Scalar};
pub use path::{join_dotted, PathContext, ROOT_COMPONENT, VIEW_LABEL};

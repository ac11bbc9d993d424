//! Domain layer: RTF nodes and the collections that hold them
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod collection;
pub mod cursor;
pub mod descriptor;
pub mod error;
pub mod node;

pub use collection::{Iter, NodeCollection};
pub use cursor::{CursorState, NodeCursor};
pub use descriptor::{parse_descriptor, parse_descriptors};
pub use error::{CollectionError, CollectionResult, DescriptorError};
pub use node::{NodeHandle, RtfNodeRef, RtfNodeType, RtfTreeNode};

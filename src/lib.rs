//! Ordered collections of RTF tree nodes.
//!
//! [`NodeCollection`] stores shared node handles in insertion order and offers
//! positional access, identity and key search, bulk append/removal, and two
//! traversal styles: plain iterators and the move-next/reset [`NodeCursor`].
//!
//! ```
//! use rtfnodes::{NodeCollection, RtfTreeNode};
//!
//! let mut nodes = NodeCollection::new();
//! nodes.add(RtfTreeNode::keyword("b", None).into_ref());
//! nodes.add(RtfTreeNode::text("bold").into_ref());
//! assert_eq!(nodes.index_of_key("bold"), Some(1));
//! ```

pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod tree_view;
pub mod util;

pub use domain::{
    CollectionError, CollectionResult, CursorState, NodeCollection, NodeCursor, NodeHandle, RtfNodeRef,
    RtfNodeType, RtfTreeNode,
};

//! RTF tree nodes as seen by node collections.
//!
//! The collection only needs two things from a node: an identity that survives
//! mutation of the node's content, and a key to search by. Both are expressed
//! through [`NodeHandle`].

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// Kind of an RTF tree node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RtfNodeType {
    /// Document root
    Root,
    /// Control word, e.g. `\fs24`
    Keyword,
    /// Control symbol, e.g. `\'`
    Control,
    /// Plain text fragment
    Text,
    /// `{ ... }` group
    Group,
    #[default]
    None,
}

impl fmt::Display for RtfNodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RtfNodeType::Root => "root",
            RtfNodeType::Keyword => "keyword",
            RtfNodeType::Control => "control",
            RtfNodeType::Text => "text",
            RtfNodeType::Group => "group",
            RtfNodeType::None => "none",
        };
        f.write_str(name)
    }
}

/// Data payload of an RTF tree node.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RtfTreeNode {
    pub node_type: RtfNodeType,
    /// Lookup key: the control word for keywords, the text for text nodes,
    /// empty for groups and the root.
    pub key: String,
    pub has_parameter: bool,
    pub parameter: i32,
}

impl RtfTreeNode {
    pub fn new(node_type: RtfNodeType, key: impl Into<String>, has_parameter: bool, parameter: i32) -> Self {
        Self {
            node_type,
            key: key.into(),
            has_parameter,
            parameter,
        }
    }

    pub fn root() -> Self {
        Self::new(RtfNodeType::Root, "", false, 0)
    }

    pub fn group() -> Self {
        Self::new(RtfNodeType::Group, "", false, 0)
    }

    pub fn keyword(key: impl Into<String>, parameter: Option<i32>) -> Self {
        Self::new(
            RtfNodeType::Keyword,
            key,
            parameter.is_some(),
            parameter.unwrap_or_default(),
        )
    }

    pub fn control(key: impl Into<String>, parameter: Option<i32>) -> Self {
        Self::new(
            RtfNodeType::Control,
            key,
            parameter.is_some(),
            parameter.unwrap_or_default(),
        )
    }

    pub fn text(text: impl Into<String>) -> Self {
        Self::new(RtfNodeType::Text, text, false, 0)
    }

    /// Wraps the node into a shared handle.
    pub fn into_ref(self) -> RtfNodeRef {
        Rc::new(RefCell::new(self))
    }
}

impl fmt::Display for RtfTreeNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.node_type {
            RtfNodeType::Keyword | RtfNodeType::Control if self.has_parameter => {
                write!(f, "{} {}{}", self.node_type, self.key, self.parameter)
            }
            RtfNodeType::Keyword | RtfNodeType::Control => write!(f, "{} {}", self.node_type, self.key),
            RtfNodeType::Text => write!(f, "text {:?}", self.key),
            _ => write!(f, "{}", self.node_type),
        }
    }
}

/// Shared handle to a node; the document tree and any number of collections
/// may hold the same node.
pub type RtfNodeRef = Rc<RefCell<RtfTreeNode>>;

/// Capabilities a node collection requires from its element type.
pub trait NodeHandle: Clone {
    /// Identity comparison. Two handles are the same node even when their
    /// contents differ from the moment of insertion.
    fn same_node(&self, other: &Self) -> bool;

    /// Whether the node's key equals `key`.
    fn key_matches(&self, key: &str) -> bool;
}

impl NodeHandle for RtfNodeRef {
    fn same_node(&self, other: &Self) -> bool {
        Rc::ptr_eq(self, other)
    }

    fn key_matches(&self, key: &str) -> bool {
        self.borrow().key == key
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_cloned_handle_when_compared_then_same_node() {
        let node = RtfTreeNode::keyword("b", None).into_ref();
        let alias = Rc::clone(&node);
        assert!(node.same_node(&alias));
    }

    #[test]
    fn given_equal_content_when_compared_then_distinct_nodes() {
        let a = RtfTreeNode::keyword("b", None).into_ref();
        let b = RtfTreeNode::keyword("b", None).into_ref();
        assert!(!a.same_node(&b));
        assert!(a.key_matches("b") && b.key_matches("b"));
    }

    #[test]
    fn given_mutated_key_when_matching_then_uses_current_key() {
        let node = RtfTreeNode::keyword("b", None).into_ref();
        node.borrow_mut().key = "i".into();
        assert!(node.key_matches("i"));
        assert!(!node.key_matches("b"));
    }

    #[test]
    fn given_keyword_with_parameter_when_displayed_then_appends_parameter() {
        assert_eq!(RtfTreeNode::keyword("fs", Some(24)).to_string(), "keyword fs24");
        assert_eq!(RtfTreeNode::text("Hi").to_string(), "text \"Hi\"");
        assert_eq!(RtfTreeNode::group().to_string(), "group");
    }
}

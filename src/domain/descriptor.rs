//! Textual node descriptors: `kind[:key[:param]]`.
//!
//! Examples: `keyword:fs:24`, `control:'`, `text:Hello, world`, `group`.
//! Text takes everything after the first colon verbatim.

use tracing::instrument;

use crate::domain::error::DescriptorError;
use crate::domain::node::{RtfNodeType, RtfTreeNode};

#[instrument(level = "trace")]
pub fn parse_descriptor(descriptor: &str) -> Result<RtfTreeNode, DescriptorError> {
    if descriptor.trim().is_empty() {
        return Err(DescriptorError::Empty);
    }
    let (kind, rest) = match descriptor.split_once(':') {
        Some((kind, rest)) => (kind, Some(rest)),
        None => (descriptor, None),
    };

    match parse_kind(kind, descriptor)? {
        RtfNodeType::Text => rest
            .map(RtfTreeNode::text)
            .ok_or_else(|| DescriptorError::MissingKey(descriptor.to_string())),
        node_type @ (RtfNodeType::Root | RtfNodeType::Group) => match rest {
            Some(_) => Err(DescriptorError::Trailing(descriptor.to_string())),
            None => Ok(RtfTreeNode::new(node_type, "", false, 0)),
        },
        node_type => {
            let rest = rest.ok_or_else(|| DescriptorError::MissingKey(descriptor.to_string()))?;
            let (key, parameter) = match rest.split_once(':') {
                Some((key, param)) => (key, Some(parse_parameter(param, descriptor)?)),
                None => (rest, None),
            };
            if key.is_empty() {
                return Err(DescriptorError::MissingKey(descriptor.to_string()));
            }
            Ok(RtfTreeNode::new(
                node_type,
                key,
                parameter.is_some(),
                parameter.unwrap_or_default(),
            ))
        }
    }
}

/// Parses every descriptor, stopping at the first invalid one.
pub fn parse_descriptors<S: AsRef<str>>(descriptors: &[S]) -> Result<Vec<RtfTreeNode>, DescriptorError> {
    descriptors
        .iter()
        .map(|d| parse_descriptor(d.as_ref()))
        .collect()
}

fn parse_kind(kind: &str, descriptor: &str) -> Result<RtfNodeType, DescriptorError> {
    match kind.trim().to_ascii_lowercase().as_str() {
        "root" => Ok(RtfNodeType::Root),
        "keyword" | "kw" => Ok(RtfNodeType::Keyword),
        "control" | "ctrl" => Ok(RtfNodeType::Control),
        "text" => Ok(RtfNodeType::Text),
        "group" => Ok(RtfNodeType::Group),
        _ => Err(DescriptorError::UnknownKind {
            kind: kind.to_string(),
            descriptor: descriptor.to_string(),
        }),
    }
}

fn parse_parameter(param: &str, descriptor: &str) -> Result<i32, DescriptorError> {
    // extra colons land here too
    param.parse().map_err(|_| DescriptorError::InvalidParameter {
        parameter: param.to_string(),
        descriptor: descriptor.to_string(),
    })
}

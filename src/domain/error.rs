//! Domain-level errors (no external dependencies)

use thiserror::Error;

use crate::domain::cursor::CursorState;

/// Errors raised by node collections and their cursors.
/// All of them are caller errors; none are transient.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CollectionError {
    #[error("index {index} out of range for collection of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("range {index}..{index}+{count} out of range for collection of length {len}")]
    RangeOutOfRange { index: usize, count: usize, len: usize },

    #[error("cursor has no current node (state: {0})")]
    InvalidIteratorState(CursorState),
}

impl CollectionError {
    /// Both positional variants.
    pub fn is_out_of_range(&self) -> bool {
        matches!(
            self,
            CollectionError::IndexOutOfRange { .. } | CollectionError::RangeOutOfRange { .. }
        )
    }
}

/// Errors from parsing textual node descriptors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DescriptorError {
    #[error("empty node descriptor")]
    Empty,

    #[error("unknown node kind '{kind}' in descriptor: {descriptor}")]
    UnknownKind { kind: String, descriptor: String },

    #[error("missing key in descriptor: {0}")]
    MissingKey(String),

    #[error("invalid parameter '{parameter}' in descriptor: {descriptor}")]
    InvalidParameter { parameter: String, descriptor: String },

    #[error("unexpected trailing content in descriptor: {0}")]
    Trailing(String),
}

pub type CollectionResult<T> = Result<T, CollectionError>;

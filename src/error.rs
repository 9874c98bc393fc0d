//! Errors raised while compiling field definitions.

use crate::ast::BaseType;

/// Why a definition (or a run of definitions) was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ErrorKind {
    #[error("definition does not match the array, bitfield or scalar form")]
    MalformedDefinition,
    #[error("unknown type token `{0}`")]
    UnknownTypeToken(String),
    #[error("type `{0}` cannot back a bitfield")]
    UnsupportedBitfieldType(String),
    #[error("bit width {bits} out of range for {backing:?} (1..={max})")]
    InvalidBitWidth {
        backing: BaseType,
        bits: u64,
        max: u32,
    },
    #[error("array count {0} must be at least 1")]
    InvalidArrayCount(u64),
    #[error("bitfield run ended after {members} of {capacity} members")]
    UnterminatedBitfieldRun { members: usize, capacity: u32 },
    #[error("bitfield run backed by {expected:?} continues with {found:?}")]
    InconsistentBitfieldBackingType { expected: BaseType, found: BaseType },
}

/// Grouping failure, pointing at the definition that caused it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind} (definition #{index})")]
pub struct GroupError {
    pub index: usize,
    pub kind: ErrorKind,
}

/// Compilation failure of one record type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{record}: `{definition}`: {kind}")]
pub struct CompileError {
    pub record: String,
    /// Position of `definition` in the record's definition list.
    pub index: usize,
    /// The offending raw definition, verbatim.
    pub definition: String,
    pub kind: ErrorKind,
}

impl CompileError {
    pub fn new(record: &str, index: usize, definition: &str, kind: ErrorKind) -> Self {
        CompileError {
            record: record.to_string(),
            index,
            definition: definition.to_string(),
            kind,
        }
    }
}

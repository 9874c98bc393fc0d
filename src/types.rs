//! Source type tokens and the numeric types they map to.

use crate::ast::BaseType;

/// Every type token the definition language knows. Case-sensitive.
pub const TYPE_TOKENS: &[(&str, BaseType)] = &[
    ("s8", BaseType::I8),
    ("u8", BaseType::U8),
    ("s16", BaseType::I16),
    ("u16", BaseType::U16),
    ("s32", BaseType::I32),
    ("u32", BaseType::U32),
    ("s64", BaseType::I64),
    ("u64", BaseType::U64),
    ("f32", BaseType::Float),
    // string element types
    ("fixstr", BaseType::U8),
    ("fixstrW", BaseType::U16),
    // pad byte
    ("dummy8", BaseType::U8),
];

/// Resolve a type token. Unknown tokens yield `None`.
pub fn map_type(token: &str) -> Option<BaseType> {
    TYPE_TOKENS
        .iter()
        .find(|(t, _)| *t == token)
        .map(|&(_, ty)| ty)
}


//! # fieldlayout — Field-Definition DSL and Layout Compiler
//!
//! Compiles the field definitions of fixed-size binary records into a typed
//! layout model that code generators can turn into struct declarations.
//!
//! ## Definition language
//!
//! One definition per field, in declaration order:
//!
//! - Scalar: `u16 maxHp`
//! - Array: `dummy8 pad[3]`
//! - Bitfield member: `u8 isEnabled:1`
//!
//! Type tokens: `s8`, `u8`, `s16`, `u16`, `s32`, `u32`, `s64`, `u64`, `f32`,
//! `fixstr`, `fixstrW`, `dummy8`.
//!
//! ## Pipeline
//!
//! - **Parse** each definition ([`parse_definition`])
//! - **Group** consecutive bitfield members into packed fields ([`group_bitfields`]).
//!   A run closes once its member count reaches the backing type's bit width.
//! - **Disambiguate** colliding names, at top level and inside each packed field ([`disambiguate`])
//! - **Assemble** one [`Layout`] per record ([`compile`], [`compile_all`])
//!
//! ## Example
//!
//! ```
//! let layout = fieldlayout::compile("Foo", &["u8 a", "u16 b[2]", "f32 c"]).unwrap();
//! assert_eq!(layout.members.len(), 3);
//! ```
//!
//! Loading definition files ([`catalog`]), row-name tables ([`names`]) and
//! rendering Rust source ([`render`]) sit outside the compiler itself.

pub mod ast;
pub mod catalog;
pub mod dedup;
pub mod error;
pub mod group;
pub mod layout;
pub mod names;
pub mod parser;
pub mod render;
pub mod types;

pub use ast::{BaseType, Field, FieldKind, Layout, Member, PackedField, RecordDefinitions};
pub use dedup::{disambiguate, normalize};
pub use error::{CompileError, ErrorKind, GroupError};
pub use group::group_bitfields;
pub use layout::{compile, compile_all};
pub use parser::parse_definition;
pub use types::map_type;

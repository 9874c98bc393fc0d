//! Compiled layout model for the field-definition DSL.

use serde::Serialize;

/// Numeric type a source type token resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BaseType {
    U8,
    U16,
    U32,
    U64,
    I8,
    I16,
    I32,
    I64,
    Float,
}

impl BaseType {
    /// Total bit width of integer types. `None` for `Float`, which cannot back a bitfield.
    pub fn bit_width(self) -> Option<u32> {
        match self {
            BaseType::U8 | BaseType::I8 => Some(8),
            BaseType::U16 | BaseType::I16 => Some(16),
            BaseType::U32 | BaseType::I32 => Some(32),
            BaseType::U64 | BaseType::I64 => Some(64),
            BaseType::Float => None,
        }
    }

    /// Size in bytes.
    pub fn size(self) -> usize {
        match self {
            BaseType::U8 | BaseType::I8 => 1,
            BaseType::U16 | BaseType::I16 => 2,
            BaseType::U32 | BaseType::I32 | BaseType::Float => 4,
            BaseType::U64 | BaseType::I64 => 8,
        }
    }
}

/// What a single parsed definition describes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FieldKind {
    Scalar { ty: BaseType },
    Array { element: BaseType, count: usize },
    /// One member of a bitfield run; `bits` is the declared width.
    BitfieldMember { backing: BaseType, bits: u32 },
}

/// One parsed definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Field {
    pub name: String,
    #[serde(flatten)]
    pub kind: FieldKind,
}

impl Field {
    pub fn is_bitfield_member(&self) -> bool {
        matches!(self.kind, FieldKind::BitfieldMember { .. })
    }
}

/// A closed run of bitfield members sharing one backing type.
///
/// The position of a member in `members` is its bit index in the backing value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PackedField {
    pub name: String,
    pub ordinal: usize,
    pub backing: BaseType,
    pub members: Vec<Field>,
}

impl PackedField {
    pub fn new(ordinal: usize, backing: BaseType, members: Vec<Field>) -> Self {
        PackedField {
            name: format!("bitfield{}", ordinal),
            ordinal,
            backing,
            members,
        }
    }

    /// Members paired with their bit index.
    pub fn bits(&self) -> impl Iterator<Item = (usize, &Field)> {
        self.members.iter().enumerate()
    }
}

/// Top-level member of a layout: a plain field or a packed bitfield.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "member", rename_all = "snake_case")]
pub enum Member {
    Field(Field),
    Packed(PackedField),
}

impl Member {
    pub fn name(&self) -> &str {
        match self {
            Member::Field(f) => &f.name,
            Member::Packed(p) => &p.name,
        }
    }

    pub fn as_field(&self) -> Option<&Field> {
        match self {
            Member::Field(f) => Some(f),
            Member::Packed(_) => None,
        }
    }

    pub fn as_packed(&self) -> Option<&PackedField> {
        match self {
            Member::Packed(p) => Some(p),
            Member::Field(_) => None,
        }
    }
}

/// Compiled description of one record type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Layout {
    pub record_name: String,
    pub members: Vec<Member>,
}

impl Layout {
    pub fn get_member(&self, name: &str) -> Option<&Member> {
        self.members.iter().find(|m| m.name() == name)
    }

    pub fn packed_fields(&self) -> impl Iterator<Item = &PackedField> {
        self.members.iter().filter_map(Member::as_packed)
    }
}

/// Raw input for one record type, as handed over by a catalog provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordDefinitions {
    pub name: String,
    pub definitions: Vec<String>,
}

impl RecordDefinitions {
    pub fn new<N, I, S>(name: N, definitions: I) -> Self
    where
        N: Into<String>,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        RecordDefinitions {
            name: name.into(),
            definitions: definitions.into_iter().map(Into::into).collect(),
        }
    }
}

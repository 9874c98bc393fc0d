//! Render compiled layouts as Rust struct declarations.
//!
//! Output is meant to be written to a generated source file that brings
//! `ParamStruct` and the `bitflag` attribute into scope.

use crate::ast::{BaseType, Field, FieldKind, Layout, Member, PackedField};
use crate::dedup::normalize;

const HEADER: &str = "\
// **********************************
// *** AUTOGENERATED, DO NOT EDIT ***
// **********************************
";

pub fn rust_type(ty: BaseType) -> &'static str {
    match ty {
        BaseType::U8 => "u8",
        BaseType::U16 => "u16",
        BaseType::U32 => "u32",
        BaseType::U64 => "u64",
        BaseType::I8 => "i8",
        BaseType::I16 => "i16",
        BaseType::I32 => "i32",
        BaseType::I64 => "i64",
        BaseType::Float => "f32",
    }
}

/// Make a name usable as an identifier: digit-first names get a `field` prefix, `type` becomes `ty`.
pub fn fix_name(name: &str) -> String {
    if name.starts_with(|c: char| c.is_ascii_digit()) {
        return format!("field{}", name);
    }
    if name == "type" {
        return "ty".to_string();
    }
    name.to_string()
}

/// Struct field identifier: snake-cased, then fixed up with [`fix_name`].
pub fn field_ident(name: &str) -> String {
    fix_name(&normalize(name))
}

fn field_type(field: &Field) -> String {
    match field.kind {
        FieldKind::Scalar { ty } => rust_type(ty).to_string(),
        FieldKind::Array { element, count } => format!("[{}; {}]", rust_type(element), count),
        FieldKind::BitfieldMember { backing, .. } => rust_type(backing).to_string(),
    }
}

/// Bitflag attributes keep the member's own name; only the backing field is snake-cased.
fn write_packed(out: &mut String, packed: &PackedField) {
    for (bit, member) in packed.bits() {
        out.push_str(&format!("    #[bitflag({}, {})]\n", fix_name(&member.name), bit));
    }
    out.push_str(&format!(
        "    pub {}: {},\n",
        field_ident(&packed.name),
        rust_type(packed.backing)
    ));
}

/// Render one layout as a `#[repr(C)]` struct.
pub fn render_struct(layout: &Layout) -> String {
    let mut out = String::from("#[derive(ParamStruct, Debug)]\n#[repr(C)]\n");
    out.push_str(&format!("pub struct {} {{\n", layout.record_name));
    for member in &layout.members {
        match member {
            Member::Field(f) => {
                out.push_str(&format!("    pub {}: {},\n", field_ident(&f.name), field_type(f)));
            }
            Member::Packed(p) => write_packed(&mut out, p),
        }
    }
    out.push_str("}\n");
    out
}

/// Render a whole catalog: header, record name table, then one struct per layout.
pub fn render_rust(layouts: &[Layout]) -> String {
    let mut out = String::from(HEADER);
    out.push_str("\npub const RECORD_NAMES: &[&str] = &[\n");
    for layout in layouts {
        out.push_str(&format!("    {:?},\n", layout.record_name));
    }
    out.push_str("];\n");
    for layout in layouts {
        out.push('\n');
        out.push_str(&render_struct(layout));
    }
    out
}

//! Parse one raw field definition into a [`Field`] using PEST.

use crate::ast::{Field, FieldKind};
use crate::error::ErrorKind;
use crate::types::map_type;
use pest::Parser;
use pest_derive::Parser as PestParser;

#[derive(PestParser)]
#[grammar = "grammar.pest"]
struct DefinitionParser;

/// Parse a single definition: `<type> <name>[<n>]`, `<type> <name>:<bits>` or `<type> <name>`.
///
/// The grammar alternatives are tried in that order; the first match wins.
/// A trailing default such as `f32 rate = 1` is accepted and dropped.
pub fn parse_definition(definition: &str) -> Result<Field, ErrorKind> {
    let pairs = DefinitionParser::parse(Rule::definition, definition)
        .map_err(|_| ErrorKind::MalformedDefinition)?;
    let pair = pairs.into_iter().next().ok_or(ErrorKind::MalformedDefinition)?;
    let form = pair.into_inner().next().ok_or(ErrorKind::MalformedDefinition)?;
    let rule = form.as_rule();

    let mut inner = form.into_inner();
    let token = inner.next().ok_or(ErrorKind::MalformedDefinition)?.as_str();
    let name = inner.next().ok_or(ErrorKind::MalformedDefinition)?.as_str().to_string();
    let number = inner.next().filter(|p| p.as_rule() == Rule::number).map(|p| p.as_str());

    let ty = map_type(token).ok_or_else(|| ErrorKind::UnknownTypeToken(token.to_string()))?;

    let kind = match rule {
        Rule::array_def => {
            let count = parse_number(number)?;
            if count < 1 {
                return Err(ErrorKind::InvalidArrayCount(count));
            }
            let count = usize::try_from(count).map_err(|_| ErrorKind::MalformedDefinition)?;
            FieldKind::Array { element: ty, count }
        }
        Rule::bitfield_def => {
            let max = ty
                .bit_width()
                .ok_or_else(|| ErrorKind::UnsupportedBitfieldType(token.to_string()))?;
            let bits = parse_number(number)?;
            if !(1..=u64::from(max)).contains(&bits) {
                return Err(ErrorKind::InvalidBitWidth { backing: ty, bits, max });
            }
            FieldKind::BitfieldMember {
                backing: ty,
                bits: bits as u32,
            }
        }
        Rule::scalar_def => FieldKind::Scalar { ty },
        _ => return Err(ErrorKind::MalformedDefinition),
    };

    Ok(Field { name, kind })
}

fn parse_number(s: Option<&str>) -> Result<u64, ErrorKind> {
    s.and_then(|s| s.parse().ok())
        .ok_or(ErrorKind::MalformedDefinition)
}

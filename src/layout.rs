//! Compile raw definitions into per-record [`Layout`]s.

use crate::ast::{Layout, Member, PackedField, RecordDefinitions};
use crate::dedup::disambiguate;
use crate::error::CompileError;
use crate::group::group_bitfields;
use crate::parser::parse_definition;
use log::debug;
use rayon::prelude::*;

/// Compile one record type. The first failing definition aborts the whole record.
pub fn compile<S: AsRef<str>>(record_name: &str, raw_definitions: &[S]) -> Result<Layout, CompileError> {
    let fields = raw_definitions
        .iter()
        .enumerate()
        .map(|(i, def)| {
            let def = def.as_ref();
            parse_definition(def).map_err(|kind| CompileError::new(record_name, i, def, kind))
        })
        .collect::<Result<Vec<_>, _>>()?;

    let grouped = group_bitfields(fields).map_err(|e| {
        let def = raw_definitions.get(e.index).map(|d| d.as_ref()).unwrap_or_default();
        CompileError::new(record_name, e.index, def, e.kind)
    })?;

    let members = disambiguate(grouped)
        .into_iter()
        .map(|member| match member {
            Member::Packed(p) => Member::Packed(PackedField {
                members: disambiguate(p.members),
                ..p
            }),
            field => field,
        })
        .collect::<Vec<_>>();

    debug!(
        "compiled {}: {} definitions -> {} members",
        record_name,
        raw_definitions.len(),
        members.len()
    );

    Ok(Layout {
        record_name: record_name.to_string(),
        members,
    })
}

/// Compile every record independently and in parallel.
///
/// Results come back in input order; a failing record does not affect the others.
pub fn compile_all(records: &[RecordDefinitions]) -> Vec<Result<Layout, CompileError>> {
    records
        .par_iter()
        .map(|r| compile(&r.name, &r.definitions))
        .collect()
}

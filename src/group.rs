//! Collapse runs of bitfield members into packed fields.
//!
//! A run closes as soon as the number of members in it equals the bit width of
//! its backing type: eight members for a `u8`, sixteen for a `u16`, and so on.
//! The declared widths of the members do not take part in that decision.

use crate::ast::{BaseType, Field, FieldKind, Member, PackedField};
use crate::error::{ErrorKind, GroupError};

struct OpenRun {
    start: usize,
    backing: BaseType,
    capacity: u32,
    members: Vec<Field>,
}

impl OpenRun {
    fn unterminated(&self) -> GroupError {
        GroupError {
            index: self.start,
            kind: ErrorKind::UnterminatedBitfieldRun {
                members: self.members.len(),
                capacity: self.capacity,
            },
        }
    }
}

/// Group consecutive bitfield members, keeping every other field in place.
///
/// Packed fields get ordinals 0, 1, 2... in the order their runs close.
pub fn group_bitfields(fields: Vec<Field>) -> Result<Vec<Member>, GroupError> {
    let mut out = Vec::with_capacity(fields.len());
    let mut run: Option<OpenRun> = None;
    let mut ordinal = 0usize;

    for (index, field) in fields.into_iter().enumerate() {
        let FieldKind::BitfieldMember { backing, .. } = field.kind else {
            if let Some(open) = &run {
                return Err(open.unterminated());
            }
            out.push(Member::Field(field));
            continue;
        };

        let mut open = match run.take() {
            Some(open) if open.backing != backing => {
                return Err(GroupError {
                    index,
                    kind: ErrorKind::InconsistentBitfieldBackingType {
                        expected: open.backing,
                        found: backing,
                    },
                });
            }
            Some(open) => open,
            None => {
                let capacity = backing.bit_width().ok_or_else(|| GroupError {
                    index,
                    kind: ErrorKind::UnsupportedBitfieldType(format!("{:?}", backing)),
                })?;
                OpenRun {
                    start: index,
                    backing,
                    capacity,
                    members: Vec::new(),
                }
            }
        };

        open.members.push(field);
        if open.members.len() == open.capacity as usize {
            out.push(Member::Packed(PackedField::new(ordinal, open.backing, open.members)));
            ordinal += 1;
        } else {
            run = Some(open);
        }
    }

    match run {
        Some(open) => Err(open.unterminated()),
        None => Ok(out),
    }
}

//! Resolve name collisions within a member sequence.

use crate::ast::{Field, Member};
use std::collections::HashSet;

/// Anything carrying a renameable name.
pub trait Named {
    fn name(&self) -> &str;
    fn set_name(&mut self, name: String);
}

impl Named for Field {
    fn name(&self) -> &str {
        &self.name
    }

    fn set_name(&mut self, name: String) {
        self.name = name;
    }
}

impl Named for Member {
    fn name(&self) -> &str {
        Member::name(self)
    }

    fn set_name(&mut self, name: String) {
        match self {
            Member::Field(f) => f.name = name,
            Member::Packed(p) => p.name = name,
        }
    }
}

/// Snake-case form of a name, used to decide whether two names collide.
///
/// `fooBar`, `FooBar` and `foo_bar` all normalize to `foo_bar`. A run of capitals
/// gets one leading underscore, except that the first character of the name is
/// never part of a run: `isHPBar` -> `is_hpbar`, `HPRate` -> `h_prate`, `AB` -> `a_b`.
pub fn normalize(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    let mut prev_upper = false;
    for (i, c) in name.chars().enumerate() {
        if c.is_ascii_uppercase() {
            if i > 0 && (!prev_upper || i == 1) {
                out.push('_');
            }
            out.push(c.to_ascii_lowercase());
            prev_upper = true;
        } else {
            out.push(c);
            prev_upper = false;
        }
    }
    collapse_underscores(&out)
}

fn collapse_underscores(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        if c == '_' && out.ends_with('_') {
            continue;
        }
        out.push(c);
    }
    out
}

/// Append `_<n>` to every item whose normalized name was already seen.
///
/// `n` counts renames across the whole call, not per name. Order and length are preserved.
pub fn disambiguate<T: Named>(items: Vec<T>) -> Vec<T> {
    let mut seen = HashSet::with_capacity(items.len());
    let mut renames = 0usize;
    items
        .into_iter()
        .map(|mut item| {
            let key = normalize(item.name());
            if seen.contains(&key) {
                let renamed = format!("{}_{}", item.name(), renames);
                item.set_name(renamed);
                renames += 1;
            }
            seen.insert(key);
            item
        })
        .collect()
}

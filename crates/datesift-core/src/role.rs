//! Field-role resolver: decides whether a partial date expands to the start
//! or the end of its period.

use crate::types::{FieldMeta, FieldRole};

/// Resolve the role of a date field.
///
/// Priority: explicit metadata flag, then the words `earlier`/`later` in the
/// field text (case-sensitive), then `start`/`end` in the field name
/// (case-insensitive). Anything else is [`FieldRole::End`].
pub fn resolve_role(field: &str, meta: &FieldMeta, text: &str) -> FieldRole {
    if let Some(role) = meta.explicit_role() {
        return role;
    }
    if text.contains("earlier") {
        return FieldRole::Start;
    }
    if text.contains("later") {
        return FieldRole::End;
    }

    let field = field.to_lowercase();
    if field.contains("start") {
        FieldRole::Start
    } else {
        FieldRole::End
    }
}

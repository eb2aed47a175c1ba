use crate::fields::FieldMap;

/// Prefix that inverts a condition.
pub const NEGATION: char = '!';

/// A field is truthy when it is present with a value that is not blank,
/// not `"0"`, and not `"false"` in any casing.
pub fn is_truthy(field: &str, fields: &FieldMap) -> bool {
    match fields.get(field) {
        Some(value) => {
            !value.trim().is_empty() && value != "0" && !value.eq_ignore_ascii_case("false")
        }
        None => false,
    }
}

/// Evaluate a condition such as `HasChildren` or `!HasChildren`.
/// A missing or blank condition always holds.
pub fn evaluate(condition: Option<&str>, fields: &FieldMap) -> bool {
    let condition = match condition.map(str::trim) {
        Some(c) if !c.is_empty() => c,
        _ => return true,
    };
    match condition.strip_prefix(NEGATION) {
        Some(field) => !is_truthy(field, fields),
        None => is_truthy(condition, fields),
    }
}

//! Node label formatting

use crate::core::{GspnError, Position, Result};

const SUBSCRIPT_SEPARATOR: char = '_';

/// Math-mode text for a node name: `X_1` becomes `X_{1}`.
///
/// Names with more than one separator are rejected rather than truncated.
pub fn label_text(name: &str) -> Result<String> {
    let separators = name.matches(SUBSCRIPT_SEPARATOR).count();
    match separators {
        0 => Ok(name.to_string()),
        1 => {
            let (base, suffix) = name
                .split_once(SUBSCRIPT_SEPARATOR)
                .unwrap_or((name, ""));
            Ok(format!("{}_{{{}}}", base, suffix))
        }
        _ => Err(GspnError::LabelFormat {
            name: name.to_string(),
            separators,
        }),
    }
}

/// The `label = {...}` node option.
///
/// `shift` is the already transformed label shift, or `None` when no offset
/// should be emitted.
pub fn format_label(name: &str, shift: Option<(String, String)>) -> Result<String> {
    let mut label = String::from("label = {");
    if let Some((x, y)) = shift {
        label.push_str(&format!("[xshift={}, yshift={}]", x, y));
    }
    label.push('$');
    label.push_str(&label_text(name)?);
    label.push_str("$}");
    Ok(label)
}

/// Whether a raw label shift is emitted at all. Shifts along a single axis
/// are dropped.
pub fn has_shift(shift: &Position) -> bool {
    shift.is_diagonal()
}

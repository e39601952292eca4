//! Attribute extraction helpers for PNPRO elements

use roxmltree::Node;

use crate::core::{GspnError, Position, Result};

/// Describe an element for error messages, e.g. `place 'P1'`
pub(super) fn describe(node: Node<'_, '_>) -> String {
    let tag = node.tag_name().name();
    match node.attribute("name") {
        Some(name) => format!("{} '{}'", tag, name),
        None => tag.to_string(),
    }
}

/// Fetch an attribute that must be present
pub(super) fn required<'a>(node: Node<'a, '_>, attribute: &str) -> Result<&'a str> {
    node.attribute(attribute)
        .ok_or_else(|| GspnError::missing_attribute(describe(node), attribute))
}

fn parse_float(node: Node<'_, '_>, attribute: &str, value: &str) -> Result<f64> {
    let number = value
        .trim()
        .parse::<f64>()
        .map_err(|_| GspnError::invalid_attribute(describe(node), attribute, value, "a number"))?;
    if !number.is_finite() {
        return Err(GspnError::invalid_attribute(
            describe(node),
            attribute,
            value,
            "a finite number",
        ));
    }
    Ok(number)
}

/// Fetch a required floating-point attribute
pub(super) fn required_float(node: Node<'_, '_>, attribute: &str) -> Result<f64> {
    let value = required(node, attribute)?;
    parse_float(node, attribute, value)
}

/// Fetch an optional floating-point attribute
pub(super) fn optional_float(node: Node<'_, '_>, attribute: &str) -> Result<Option<f64>> {
    node.attribute(attribute)
        .map(|value| parse_float(node, attribute, value))
        .transpose()
}

/// Fetch an optional token count, defaulting to zero
pub(super) fn marking(node: Node<'_, '_>) -> Result<u32> {
    match node.attribute("marking") {
        None => Ok(0),
        Some(value) => value.trim().parse::<u32>().map_err(|_| {
            GspnError::invalid_attribute(describe(node), "marking", value, "a token count")
        }),
    }
}

/// Required `x`/`y` position
pub(super) fn position(node: Node<'_, '_>) -> Result<Position> {
    Ok(Position::new(
        required_float(node, "x")?,
        required_float(node, "y")?,
    ))
}

/// `label-x`/`label-y` shift, each axis defaulting to zero
pub(super) fn label_shift(node: Node<'_, '_>) -> Result<Position> {
    Ok(Position::new(
        optional_float(node, "label-x")?.unwrap_or(0.0),
        optional_float(node, "label-y")?.unwrap_or(0.0),
    ))
}

/// Find a required child element by tag name
pub(super) fn child<'a, 'input>(
    node: Node<'a, 'input>,
    tag: &str,
) -> Result<Node<'a, 'input>> {
    node.children()
        .find(|n| n.is_element() && n.has_tag_name(tag))
        .ok_or_else(|| GspnError::malformed(describe(node), format!("missing <{}> element", tag)))
}

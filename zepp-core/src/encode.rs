//! Value encoders: model values to Zepp OS JavaScript literals.
//!
//! Optional fields fall back to their default when missing or falsy
//! (an empty string or a numeric zero).

use crate::WidgetProps;

/// Encode a `#RRGGBB` color as a JS hex number literal (`0xRRGGBB`).
///
/// Input is not validated. Only the first `#` is stripped and the rest is
/// passed through unchanged.
#[must_use]
pub fn color(hex: &str) -> String {
    format!("0x{}", hex.replacen('#', "", 1))
}

/// Encode an optional color, falling back to an already-encoded default.
#[must_use]
pub fn color_or(hex: Option<&str>, default: &str) -> String {
    match hex {
        Some(hex) if !hex.is_empty() => color(hex),
        _ => default.to_string(),
    }
}

/// Encode a number. Dimensions pass through with no unit conversion.
///
/// Integral values print without a fractional part (`130`, not `130.0`).
#[must_use]
pub fn number(value: f64) -> String {
    format!("{value}")
}

/// An optional number, or `default` when absent, zero or NaN.
#[must_use]
pub fn number_or(value: Option<f64>, default: f64) -> f64 {
    match value {
        Some(v) if v.abs() > 0.0 => v,
        _ => default,
    }
}

/// An optional string, or `default` when absent or empty.
#[must_use]
pub fn text_or<'a>(value: Option<&'a str>, default: &'a str) -> &'a str {
    match value {
        Some(v) if !v.is_empty() => v,
        _ => default,
    }
}

/// Quote `value` as a double-quoted JS string literal.
#[must_use]
pub fn js_string(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => out.push_str(&format!("\\u{{{:x}}}", u32::from(c))),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

/// Make `value` safe to place inside a `/* ... */` block comment.
#[must_use]
pub fn comment_text(value: &str) -> String {
    value.replace("*/", "*\\/").replace(['\n', '\r'], " ")
}

/// Center point and radius of a circle inscribed in the props' box.
///
/// Height is ignored: a non-square box still uses `w` for the radius.
#[must_use]
pub fn circle_geometry(props: &WidgetProps) -> (f64, f64, f64) {
    let radius = props.w / 2.0;
    (props.x + radius, props.y + props.h / 2.0, radius)
}

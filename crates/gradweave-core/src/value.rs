//! CSS gradient function-call construction.
//!
//! Each builder applies value-based elision: an argument equal to the
//! browser's native default for its slot is omitted from the emitted call.
//! This check compares resolved CSS values, never axis keys; key-based
//! class-name elision lives in [`crate::selector`] and the two are allowed
//! to disagree.

/// Direction spellings the browser already defaults to (top-to-bottom).
pub const LINEAR_DIRECTION_DEFAULTS: [&str; 5] =
    ["to bottom", "180deg", "0.5turn", "200grad", "3.1416rad"];

/// Equivalent spellings of the centered default position.
pub const POSITION_DEFAULTS: [&str; 6] =
    ["center", "center center", "50%", "50% 50%", "center 50%", "50% center"];

pub const RADIAL_SHAPE_DEFAULT: &str = "ellipse";
pub const RADIAL_SIZE_DEFAULT: &str = "farthest-corner";

/// Equivalent spellings of the zero starting angle.
pub const CONIC_ANGLE_DEFAULTS: [&str; 6] = ["0", "0deg", "0%", "0turn", "0grad", "0rad"];

/// `linear-gradient([direction, ]stops[ length])`.
///
/// A `Some` length selects the `repeating-` form; an empty length string
/// still selects it but appends no trailing token.
pub fn linear(direction: &str, stops: &[String], length: Option<&str>) -> String {
    let mut args = String::new();
    if !LINEAR_DIRECTION_DEFAULTS.contains(&direction) {
        args.push_str(direction);
        args.push_str(", ");
    }
    finish("linear-gradient", args, stops, length)
}

/// `radial-gradient([shape ][size ][at position, ]stops[ length])`.
///
/// Shape, size, and position are each emitted only when they differ from
/// the native defaults (`ellipse`, `farthest-corner`, centered). When none
/// differ, the call begins directly with the stop list.
pub fn radial(
    shape: &str,
    size: &str,
    position: &str,
    stops: &[String],
    length: Option<&str>,
) -> String {
    let mut head: Vec<String> = Vec::new();
    if shape != RADIAL_SHAPE_DEFAULT {
        head.push(shape.to_string());
    }
    if size != RADIAL_SIZE_DEFAULT {
        head.push(size.to_string());
    }
    if !POSITION_DEFAULTS.contains(&position) {
        head.push(format!("at {position}"));
    }
    let mut args = head.join(" ");
    if !args.is_empty() {
        args.push_str(", ");
    }
    finish("radial-gradient", args, stops, length)
}

/// `conic-gradient([from angle ][at position, ]stops[ length])`.
pub fn conic(angle: &str, position: &str, stops: &[String], length: Option<&str>) -> String {
    let mut head: Vec<String> = Vec::new();
    if !CONIC_ANGLE_DEFAULTS.contains(&angle) {
        head.push(format!("from {angle}"));
    }
    if !POSITION_DEFAULTS.contains(&position) {
        head.push(format!("at {position}"));
    }
    let mut args = head.join(" ");
    if !args.is_empty() {
        args.push_str(", ");
    }
    finish("conic-gradient", args, stops, length)
}

/// Appends the stop list and optional repeat length, then wraps the call.
fn finish(function: &str, mut args: String, stops: &[String], length: Option<&str>) -> String {
    args.push_str(&stops.join(", "));
    let prefix = match length {
        Some(len) => {
            if !len.is_empty() {
                args.push(' ');
                args.push_str(len);
            }
            "repeating-"
        }
        None => "",
    };
    format!("{prefix}{function}({args})")
}

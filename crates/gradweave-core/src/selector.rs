//! Class-name suffix construction.
//!
//! Elision here is key-based: a segment is dropped when its axis key is the
//! literal `default`, regardless of what value that key holds. The CSS
//! argument elision in [`crate::value`] is value-based, and the two checks
//! are deliberately independent (a `default` key holding a non-default value
//! elides the segment but still emits the clause).

/// Axis key reserved for "elide this segment".
pub const DEFAULT_KEY: &str = "default";

/// `bg-gradient-{direction}-{color}[-{length}]`.
///
/// The direction segment is never elided, even for a `default` key: the
/// linear class family always spells its direction.
pub fn linear(direction_key: &str, color_key: &str, length_key: Option<&str>) -> String {
    let mut name = format!("bg-gradient-{direction_key}-{color_key}");
    push_length(&mut name, length_key);
    name
}

/// `bg-radial[-{shape}][-{size}][-{position}]-{color}[-{length}]`.
pub fn radial(
    shape_key: &str,
    size_key: &str,
    position_key: &str,
    color_key: &str,
    length_key: Option<&str>,
) -> String {
    let mut name = String::from("bg-radial");
    push_segment(&mut name, shape_key);
    push_segment(&mut name, size_key);
    push_segment(&mut name, position_key);
    name.push('-');
    name.push_str(color_key);
    push_length(&mut name, length_key);
    name
}

/// `bg-conic[-{startingAngle}][-{position}]-{color}[-{length}]`.
pub fn conic(
    angle_key: &str,
    position_key: &str,
    color_key: &str,
    length_key: Option<&str>,
) -> String {
    let mut name = String::from("bg-conic");
    push_segment(&mut name, angle_key);
    push_segment(&mut name, position_key);
    name.push('-');
    name.push_str(color_key);
    push_length(&mut name, length_key);
    name
}

fn push_segment(name: &mut String, key: &str) {
    if key != DEFAULT_KEY {
        name.push('-');
        name.push_str(key);
    }
}

fn push_length(name: &mut String, length_key: Option<&str>) {
    if let Some(key) = length_key {
        name.push('-');
        name.push_str(key);
    }
}

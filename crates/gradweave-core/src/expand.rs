//! Cartesian expansion of configured axes into utility entries.
//!
//! One expander per gradient family. Each returns a fresh, insertion-ordered
//! accumulator; nothing mutable is shared across calls. Selector collisions
//! overwrite the stored declaration in place (last write wins, first
//! insertion position kept), which keeps output order deterministic.

use indexmap::IndexMap;

use crate::theme::{AxisMap, ColorMap, LengthMap};
use crate::{color, selector, value};

/// CSS property → value block for one selector. Only `background-image` is
/// ever set by this crate.
pub type DeclarationBlock = IndexMap<String, String>;

/// `.escaped-selector` → declaration block, in emission order.
pub type UtilityMap = IndexMap<String, DeclarationBlock>;

pub const BACKGROUND_IMAGE: &str = "background-image";

/// Host-supplied escaping of a raw class-name suffix into a CSS-safe
/// identifier fragment. Assumed idempotent and collision-preserving.
pub type Escape<'a> = &'a dyn Fn(&str) -> String;

/// Linear family: directions × colors, lengths outermost when repeating.
pub fn expand_linear(
    directions: &AxisMap,
    colors: &ColorMap,
    lengths: Option<&LengthMap>,
    escape: Escape<'_>,
) -> UtilityMap {
    let mut utilities = UtilityMap::new();
    let colors = normalized(colors, true);
    match lengths {
        None => {
            for (color_key, stops) in &colors {
                for (direction_key, direction) in directions {
                    insert(
                        &mut utilities,
                        escape,
                        &selector::linear(direction_key, color_key, None),
                        value::linear(direction, stops, None),
                    );
                }
            }
        }
        Some(lengths) => {
            for (length_key, length) in lengths {
                for (color_key, stops) in &colors {
                    for (direction_key, direction) in directions {
                        insert(
                            &mut utilities,
                            escape,
                            &selector::linear(direction_key, color_key, Some(length_key)),
                            value::linear(direction, stops, Some(length)),
                        );
                    }
                }
            }
        }
    }
    utilities
}

/// Radial family: shapes × sizes × positions × colors.
pub fn expand_radial(
    shapes: &AxisMap,
    sizes: &AxisMap,
    positions: &AxisMap,
    colors: &ColorMap,
    lengths: Option<&LengthMap>,
    escape: Escape<'_>,
) -> UtilityMap {
    let mut utilities = UtilityMap::new();
    let colors = normalized(colors, false);

    let emit = |utilities: &mut UtilityMap,
                    color_key: &str,
                    stops: &[String],
                    length: Option<(&str, &str)>| {
        let (length_key, length_value) = split(length);
        for (shape_key, shape) in shapes {
            for (size_key, size) in sizes {
                for (position_key, position) in positions {
                    insert(
                        utilities,
                        escape,
                        &selector::radial(shape_key, size_key, position_key, color_key, length_key),
                        value::radial(shape, size, position, stops, length_value),
                    );
                }
            }
        }
    };

    match lengths {
        None => {
            for (color_key, stops) in &colors {
                emit(&mut utilities, color_key, stops, None);
            }
        }
        Some(lengths) => {
            for (length_key, length) in lengths {
                for (color_key, stops) in &colors {
                    emit(&mut utilities, color_key, stops, Some((length_key, length)));
                }
            }
        }
    }
    utilities
}

/// Conic family: starting angles × positions × colors.
pub fn expand_conic(
    angles: &AxisMap,
    positions: &AxisMap,
    colors: &ColorMap,
    lengths: Option<&LengthMap>,
    escape: Escape<'_>,
) -> UtilityMap {
    let mut utilities = UtilityMap::new();
    let colors = normalized(colors, true);

    let emit = |utilities: &mut UtilityMap,
                    color_key: &str,
                    stops: &[String],
                    length: Option<(&str, &str)>| {
        let (length_key, length_value) = split(length);
        for (angle_key, angle) in angles {
            for (position_key, position) in positions {
                insert(
                    utilities,
                    escape,
                    &selector::conic(angle_key, position_key, color_key, length_key),
                    value::conic(angle, position, stops, length_value),
                );
            }
        }
    };

    match lengths {
        None => {
            for (color_key, stops) in &colors {
                emit(&mut utilities, color_key, stops, None);
            }
        }
        Some(lengths) => {
            for (length_key, length) in lengths {
                for (color_key, stops) in &colors {
                    emit(&mut utilities, color_key, stops, Some((length_key, length)));
                }
            }
        }
    }
    utilities
}

/// Normalizes every color entry once, up front; geometry never changes the
/// outcome. A rejected entry drops out here, taking all of its
/// geometry/length combinations with it.
fn normalized(colors: &ColorMap, transparent_first: bool) -> Vec<(&str, Vec<String>)> {
    colors
        .iter()
        .filter_map(|(key, spec)| match color::normalize(spec, transparent_first) {
            Some(stops) => Some((key.as_str(), stops)),
            None => {
                log::trace!("dropping gradient color {key:?}: contains a CSS-wide keyword");
                None
            }
        })
        .collect()
}

fn split<'a>(length: Option<(&'a str, &'a str)>) -> (Option<&'a str>, Option<&'a str>) {
    match length {
        Some((key, value)) => (Some(key), Some(value)),
        None => (None, None),
    }
}

fn insert(utilities: &mut UtilityMap, escape: Escape<'_>, class: &str, css: String) {
    let block = IndexMap::from([(BACKGROUND_IMAGE.to_string(), css)]);
    utilities.insert(format!(".{}", escape(class)), block);
}

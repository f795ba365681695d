use crate::theme::ColorSpec;

/// CSS-wide keywords that cannot participate in a multi-stop gradient.
///
/// A color entry containing any of these is rejected outright: the whole
/// entry produces no utilities, since e.g. `linear-gradient(inherit, #f00)`
/// is not valid CSS.
pub const UNSUPPORTED_KEYWORDS: [&str; 4] = ["inherit", "initial", "unset", "revert"];

/// Normalizes a configured color entry into an explicit stop list.
///
/// Rules:
/// - a scalar (or single-element list) is paired with its zero-alpha
///   counterpart, placed before it when `transparent_first` (fade toward a
///   direction) or after it otherwise (fade outward from a center);
/// - two or more stops pass through unchanged;
/// - any occurrence of an unsupported CSS-wide keyword rejects the entry
///   (`None`).
pub fn normalize(spec: &ColorSpec, transparent_first: bool) -> Option<Vec<String>> {
    let stops: Vec<String> = match spec {
        ColorSpec::Single(c) => vec![c.clone()],
        ColorSpec::Stops(v) => v.clone(),
    };

    if stops.iter().any(|s| UNSUPPORTED_KEYWORDS.contains(&s.as_str())) {
        return None;
    }

    if let [color] = stops.as_slice() {
        let faded = zero_alpha(color);
        let color = color.clone();
        return Some(if transparent_first {
            vec![faded, color]
        } else {
            vec![color, faded]
        });
    }

    Some(stops)
}

/// Computes the zero-alpha counterpart of a single CSS color.
///
/// Falls back to the literal `transparent` for anything the parser cannot
/// interpret (`currentColor`, `var(...)`, malformed input); "currentColor
/// with alpha 0" is not statically computable, and `transparent` degrades
/// acceptably in all of these cases.
pub fn zero_alpha(color: &str) -> String {
    match csscolorparser::parse(color) {
        Ok(parsed) => {
            let [r, g, b, _] = parsed.to_rgba8();
            format!("rgba({r}, {g}, {b}, 0)")
        }
        Err(_) => "transparent".to_string(),
    }
}

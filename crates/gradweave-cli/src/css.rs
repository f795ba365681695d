//! Host-side CSS finishing: identifier escaping, variant wrapping, and
//! stylesheet rendering. The core emits raw selectors and declaration
//! blocks; everything below is presentation.

use gradweave_core::{AxisMap, UtilityMap};

/// Pseudo-class variants this host knows how to wrap.
pub const PSEUDO_VARIANTS: [&str; 5] = ["hover", "focus", "active", "visited", "focus-within"];

/// Escapes a raw class-name suffix into a CSS-safe identifier fragment.
///
/// ASCII letters, digits, `-`, and `_` pass through; a leading digit gets a
/// code-point escape (the `CSS.escape` rule); anything else is
/// backslash-escaped. Already-safe input comes back unchanged.
pub fn escape_class(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for (i, c) in raw.chars().enumerate() {
        if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
            if i == 0 && c.is_ascii_digit() {
                out.push_str(&format!("\\3{c} "));
            } else {
                out.push(c);
            }
        } else {
            out.push('\\');
            out.push(c);
        }
    }
    out
}

/// Renders collected families into one stylesheet.
///
/// Per family: base rules first, then one wrapped copy per variant in the
/// family's variant order. Pseudo-class variants rewrite the selector
/// (`.hover\:bg-… :hover`); `responsive` wraps a prefixed copy of the rules
/// in one `@media` block per configured screen. Unknown variant names are
/// skipped with a warning.
pub fn render(families: &[(UtilityMap, Vec<String>)], screens: &AxisMap, pretty: bool) -> String {
    let mut out = String::new();
    for (utilities, variants) in families {
        if utilities.is_empty() {
            continue;
        }
        for (selector, block) in utilities {
            push_rule(&mut out, selector, block, pretty);
        }
        for variant in variants {
            if PSEUDO_VARIANTS.contains(&variant.as_str()) {
                for (selector, block) in utilities {
                    let wrapped = pseudo_selector(selector, variant);
                    push_rule(&mut out, &wrapped, block, pretty);
                }
            } else if variant == "responsive" {
                for (screen, min_width) in screens {
                    push_media_open(&mut out, min_width, pretty);
                    for (selector, block) in utilities {
                        let prefixed = prefix_selector(selector, screen);
                        push_nested_rule(&mut out, &prefixed, block, pretty);
                    }
                    out.push('}');
                    if pretty {
                        out.push('\n');
                    }
                }
            } else {
                log::warn!("ignoring unknown variant {variant:?}");
            }
        }
    }
    out
}

/// `.bg-x` + `hover` → `.hover\:bg-x:hover`.
fn pseudo_selector(selector: &str, variant: &str) -> String {
    let class = selector.strip_prefix('.').unwrap_or(selector);
    format!(".{}\\:{class}:{variant}", escape_class(variant))
}

/// `.bg-x` + `sm` → `.sm\:bg-x`.
fn prefix_selector(selector: &str, screen: &str) -> String {
    let class = selector.strip_prefix('.').unwrap_or(selector);
    format!(".{}\\:{class}", escape_class(screen))
}

fn push_rule(
    out: &mut String,
    selector: &str,
    block: &gradweave_core::DeclarationBlock,
    pretty: bool,
) {
    if pretty {
        out.push_str(selector);
        out.push_str(" {\n");
        for (property, value) in block {
            out.push_str(&format!("  {property}: {value};\n"));
        }
        out.push_str("}\n");
    } else {
        out.push_str(selector);
        out.push('{');
        let mut first = true;
        for (property, value) in block {
            if !first {
                out.push(';');
            }
            out.push_str(&format!("{property}:{value}"));
            first = false;
        }
        out.push('}');
    }
}

fn push_nested_rule(
    out: &mut String,
    selector: &str,
    block: &gradweave_core::DeclarationBlock,
    pretty: bool,
) {
    if pretty {
        let mut rule = String::new();
        push_rule(&mut rule, selector, block, true);
        for line in rule.lines() {
            out.push_str("  ");
            out.push_str(line);
            out.push('\n');
        }
    } else {
        push_rule(out, selector, block, false);
    }
}

fn push_media_open(out: &mut String, min_width: &str, pretty: bool) {
    if pretty {
        out.push_str(&format!("@media (min-width: {min_width}) {{\n"));
    } else {
        out.push_str(&format!("@media (min-width: {min_width}){{"));
    }
}

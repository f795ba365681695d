//! Family orchestration and the host seam.
//!
//! The host (a utility-class framework, a CLI, a build tool) supplies theme
//! lookup, variant resolution, and identifier escaping, and receives one
//! utility mapping per family through its sink. This module only wires
//! resolved axes into the expanders; it holds no state of its own.

use indexmap::IndexMap;

use crate::expand::{self, BACKGROUND_IMAGE, UtilityMap};
use crate::theme::{self, LengthMap, ThemeResolver, ThemeValue};

/// Variant list used for every family group the host has no entry for.
pub const DEFAULT_VARIANTS: [&str; 1] = ["responsive"];

/// Everything the core needs from its embedder.
///
/// `theme`, `variants`, and `escape` are pure lookups; `add_utilities` is
/// the sink, called exactly once per family in family order.
pub trait Host {
    /// Configured value at a dotted theme path, or `None` to use built-ins.
    fn theme(&self, path: &str) -> Option<ThemeValue>;

    /// Effective variant list for a family group.
    fn variants(&self, group: &str, default: &[&str]) -> Vec<String>;

    /// Escapes a raw class-name suffix into a CSS-safe identifier fragment.
    fn escape(&self, raw: &str) -> String;

    /// Receives one family's utilities together with that family's variants.
    fn add_utilities(&mut self, utilities: UtilityMap, variants: Vec<String>);
}

/// Expands all seven utility groups and hands each to the host sink, in
/// fixed order: none, linear, radial, conic, repeating-linear,
/// repeating-radial, repeating-conic.
///
/// A single pass, no caching: every call re-reads the theme and rebuilds
/// the mappings from scratch.
pub fn add_gradient_utilities<H: Host>(host: &mut H) {
    let families = {
        let h: &H = host;
        let lookup = |path: &str| h.theme(path);
        let resolver = ThemeResolver::new(&lookup);
        collect_families(h, &resolver)
    };
    for (utilities, variants) in families {
        host.add_utilities(utilities, variants);
    }
}

fn collect_families<H: Host>(
    host: &H,
    theme: &ThemeResolver<'_>,
) -> Vec<(UtilityMap, Vec<String>)> {
    let escape = |raw: &str| host.escape(raw);

    // Non-repeating axes resolve first; repeating families fall back to
    // them, so `lengths` stays the only switch that turns repetition on.
    let linear_directions = theme
        .get("linearGradients.directions")
        .map(ThemeValue::into_axis_map)
        .unwrap_or_else(theme::default_directions);
    let linear_colors = theme
        .get("linearGradients.colors")
        .map(ThemeValue::into_color_map)
        .unwrap_or_default();

    let radial_shapes = theme
        .get("radialGradients.shapes")
        .map(ThemeValue::into_axis_map)
        .unwrap_or_else(theme::default_shapes);
    let radial_sizes = theme
        .get("radialGradients.sizes")
        .map(ThemeValue::into_axis_map)
        .unwrap_or_else(theme::default_sizes);
    let radial_positions = theme
        .get("radialGradients.positions")
        .map(ThemeValue::into_axis_map)
        .unwrap_or_else(theme::default_positions);
    let radial_colors = theme
        .get("radialGradients.colors")
        .map(ThemeValue::into_color_map)
        .unwrap_or_default();

    let conic_angles = theme
        .get("conicGradients.startingAngles")
        .map(ThemeValue::into_axis_map)
        .unwrap_or_else(theme::default_starting_angles);
    let conic_positions = theme
        .get("conicGradients.positions")
        .map(ThemeValue::into_axis_map)
        .unwrap_or_else(theme::default_positions);
    let conic_colors = theme
        .get("conicGradients.colors")
        .map(ThemeValue::into_color_map)
        .unwrap_or_default();

    let rep_linear_directions = theme
        .get("repeatingLinearGradients.directions")
        .map(ThemeValue::into_axis_map)
        .unwrap_or_else(|| linear_directions.clone());
    let rep_linear_colors = theme
        .get("repeatingLinearGradients.colors")
        .map(ThemeValue::into_color_map)
        .unwrap_or_else(|| linear_colors.clone());
    let rep_linear_lengths: LengthMap = theme
        .get("repeatingLinearGradients.lengths")
        .map(ThemeValue::into_axis_map)
        .unwrap_or_default();

    let rep_radial_shapes = theme
        .get("repeatingRadialGradients.shapes")
        .map(ThemeValue::into_axis_map)
        .unwrap_or_else(|| radial_shapes.clone());
    let rep_radial_sizes = theme
        .get("repeatingRadialGradients.sizes")
        .map(ThemeValue::into_axis_map)
        .unwrap_or_else(|| radial_sizes.clone());
    let rep_radial_positions = theme
        .get("repeatingRadialGradients.positions")
        .map(ThemeValue::into_axis_map)
        .unwrap_or_else(|| radial_positions.clone());
    let rep_radial_colors = theme
        .get("repeatingRadialGradients.colors")
        .map(ThemeValue::into_color_map)
        .unwrap_or_else(|| radial_colors.clone());
    let rep_radial_lengths: LengthMap = theme
        .get("repeatingRadialGradients.lengths")
        .map(ThemeValue::into_axis_map)
        .unwrap_or_default();

    let rep_conic_angles = theme
        .get("repeatingConicGradients.startingAngles")
        .map(ThemeValue::into_axis_map)
        .unwrap_or_else(|| conic_angles.clone());
    let rep_conic_positions = theme
        .get("repeatingConicGradients.positions")
        .map(ThemeValue::into_axis_map)
        .unwrap_or_else(|| conic_positions.clone());
    let rep_conic_colors = theme
        .get("repeatingConicGradients.colors")
        .map(ThemeValue::into_color_map)
        .unwrap_or_else(|| conic_colors.clone());
    let rep_conic_lengths: LengthMap = theme
        .get("repeatingConicGradients.lengths")
        .map(ThemeValue::into_axis_map)
        .unwrap_or_default();

    let mut none = UtilityMap::new();
    none.insert(
        format!(".{}", escape("bg-none")),
        IndexMap::from([(BACKGROUND_IMAGE.to_string(), "none".to_string())]),
    );

    let families = vec![
        (none, host.variants("backgroundImage", &DEFAULT_VARIANTS)),
        (
            expand::expand_linear(&linear_directions, &linear_colors, None, &escape),
            host.variants("linearGradients", &DEFAULT_VARIANTS),
        ),
        (
            expand::expand_radial(
                &radial_shapes,
                &radial_sizes,
                &radial_positions,
                &radial_colors,
                None,
                &escape,
            ),
            host.variants("radialGradients", &DEFAULT_VARIANTS),
        ),
        (
            expand::expand_conic(&conic_angles, &conic_positions, &conic_colors, None, &escape),
            host.variants("conicGradients", &DEFAULT_VARIANTS),
        ),
        (
            expand::expand_linear(
                &rep_linear_directions,
                &rep_linear_colors,
                Some(&rep_linear_lengths),
                &escape,
            ),
            host.variants("repeatingLinearGradients", &DEFAULT_VARIANTS),
        ),
        (
            expand::expand_radial(
                &rep_radial_shapes,
                &rep_radial_sizes,
                &rep_radial_positions,
                &rep_radial_colors,
                Some(&rep_radial_lengths),
                &escape,
            ),
            host.variants("repeatingRadialGradients", &DEFAULT_VARIANTS),
        ),
        (
            expand::expand_conic(
                &rep_conic_angles,
                &rep_conic_positions,
                &rep_conic_colors,
                Some(&rep_conic_lengths),
                &escape,
            ),
            host.variants("repeatingConicGradients", &DEFAULT_VARIANTS),
        ),
    ];

    log::debug!(
        "expanded {} gradient utilities across {} families",
        families.iter().map(|(u, _)| u.len()).sum::<usize>(),
        families.len(),
    );

    families
}

#[cfg(test)]
mod plugin_tests {
    use super::*;

    #[derive(Default)]
    struct TestHost {
        theme: IndexMap<String, ThemeValue>,
        variants: IndexMap<String, Vec<String>>,
        calls: Vec<(UtilityMap, Vec<String>)>,
    }

    impl TestHost {
        fn with_theme<I>(entries: I) -> Self
        where
            I: IntoIterator<Item = (&'static str, ThemeValue)>,
        {
            Self {
                theme: entries.into_iter().map(|(k, v)| (k.to_string(), v)).collect(),
                ..Self::default()
            }
        }

        fn all_selectors(&self) -> Vec<&str> {
            self.calls
                .iter()
                .flat_map(|(u, _)| u.keys().map(String::as_str))
                .collect()
        }
    }

    impl Host for TestHost {
        fn theme(&self, path: &str) -> Option<ThemeValue> {
            self.theme.get(path).cloned()
        }

        fn variants(&self, group: &str, default: &[&str]) -> Vec<String> {
            self.variants
                .get(group)
                .cloned()
                .unwrap_or_else(|| default.iter().map(|s| s.to_string()).collect())
        }

        fn escape(&self, raw: &str) -> String {
            raw.to_string()
        }

        fn add_utilities(&mut self, utilities: UtilityMap, variants: Vec<String>) {
            self.calls.push((utilities, variants));
        }
    }

    #[test]
    fn sink_is_called_once_per_family_in_order() {
        let mut host = TestHost::default();
        add_gradient_utilities(&mut host);
        assert_eq!(host.calls.len(), 7);
        // With no colors configured only the static `none` group has content.
        assert_eq!(host.calls[0].0.len(), 1);
        assert!(host.calls[0].0.contains_key(".bg-none"));
        for (utilities, _) in &host.calls[1..] {
            assert!(utilities.is_empty());
        }
    }

    #[test]
    fn bg_none_maps_to_background_image_none() {
        let mut host = TestHost::default();
        add_gradient_utilities(&mut host);
        assert_eq!(host.calls[0].0[".bg-none"][BACKGROUND_IMAGE], "none");
    }

    #[test]
    fn group_variants_override_the_default() {
        let mut host = TestHost::with_theme([(
            "linearGradients.colors",
            ThemeValue::map([("red", "#f00")]),
        )]);
        host.variants.insert(
            "linearGradients".to_string(),
            vec!["hover".to_string(), "focus".to_string()],
        );
        add_gradient_utilities(&mut host);
        assert_eq!(host.calls[1].1, ["hover", "focus"]);
        assert_eq!(host.calls[0].1, ["responsive"]);
    }

    #[test]
    fn repeating_families_reuse_non_repeating_axes() {
        let mut host = TestHost::with_theme([
            ("linearGradients.directions", ThemeValue::map([("r", "to right")])),
            ("linearGradients.colors", ThemeValue::map([("red", "#f00")])),
            ("repeatingLinearGradients.lengths", ThemeValue::map([("sm", "20px")])),
        ]);
        add_gradient_utilities(&mut host);
        let (repeating, _) = &host.calls[4];
        assert_eq!(
            repeating[".bg-gradient-r-red-sm"][BACKGROUND_IMAGE],
            "repeating-linear-gradient(to right, rgba(255, 0, 0, 0), #f00 20px)"
        );
    }

    #[test]
    fn repeating_family_without_lengths_is_silent() {
        let mut host = TestHost::with_theme([
            ("linearGradients.colors", ThemeValue::map([("red", "#f00")])),
        ]);
        add_gradient_utilities(&mut host);
        assert!(host.calls[4].0.is_empty());
        assert!(host.calls[5].0.is_empty());
        assert!(host.calls[6].0.is_empty());
    }

    #[test]
    fn escaper_runs_before_the_dot_prefix() {
        struct EscHost(TestHost);
        impl Host for EscHost {
            fn theme(&self, path: &str) -> Option<ThemeValue> {
                self.0.theme(path)
            }
            fn variants(&self, group: &str, default: &[&str]) -> Vec<String> {
                self.0.variants(group, default)
            }
            fn escape(&self, raw: &str) -> String {
                raw.replace(':', "\\:")
            }
            fn add_utilities(&mut self, utilities: UtilityMap, variants: Vec<String>) {
                self.0.add_utilities(utilities, variants);
            }
        }
        let mut host = EscHost(TestHost::with_theme([(
            "linearGradients.colors",
            ThemeValue::map([("red:500", "#f00")]),
        )]));
        add_gradient_utilities(&mut host);
        assert!(host.0.calls[1].0.contains_key(".bg-gradient-t-red\\:500"));
    }

    #[test]
    fn two_runs_produce_identical_output() {
        let theme = [
            ("linearGradients.colors", ThemeValue::map([("red", "#f00"), ("teal", "#0aa")])),
            ("radialGradients.colors", ThemeValue::map([("blue", "#00f")])),
            ("repeatingConicGradients.lengths", ThemeValue::map([("wide", "45deg")])),
            ("conicGradients.colors", ThemeValue::map([("gold", "#fa0")])),
        ];
        let mut first = TestHost::with_theme(theme.clone());
        let mut second = TestHost::with_theme(theme);
        add_gradient_utilities(&mut first);
        add_gradient_utilities(&mut second);
        assert_eq!(first.all_selectors(), second.all_selectors());
        for (a, b) in first.calls.iter().zip(&second.calls) {
            assert_eq!(a.0, b.0);
            assert_eq!(a.1, b.1);
        }
    }
}

//! Expansion engine for **gradient utility classes**.
//!
//! Takes a declarative theme (color stops, directions, shapes, sizes,
//! positions, starting angles, repetition lengths) and expands it into a
//! flat mapping of class-name selectors to `background-image` declarations
//! for linear, radial, and conic gradients, plus their repeating forms.
//!
//! The crate is a pure transform: no I/O, no caching, no shared state. The
//! embedding host supplies theme lookup, variant resolution, and selector
//! escaping through the [`Host`] trait, and receives one utility mapping
//! per family through its sink.
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`theme`] | `ThemeValue`, `ThemeResolver`, axis map types, built-in defaults |
//! | [`color`] | color-list normalization and zero-alpha computation |
//! | [`value`] | gradient function-call builders with native-default elision |
//! | [`selector`] | class-name builders with `default`-key elision |
//! | [`expand`] | per-family Cartesian expansion |
//! | [`plugin`] | the [`Host`] seam and family orchestration |
//!
//! # Quick start
//!
//! ```rust,ignore
//! use gradweave_core::{add_gradient_utilities, Host};
//!
//! let mut host = MyHost::from_config("gradients.json")?;
//! add_gradient_utilities(&mut host);
//! // host now holds entries like:
//! //   .bg-gradient-t-red { background-image: linear-gradient(to top, rgba(255, 0, 0, 0), #f00) }
//! ```

pub mod color;
pub mod expand;
pub mod plugin;
pub mod selector;
pub mod theme;
pub mod value;

pub use expand::{BACKGROUND_IMAGE, DeclarationBlock, UtilityMap};
pub use plugin::{DEFAULT_VARIANTS, Host, add_gradient_utilities};
pub use theme::{AxisMap, ColorMap, ColorSpec, LengthMap, ThemeResolver, ThemeValue};

#[cfg(test)]
mod scenario_tests {
    use indexmap::IndexMap;

    use super::*;

    #[derive(Default)]
    struct CollectingHost {
        theme: IndexMap<String, ThemeValue>,
        families: Vec<UtilityMap>,
    }

    impl CollectingHost {
        fn new<I>(entries: I) -> Self
        where
            I: IntoIterator<Item = (&'static str, ThemeValue)>,
        {
            Self {
                theme: entries.into_iter().map(|(k, v)| (k.to_string(), v)).collect(),
                families: Vec::new(),
            }
        }

        fn run(mut self) -> Vec<UtilityMap> {
            add_gradient_utilities(&mut self);
            self.families
        }
    }

    impl Host for CollectingHost {
        fn theme(&self, path: &str) -> Option<ThemeValue> {
            self.theme.get(path).cloned()
        }

        fn variants(&self, _group: &str, default: &[&str]) -> Vec<String> {
            default.iter().map(|s| s.to_string()).collect()
        }

        fn escape(&self, raw: &str) -> String {
            raw.to_string()
        }

        fn add_utilities(&mut self, utilities: UtilityMap, _variants: Vec<String>) {
            self.families.push(utilities);
        }
    }

    #[test]
    fn scalar_color_fades_from_transparent_toward_the_direction() {
        let families = CollectingHost::new([
            ("linearGradients.directions", ThemeValue::map([("t", "to top")])),
            ("linearGradients.colors", ThemeValue::map([("red", "#f00")])),
        ])
        .run();
        let linear = &families[1];
        assert_eq!(linear.len(), 1);
        assert_eq!(
            linear[".bg-gradient-t-red"][BACKGROUND_IMAGE],
            "linear-gradient(to top, rgba(255, 0, 0, 0), #f00)"
        );
    }

    #[test]
    fn explicit_stop_lists_pass_through_and_default_direction_is_elided() {
        let families = CollectingHost::new([
            ("linearGradients.directions", ThemeValue::map([("to-bottom", "to bottom")])),
            (
                "linearGradients.colors",
                ThemeValue::Map(IndexMap::from([(
                    "red-green".to_string(),
                    ThemeValue::List(vec!["#f00".to_string(), "#0f0".to_string()]),
                )])),
            ),
        ])
        .run();
        assert_eq!(
            families[1][".bg-gradient-to-bottom-red-green"][BACKGROUND_IMAGE],
            "linear-gradient(#f00, #0f0)"
        );
    }

    #[test]
    fn radial_default_keys_elide_segments_while_values_decide_clauses() {
        let families = CollectingHost::new([
            ("radialGradients.shapes", ThemeValue::map([("default", "circle")])),
            ("radialGradients.sizes", ThemeValue::map([("default", "closest-side")])),
            ("radialGradients.positions", ThemeValue::map([("default", "center")])),
            ("radialGradients.colors", ThemeValue::map([("red", "#f00")])),
        ])
        .run();
        let radial = &families[2];
        assert_eq!(radial.len(), 1);
        // Keys all elide (class is bare), but circle and closest-side differ
        // from the native defaults so both clauses are emitted; the centered
        // position is elided by value.
        assert_eq!(
            radial[".bg-radial-red"][BACKGROUND_IMAGE],
            "radial-gradient(circle closest-side, #f00, rgba(255, 0, 0, 0))"
        );
    }

    #[test]
    fn repeating_family_with_empty_lengths_emits_nothing() {
        let families = CollectingHost::new([
            ("linearGradients.colors", ThemeValue::map([("red", "#f00")])),
            ("repeatingLinearGradients.lengths", ThemeValue::Map(IndexMap::new())),
        ])
        .run();
        assert!(families[4].is_empty());
    }

    #[test]
    fn default_keyed_value_that_is_not_the_native_default_still_emits() {
        // The class name elides the `default` position key, but `55% 60%`
        // is not a centered spelling, so the `at` clause stays.
        let families = CollectingHost::new([
            ("radialGradients.positions", ThemeValue::map([("default", "55% 60%")])),
            ("radialGradients.colors", ThemeValue::map([("red", "#f00")])),
        ])
        .run();
        assert_eq!(
            families[2][".bg-radial-red"][BACKGROUND_IMAGE],
            "radial-gradient(closest-side at 55% 60%, #f00, rgba(255, 0, 0, 0))"
        );
    }

    #[test]
    fn rejected_keyword_colors_emit_no_utilities_anywhere() {
        let families = CollectingHost::new([
            (
                "linearGradients.colors",
                ThemeValue::map([("bad", "unset"), ("red", "#f00")]),
            ),
            ("radialGradients.colors", ThemeValue::map([("worse", "revert")])),
        ])
        .run();
        assert!(families[1].keys().all(|k| !k.contains("bad")));
        assert_eq!(families[1].len(), theme::default_directions().len());
        assert!(families[2].is_empty());
    }

    #[test]
    fn conic_gradients_expand_with_angles_and_positions() {
        let families = CollectingHost::new([
            (
                "conicGradients.startingAngles",
                ThemeValue::map([("default", "0"), ("90", "90deg")]),
            ),
            ("conicGradients.positions", ThemeValue::map([("default", "center"), ("t", "top")])),
            ("conicGradients.colors", ThemeValue::map([("gold", "#fa0")])),
        ])
        .run();
        let conic = &families[3];
        assert_eq!(conic.len(), 4);
        assert_eq!(
            conic[".bg-conic-90-t-gold"][BACKGROUND_IMAGE],
            "conic-gradient(from 90deg at top, rgba(255, 170, 0, 0), #fa0)"
        );
    }

    #[test]
    fn deferred_color_axis_resolves_against_the_theme() {
        use std::sync::Arc;
        let families = CollectingHost::new([
            ("palette", ThemeValue::map([("brand", "#07c")])),
            (
                "linearGradients.colors",
                ThemeValue::Deferred(Arc::new(|theme: &ThemeResolver<'_>| {
                    theme.get("palette").unwrap_or(ThemeValue::Map(IndexMap::new()))
                })),
            ),
            ("linearGradients.directions", ThemeValue::map([("r", "to right")])),
        ])
        .run();
        assert_eq!(
            families[1][".bg-gradient-r-brand"][BACKGROUND_IMAGE],
            "linear-gradient(to right, rgba(0, 119, 204, 0), #07c)"
        );
    }
}

use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;

// ── Axis maps ─────────────────────────────────────────────────────────────

/// Ordered key → CSS value mapping for one geometry axis
/// (directions, shapes, sizes, positions, starting angles).
///
/// The key `default` is reserved: it is elided from class names, and by
/// convention holds the CSS-native default value for that argument slot.
pub type AxisMap = IndexMap<String, String>;

/// Ordered key → CSS length/percentage mapping (repeating families only).
///
/// An empty map switches the whole repeating family off: repetition without
/// a stated length is undefined in CSS, so no utilities are produced.
pub type LengthMap = IndexMap<String, String>;

/// Ordered key → color specification mapping.
pub type ColorMap = IndexMap<String, ColorSpec>;

/// One configured gradient color entry.
///
/// A single token is expanded to two stops by the normalizer; a list of two
/// or more stops passes through untouched (stops may carry trailing CSS
/// positions, e.g. `"#fff 45%"`).
#[derive(Debug, Clone, PartialEq)]
pub enum ColorSpec {
    Single(String),
    Stops(Vec<String>),
}

// ── Theme values ──────────────────────────────────────────────────────────

/// A resolved-theme configuration value as handed over by the host.
///
/// `Deferred` models configuration-as-closures: an axis given as a function
/// of the theme resolver (e.g. "reuse the global color palette"). It is
/// applied exactly once, before expansion, producing a plain value.
#[derive(Clone)]
pub enum ThemeValue {
    Str(String),
    List(Vec<String>),
    Map(IndexMap<String, ThemeValue>),
    Deferred(Arc<dyn Fn(&ThemeResolver<'_>) -> ThemeValue + Send + Sync>),
}

impl fmt::Debug for ThemeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThemeValue::Str(s) => f.debug_tuple("Str").field(s).finish(),
            ThemeValue::List(v) => f.debug_tuple("List").field(v).finish(),
            ThemeValue::Map(m) => f.debug_tuple("Map").field(m).finish(),
            ThemeValue::Deferred(_) => f.write_str("Deferred(..)"),
        }
    }
}

impl From<&str> for ThemeValue {
    fn from(s: &str) -> Self {
        ThemeValue::Str(s.to_string())
    }
}

impl From<String> for ThemeValue {
    fn from(s: String) -> Self {
        ThemeValue::Str(s)
    }
}

impl ThemeValue {
    /// Builds a `Map` value from string pairs. Convenience for hosts and tests.
    pub fn map<K, V, I>(entries: I) -> Self
    where
        K: Into<String>,
        V: Into<ThemeValue>,
        I: IntoIterator<Item = (K, V)>,
    {
        ThemeValue::Map(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Applies a `Deferred` value to the resolver; plain values pass through.
    ///
    /// Applied once, not recursively: a closure is expected to return a plain
    /// mapping, mirroring how function-valued theme entries behave upstream.
    pub fn resolve(self, theme: &ThemeResolver<'_>) -> ThemeValue {
        match self {
            ThemeValue::Deferred(f) => f(theme),
            other => other,
        }
    }

    /// Flattens a `Map` into a string axis map. Non-string entries are
    /// dropped; they have no meaning as a geometry or length value.
    pub fn into_axis_map(self) -> AxisMap {
        match self {
            ThemeValue::Map(m) => m
                .into_iter()
                .filter_map(|(k, v)| match v {
                    ThemeValue::Str(s) => Some((k, s)),
                    _ => None,
                })
                .collect(),
            _ => AxisMap::new(),
        }
    }

    /// Flattens a `Map` into a color map: string entries become scalar color
    /// specs, list entries become explicit stop lists.
    pub fn into_color_map(self) -> ColorMap {
        match self {
            ThemeValue::Map(m) => m
                .into_iter()
                .filter_map(|(k, v)| match v {
                    ThemeValue::Str(s) => Some((k, ColorSpec::Single(s))),
                    ThemeValue::List(stops) => Some((k, ColorSpec::Stops(stops))),
                    _ => None,
                })
                .collect(),
            _ => ColorMap::new(),
        }
    }
}

// ── Theme resolver ────────────────────────────────────────────────────────

/// Host-supplied lookup from a dotted theme path (e.g.
/// `"linearGradients.colors"`) to a configured value.
///
/// `get` resolves `Deferred` values by handing the resolver back to them, so
/// axis closures can cross-reference other theme paths.
pub struct ThemeResolver<'a> {
    lookup: &'a dyn Fn(&str) -> Option<ThemeValue>,
}

impl<'a> ThemeResolver<'a> {
    pub fn new(lookup: &'a dyn Fn(&str) -> Option<ThemeValue>) -> Self {
        Self { lookup }
    }

    pub fn get(&self, path: &str) -> Option<ThemeValue> {
        (self.lookup)(path).map(|v| v.resolve(self))
    }

    pub fn get_or(&self, path: &str, fallback: ThemeValue) -> ThemeValue {
        self.get(path).unwrap_or(fallback)
    }
}

// ── Built-in axis defaults ────────────────────────────────────────────────

/// Compass direction axis used by linear gradients when the theme has none.
pub fn default_directions() -> AxisMap {
    [
        ("t", "to top"),
        ("tr", "to top right"),
        ("r", "to right"),
        ("br", "to bottom right"),
        ("b", "to bottom"),
        ("bl", "to bottom left"),
        ("l", "to left"),
        ("tl", "to top left"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect()
}

/// Position axis shared by radial and conic gradients: `default` (center)
/// plus the eight compass points.
pub fn default_positions() -> AxisMap {
    [
        ("default", "center"),
        ("t", "top"),
        ("tr", "top right"),
        ("r", "right"),
        ("br", "bottom right"),
        ("b", "bottom"),
        ("bl", "bottom left"),
        ("l", "left"),
        ("tl", "top left"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect()
}

pub fn default_shapes() -> AxisMap {
    [("default".to_string(), "ellipse".to_string())].into()
}

pub fn default_sizes() -> AxisMap {
    [("default".to_string(), "closest-side".to_string())].into()
}

pub fn default_starting_angles() -> AxisMap {
    [("default".to_string(), "0".to_string())].into()
}

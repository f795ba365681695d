//! JSON-backed implementation of the core's [`Host`] trait.
//!
//! Config shape:
//!
//! ```json
//! {
//!   "theme": {
//!     "linearGradients": { "colors": { "red": "#f00" } },
//!     "screens": { "sm": "640px" }
//!   },
//!   "variants": { "linearGradients": ["hover", "responsive"] }
//! }
//! ```

use anyhow::{Result, bail};
use gradweave_core::{AxisMap, Host, ThemeValue, UtilityMap};
use indexmap::IndexMap;
use serde_json::Value;

use crate::css;

pub struct JsonHost {
    theme: Value,
    variants: IndexMap<String, Vec<String>>,
    /// One entry per family, in family order, filled by the core's sink.
    pub families: Vec<(UtilityMap, Vec<String>)>,
}

impl JsonHost {
    pub fn from_config(config: &Value) -> Result<Self> {
        let Some(root) = config.as_object() else {
            bail!("config root must be a JSON object");
        };

        let theme = root.get("theme").cloned().unwrap_or(Value::Null);
        if !(theme.is_null() || theme.is_object()) {
            bail!("\"theme\" must be an object");
        }

        let mut variants = IndexMap::new();
        if let Some(value) = root.get("variants") {
            let Some(groups) = value.as_object() else {
                bail!("\"variants\" must be an object of string arrays");
            };
            for (group, list) in groups {
                let Some(items) = list.as_array() else {
                    bail!("variants for {group:?} must be an array");
                };
                let mut names = Vec::with_capacity(items.len());
                for item in items {
                    match item.as_str() {
                        Some(name) => names.push(name.to_string()),
                        None => bail!("variants for {group:?} must all be strings"),
                    }
                }
                variants.insert(group.clone(), names);
            }
        }

        Ok(Self { theme, variants, families: Vec::new() })
    }

    /// Responsive breakpoints configured at theme path `screens`.
    pub fn screens(&self) -> AxisMap {
        self.lookup("screens")
            .map(ThemeValue::into_axis_map)
            .unwrap_or_default()
    }

    fn lookup(&self, path: &str) -> Option<ThemeValue> {
        let mut node = &self.theme;
        for part in path.split('.') {
            node = node.as_object()?.get(part)?;
        }
        json_to_theme(node)
    }
}

impl Host for JsonHost {
    fn theme(&self, path: &str) -> Option<ThemeValue> {
        self.lookup(path)
    }

    fn variants(&self, group: &str, default: &[&str]) -> Vec<String> {
        self.variants
            .get(group)
            .cloned()
            .unwrap_or_else(|| default.iter().map(|s| s.to_string()).collect())
    }

    fn escape(&self, raw: &str) -> String {
        css::escape_class(raw)
    }

    fn add_utilities(&mut self, utilities: UtilityMap, variants: Vec<String>) {
        self.families.push((utilities, variants));
    }
}

/// Maps JSON onto the core's theme value tree. Numbers become their string
/// spelling (a JSON `0` starting angle means CSS `0`); booleans and nulls
/// have no CSS meaning and drop out.
fn json_to_theme(value: &Value) -> Option<ThemeValue> {
    match value {
        Value::String(s) => Some(ThemeValue::Str(s.clone())),
        Value::Number(n) => Some(ThemeValue::Str(n.to_string())),
        Value::Array(items) => Some(ThemeValue::List(
            items
                .iter()
                .filter_map(|item| match item {
                    Value::String(s) => Some(s.clone()),
                    Value::Number(n) => Some(n.to_string()),
                    _ => None,
                })
                .collect(),
        )),
        Value::Object(map) => Some(ThemeValue::Map(
            map.iter()
                .filter_map(|(k, v)| json_to_theme(v).map(|tv| (k.clone(), tv)))
                .collect(),
        )),
        Value::Bool(_) | Value::Null => None,
    }
}

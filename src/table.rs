use std::collections::{BTreeMap, HashSet};

use crate::color::{decode_spec, RGB};
use crate::csscolors::CSS_COLORS;

/// Reserved name of the fallback color.
pub const DEFAULT_NAME: &str = "default";

/// Spec bound to `default` unless the user overrides it.
pub const DEFAULT_SPEC: &str = "peru";

/// A user override for one color name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Override {
    /// Define (or redefine) the name with a color spec: a name, `rgb()`, or hex.
    Spec(String),
    /// Remove the name from the effective table. Needed for base colors,
    /// which would otherwise reappear when the override is dropped.
    Removed,
}

/// The effective color table: the CSS colors plus `default`, with user
/// overrides merged on top and removals applied.
///
/// Always contains `default`.
#[derive(Debug, Clone)]
pub struct ColorTable {
    colors: BTreeMap<String, RGB>,
    default_spec: String,
}

impl ColorTable {
    /// The CSS colors with `default` seeded to peru.
    pub fn builtin() -> Self {
        let mut colors: BTreeMap<String, RGB> = CSS_COLORS
            .iter()
            .map(|(name, rgb)| (name.to_string(), *rgb))
            .collect();
        let default_rgb = colors
            .get(DEFAULT_SPEC)
            .copied()
            .unwrap_or(RGB::new(205, 133, 63));
        colors.insert(DEFAULT_NAME.to_string(), default_rgb);

        ColorTable {
            colors,
            default_spec: DEFAULT_SPEC.to_string(),
        }
    }

    /// Build the effective table from the builtin colors and `overrides`.
    ///
    /// Returns the table and the names of overrides that could not be
    /// applied (specs that never decode, or removal of `default`).
    pub fn with_overrides(overrides: &BTreeMap<String, Override>) -> (Self, Vec<String>) {
        let mut table = Self::builtin();
        let skipped = table.apply_overrides(overrides);
        (table, skipped)
    }

    fn apply_overrides(&mut self, overrides: &BTreeMap<String, Override>) -> Vec<String> {
        let mut pending: Vec<(&str, &str)> = overrides
            .iter()
            .filter_map(|(name, o)| match o {
                Override::Spec(spec) => Some((name.as_str(), spec.as_str())),
                Override::Removed => None,
            })
            .collect();

        // Apply until no more progress, so an alias always sees the final
        // value of the override it names, whatever the file order.
        let mut strict = true;
        loop {
            let before = pending.len();
            let waiting: HashSet<&str> = pending.iter().map(|(name, _)| *name).collect();

            pending.retain(|&(name, spec)| {
                if strict && spec != name && waiting.contains(spec) {
                    return true;
                }
                match decode_spec(spec, self) {
                    Some(rgb) => {
                        self.colors.insert(name.to_string(), rgb);
                        if name == DEFAULT_NAME {
                            self.default_spec = spec.to_string();
                        }
                        false
                    }
                    None => true,
                }
            });

            if pending.is_empty() {
                break;
            }
            if pending.len() == before {
                // Alias cycle or undecodable specs; one relaxed pass then stop
                if !strict {
                    break;
                }
                strict = false;
            }
        }

        let mut skipped: Vec<String> = pending.iter().map(|(name, _)| name.to_string()).collect();

        // Removals go last, so aliases of removed colors still resolve.
        for (name, o) in overrides {
            if *o != Override::Removed {
                continue;
            }
            if name == DEFAULT_NAME {
                skipped.push(name.clone());
            } else {
                self.colors.remove(name);
            }
        }

        skipped
    }

    pub fn get(&self, name: &str) -> Option<RGB> {
        self.colors.get(name).copied()
    }

    /// All names in lexicographic order.
    pub fn names(&self) -> Vec<&str> {
        self.colors.keys().map(String::as_str).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// The color bound to `default`.
    pub fn default_rgb(&self) -> RGB {
        self.get(DEFAULT_NAME).unwrap_or(RGB::new(205, 133, 63))
    }

    /// The spec `default` was defined with (`peru` unless overridden).
    pub fn default_spec(&self) -> &str {
        &self.default_spec
    }

    #[cfg(test)]
    pub(crate) fn from_colors(colors: &[(&str, RGB)]) -> Self {
        ColorTable {
            colors: colors
                .iter()
                .map(|(name, rgb)| (name.to_string(), *rgb))
                .collect(),
            default_spec: DEFAULT_SPEC.to_string(),
        }
    }
}

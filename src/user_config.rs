use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::color::RGB;
use crate::csscolors;
use crate::table::{ColorTable, Override, DEFAULT_NAME};

/// Get the config file path for a given home directory.
fn config_file_path_for_home(home: &Path) -> PathBuf {
    home.join(".config").join("tabset").join("config.toml")
}

/// Get the path to the user config file.
pub fn config_file_path() -> PathBuf {
    let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
    config_file_path_for_home(Path::new(&home))
}

/// Which string a setting default applies to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Setting {
    All,
    Title,
    Badge,
}

/// Fallback values for `--all`, `--title` and `--badge` when no value is given.
#[derive(Debug, Clone, PartialEq)]
pub struct Defaults {
    pub all: Option<String>,
    pub title: Option<String>,
    pub badge: Option<String>,
}

impl Default for Defaults {
    fn default() -> Self {
        Defaults {
            all: Some(".".to_string()),
            title: Some(".".to_string()),
            badge: Some(".".to_string()),
        }
    }
}

impl Defaults {
    /// Resolve a title/badge/all string.
    ///
    /// A missing value falls back to the configured default. `.` (or the
    /// cwd itself) means the cwd's basename; `~` (or the home directory)
    /// means the cwd with home abbreviated to `~`.
    pub fn setting(
        &self,
        category: Setting,
        value: Option<&str>,
        cwd: &Path,
        home: Option<&Path>,
    ) -> Option<String> {
        let value = match value {
            Some(v) if !v.is_empty() => v,
            _ => match category {
                Setting::All => self.all.as_deref()?,
                Setting::Title => self.title.as_deref()?,
                Setting::Badge => self.badge.as_deref()?,
            },
        };

        if value == "~" || home.is_some_and(|h| Path::new(value) == h) {
            return Some(tildify(cwd, home));
        }
        if value == "." || Path::new(value) == cwd {
            return Some(basename(cwd));
        }
        Some(value.to_string())
    }
}

fn basename(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned())
}

fn tildify(path: &Path, home: Option<&Path>) -> String {
    match home.and_then(|h| path.strip_prefix(h).ok()) {
        Some(rest) if rest.as_os_str().is_empty() => "~".to_string(),
        Some(rest) => format!("~/{}", rest.display()),
        None => path.display().to_string(),
    }
}

/// User color overrides and setting defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct UserConfig {
    pub colors: BTreeMap<String, Override>,
    pub defaults: Defaults,
}

impl Default for UserConfig {
    fn default() -> Self {
        let mut colors = BTreeMap::new();
        colors.insert(
            "alisongreen".to_string(),
            Override::Spec("rgb(125,199,53)".to_string()),
        );
        UserConfig {
            colors,
            defaults: Defaults::default(),
        }
    }
}

impl UserConfig {
    /// Define `name` as `spec`. The spec must resolve when merged with the
    /// other overrides, so it may alias custom or removed colors. Returns
    /// the stored (lowercased) name and the color it resolved to.
    pub fn add_color(&mut self, name: &str, spec: &str) -> Result<(String, RGB), String> {
        let name = name.trim().to_lowercase();
        if name.is_empty() {
            return Err("Error: color name must not be empty".to_string());
        }
        let mut colors = self.colors.clone();
        colors.insert(name.clone(), Override::Spec(spec.to_string()));
        let (table, skipped) = ColorTable::with_overrides(&colors);
        let rgb = match table.get(&name) {
            Some(rgb) if !skipped.contains(&name) => rgb,
            _ => return Err(format!("Invalid color '{}' for {}", spec, name)),
        };
        self.colors = colors;
        Ok((name, rgb))
    }

    /// Remove `name` from use. Base colors are marked removed so they stay
    /// hidden; custom colors are dropped from the config outright.
    pub fn delete_color(&mut self, name: &str) -> Result<(), String> {
        if name == DEFAULT_NAME {
            return match self.colors.remove(name) {
                Some(_) => Ok(()),
                None => Err("Error: the default color cannot be deleted".to_string()),
            };
        }
        if csscolors::is_css_color(name) {
            self.colors.insert(name.to_string(), Override::Removed);
            return Ok(());
        }
        match self.colors.remove(name) {
            Some(_) => Ok(()),
            None => Err(format!("Error: no such color \"{}\"", name)),
        }
    }

    /// Names marked removed, in order.
    pub fn removed(&self) -> Vec<&str> {
        self.colors
            .iter()
            .filter(|(_, o)| **o == Override::Removed)
            .map(|(name, _)| name.as_str())
            .collect()
    }
}

/// TOML structure of the config file.
#[derive(Debug, Default, serde::Serialize, serde::Deserialize)]
struct UserConfigToml {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    removed: Vec<String>,
    #[serde(default)]
    colors: BTreeMap<String, String>,
    #[serde(default)]
    defaults: Option<DefaultsToml>,
}

#[derive(Debug, Default, serde::Serialize, serde::Deserialize)]
struct DefaultsToml {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    all: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    badge: Option<String>,
}

impl From<UserConfigToml> for UserConfig {
    fn from(toml_config: UserConfigToml) -> Self {
        let mut colors: BTreeMap<String, Override> = toml_config
            .colors
            .into_iter()
            .map(|(name, spec)| (name.to_lowercase(), Override::Spec(spec)))
            .collect();
        // Removal wins over a definition of the same name
        for name in toml_config.removed {
            colors.insert(name.to_lowercase(), Override::Removed);
        }

        let defaults = match toml_config.defaults {
            Some(d) => Defaults {
                all: d.all,
                title: d.title,
                badge: d.badge,
            },
            None => Defaults::default(),
        };

        UserConfig { colors, defaults }
    }
}

impl From<&UserConfig> for UserConfigToml {
    fn from(config: &UserConfig) -> Self {
        let mut toml_config = UserConfigToml::default();
        for (name, o) in &config.colors {
            match o {
                Override::Spec(spec) => {
                    toml_config.colors.insert(name.clone(), spec.clone());
                }
                Override::Removed => toml_config.removed.push(name.clone()),
            }
        }
        toml_config.defaults = Some(DefaultsToml {
            all: config.defaults.all.clone(),
            title: config.defaults.title.clone(),
            badge: config.defaults.badge.clone(),
        });
        toml_config
    }
}

/// Load user configuration from ~/.config/tabset/config.toml.
/// Returns default config if file doesn't exist or can't be parsed.
pub fn load_user_config() -> UserConfig {
    load_user_config_from(&config_file_path())
}

/// Load user configuration from a specific file path.
/// Returns default config if file doesn't exist or can't be parsed.
pub fn load_user_config_from(config_path: &Path) -> UserConfig {
    let Ok(content) = fs::read_to_string(config_path) else {
        return UserConfig::default();
    };

    match toml::from_str::<UserConfigToml>(&content) {
        Ok(toml_config) => toml_config.into(),
        Err(e) => {
            eprintln!(
                "tabset: warning: failed to parse {}, using defaults: {}",
                config_path.display(),
                e
            );
            UserConfig::default()
        }
    }
}

/// Save user configuration to ~/.config/tabset/config.toml.
pub fn save_user_config(config: &UserConfig) -> Result<(), String> {
    save_user_config_to(&config_file_path(), config)
}

/// Save user configuration to a specific file path.
pub fn save_user_config_to(config_path: &Path, config: &UserConfig) -> Result<(), String> {
    // Create parent directories if needed
    if let Some(parent) = config_path.parent() {
        fs::create_dir_all(parent)
            .map_err(|e| format!("Error creating config directory: {}", e))?;
    }

    let content = toml::to_string_pretty(&UserConfigToml::from(config))
        .map_err(|e| format!("Error serializing config: {}", e))?;
    fs::write(config_path, content).map_err(|e| format!("Error writing config file: {}", e))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::RGB;
    use tempfile::TempDir;

    #[test]
    fn test_config_file_path_for_home() {
        let path = config_file_path_for_home(Path::new("/home/user"));
        assert_eq!(path, PathBuf::from("/home/user/.config/tabset/config.toml"));
    }

    #[test]
    fn test_load_missing_file_returns_defaults() {
        let temp = TempDir::new().unwrap();
        let config = load_user_config_from(&temp.path().join("config.toml"));
        assert_eq!(config, UserConfig::default());
        assert_eq!(
            config.colors.get("alisongreen"),
            Some(&Override::Spec("rgb(125,199,53)".to_string()))
        );
    }

    #[test]
    fn test_load_invalid_toml_returns_defaults() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(&path, "colors = [not valid").unwrap();
        assert_eq!(load_user_config_from(&path), UserConfig::default());
    }

    #[test]
    fn test_load_colors_removed_and_defaults() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(
            &path,
            r#"removed = ["PapayaWhip"]

[colors]
JS = "orchid"
server = "alisongreen"

[defaults]
title = "~"
"#,
        )
        .unwrap();

        let config = load_user_config_from(&path);
        assert_eq!(config.colors.get("js"), Some(&Override::Spec("orchid".to_string())));
        assert_eq!(config.colors.get("papayawhip"), Some(&Override::Removed));
        assert_eq!(config.defaults.title.as_deref(), Some("~"));
        assert_eq!(config.defaults.all, None);
        assert_eq!(config.removed(), vec!["papayawhip"]);
    }

    #[test]
    fn test_load_without_defaults_section_uses_dot() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(&path, "[colors]\nx = \"red\"\n").unwrap();
        assert_eq!(load_user_config_from(&path).defaults, Defaults::default());
    }

    #[test]
    fn test_removed_wins_over_definition() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(&path, "removed = [\"red\"]\n[colors]\nred = \"#000000\"\n").unwrap();
        assert_eq!(
            load_user_config_from(&path).colors.get("red"),
            Some(&Override::Removed)
        );
    }

    #[test]
    fn test_save_then_load_preserves_overrides() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nested").join("config.toml");

        let mut config = UserConfig::default();
        config
            .colors
            .insert("papayawhip".to_string(), Override::Removed);
        config.defaults.badge = None;
        save_user_config_to(&path, &config).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("removed"));
        assert!(content.contains("\"papayawhip\""));
        assert!(content.contains("[colors]"));
        assert!(!content.contains("badge"));

        assert_eq!(load_user_config_from(&path), config);
    }

    #[test]
    fn test_add_color_validates_and_lowercases() {
        let mut config = UserConfig::default();

        let (name, rgb) = config.add_color("MyGreen", "rgb(1, 2, 3)").unwrap();
        assert_eq!(name, "mygreen");
        assert_eq!(rgb, RGB::new(1, 2, 3));
        assert_eq!(
            config.colors.get("mygreen"),
            Some(&Override::Spec("rgb(1, 2, 3)".to_string()))
        );

        let err = config.add_color("bad", "notacolor").unwrap_err();
        assert!(err.contains("Invalid color"));
        assert!(!config.colors.contains_key("bad"));
        assert!(config.add_color("  ", "red").is_err());
    }

    #[test]
    fn test_add_color_alias_resolves_in_table() {
        let mut config = UserConfig::default();
        config.add_color("html", "gold").unwrap();
        let (merged, skipped) = ColorTable::with_overrides(&config.colors);
        assert!(skipped.is_empty());
        assert_eq!(merged.get("html"), Some(RGB::new(255, 215, 0)));
    }

    #[test]
    fn test_add_color_may_alias_a_removed_color() {
        let mut config = UserConfig::default();
        config.delete_color("papayawhip").unwrap();

        let (name, rgb) = config.add_color("cream", "papayawhip").unwrap();
        assert_eq!(name, "cream");
        assert_eq!(rgb, RGB::new(255, 239, 213));

        let (table, _) = ColorTable::with_overrides(&config.colors);
        assert_eq!(table.get("cream"), Some(RGB::new(255, 239, 213)));
        assert_eq!(table.get("papayawhip"), None);
    }

    #[test]
    fn test_add_color_may_alias_another_custom_color() {
        let mut config = UserConfig::default();
        let (_, rgb) = config.add_color("server", "alisongreen").unwrap();
        assert_eq!(rgb, RGB::new(125, 199, 53));
    }

    #[test]
    fn test_add_color_rejects_bad_spec_for_base_name() {
        let mut config = UserConfig::default();
        assert!(config.add_color("red", "nope").is_err());
        assert!(!config.colors.contains_key("red"));
    }

    #[test]
    fn test_add_color_rejects_alias_cycle() {
        let mut config = UserConfig::default();
        config
            .colors
            .insert("ping".to_string(), Override::Spec("pong".to_string()));
        assert!(config.add_color("pong", "ping").is_err());
        assert!(!config.colors.contains_key("pong"));
    }

    #[test]
    fn test_delete_base_color_marks_removed() {
        let mut config = UserConfig::default();
        config.delete_color("papayawhip").unwrap();
        assert_eq!(config.colors.get("papayawhip"), Some(&Override::Removed));

        let (table, _) = ColorTable::with_overrides(&config.colors);
        assert_eq!(table.get("papayawhip"), None);
    }

    #[test]
    fn test_delete_redefined_base_color_marks_removed() {
        let mut config = UserConfig::default();
        config
            .colors
            .insert("red".to_string(), Override::Spec("#100000".to_string()));
        config.delete_color("red").unwrap();
        assert_eq!(config.colors.get("red"), Some(&Override::Removed));
    }

    #[test]
    fn test_delete_custom_color_drops_it() {
        let mut config = UserConfig::default();
        config.delete_color("alisongreen").unwrap();
        assert!(!config.colors.contains_key("alisongreen"));
    }

    #[test]
    fn test_delete_unknown_color_fails() {
        let mut config = UserConfig::default();
        let err = config.delete_color("nosuchcolor").unwrap_err();
        assert!(err.contains("no such color"));
    }

    #[test]
    fn test_delete_default() {
        let mut config = UserConfig::default();
        assert!(config.delete_color("default").is_err());

        config
            .colors
            .insert("default".to_string(), Override::Spec("gold".to_string()));
        config.delete_color("default").unwrap();
        assert!(!config.colors.contains_key("default"));
    }

    #[test]
    fn test_setting_explicit_value() {
        let defaults = Defaults::default();
        let cwd = Path::new("/home/user/proj");
        assert_eq!(
            defaults.setting(Setting::Title, Some("hello"), cwd, None),
            Some("hello".to_string())
        );
    }

    #[test]
    fn test_setting_dot_is_basename() {
        let defaults = Defaults::default();
        let cwd = Path::new("/home/user/proj");
        assert_eq!(
            defaults.setting(Setting::Badge, None, cwd, None),
            Some("proj".to_string())
        );
        assert_eq!(
            defaults.setting(Setting::Badge, Some("/home/user/proj"), cwd, None),
            Some("proj".to_string())
        );
    }

    #[test]
    fn test_setting_tilde_abbreviates_home() {
        let defaults = Defaults::default();
        let cwd = Path::new("/home/user/proj");
        let home = Path::new("/home/user");
        assert_eq!(
            defaults.setting(Setting::Title, Some("~"), cwd, Some(home)),
            Some("~/proj".to_string())
        );
        assert_eq!(
            defaults.setting(Setting::Title, Some("/home/user"), cwd, Some(home)),
            Some("~/proj".to_string())
        );
        assert_eq!(
            defaults.setting(Setting::Title, Some("~"), home, Some(home)),
            Some("~".to_string())
        );
    }

    #[test]
    fn test_setting_missing_default() {
        let defaults = Defaults {
            all: None,
            title: Some("~".to_string()),
            badge: None,
        };
        let cwd = Path::new("/tmp/x");
        assert_eq!(defaults.setting(Setting::All, None, cwd, None), None);
        assert_eq!(
            defaults.setting(Setting::Title, Some(""), cwd, None),
            Some("/tmp/x".to_string())
        );
    }
}

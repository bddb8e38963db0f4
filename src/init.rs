use std::path::Path;

use crate::table::Override;
use crate::user_config::{self, UserConfig};

/// A starter config: one custom color, aliases, and one removed base color.
fn sample_config() -> UserConfig {
    let mut config = UserConfig::default();
    for (name, spec) in [
        ("js", "orchid"),
        ("html", "gold"),
        ("server", "alisongreen"),
    ] {
        config
            .colors
            .insert(name.to_string(), Override::Spec(spec.to_string()));
    }
    config
        .colors
        .insert("papayawhip".to_string(), Override::Removed);
    config
}

/// Write a sample config file at `config_path`.
///
/// # Returns
/// * `Ok(())` if the file was written
/// * `Err(String)` if it already exists or can't be written
pub fn cmd_init(config_path: &Path) -> Result<(), String> {
    if config_path.exists() {
        return Err(format!(
            "Error: config file already exists at {}",
            config_path.display()
        ));
    }

    user_config::save_user_config_to(config_path, &sample_config())?;

    println!("Created {}", config_path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::RGB;
    use crate::table::ColorTable;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_init_creates_config() {
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join(".config").join("tabset").join("config.toml");

        cmd_init(&config_path).unwrap();

        assert!(config_path.exists());
        let config = user_config::load_user_config_from(&config_path);
        assert_eq!(config, sample_config());
    }

    #[test]
    fn test_init_fails_when_file_exists() {
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join("config.toml");
        fs::write(&config_path, "[colors]\n").unwrap();

        let result = cmd_init(&config_path);
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("already exists"));

        // Untouched
        assert_eq!(fs::read_to_string(&config_path).unwrap(), "[colors]\n");
    }

    #[test]
    fn test_sample_config_builds_clean_table() {
        let (table, skipped) = ColorTable::with_overrides(&sample_config().colors);
        assert!(skipped.is_empty());
        assert_eq!(table.get("server"), Some(RGB::new(125, 199, 53)));
        assert_eq!(table.get("js"), table.get("orchid"));
        assert_eq!(table.get("html"), Some(RGB::new(255, 215, 0)));
        assert_eq!(table.get("papayawhip"), None);
    }
}

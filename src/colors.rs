use console::{measure_text_width, pad_str, Alignment};

use crate::color::RGB;
use crate::csscolors;
use crate::table::{ColorTable, Override};
use crate::user_config::UserConfig;

const WRAP_WIDTH: usize = 70;
const SWATCH_WIDTH: usize = 9;

/// A block of `width` spaces with the given true-color background.
pub fn swatch(rgb: RGB, width: usize) -> String {
    let [r, g, b] = rgb.to_rgb8();
    format!("\x1b[48;2;{};{};{}m{}\x1b[0m", r, g, b, " ".repeat(width))
}

/// Greedy word wrap on spaces, measured in terminal columns with ANSI
/// escapes ignored. Words wider than `width` get their own line.
pub fn wrap(text: &str, width: usize) -> String {
    let mut lines: Vec<String> = Vec::new();
    let mut line = String::new();
    let mut line_width = 0;

    for word in text.split(' ').filter(|w| !w.is_empty()) {
        let word_width = measure_text_width(word);
        if line_width > 0 && line_width + 1 + word_width > width {
            lines.push(std::mem::take(&mut line));
            line_width = 0;
        }
        if line_width > 0 {
            line.push(' ');
            line_width += 1;
        }
        line.push_str(word);
        line_width += word_width;
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines.join("\n")
}

/// Render the custom colors as a name / swatch / definition table, followed
/// by the removed base colors.
pub fn format_list(user_config: &UserConfig, table: &ColorTable) -> String {
    if user_config.colors.is_empty() {
        return "no custom colors to list\n".to_string();
    }

    let name_width = user_config
        .colors
        .keys()
        .map(|k| measure_text_width(k))
        .max()
        .unwrap_or(0)
        + 1;
    let mut out = String::from("\n");
    out.push_str(&format!(
        "{} {} Definition\n",
        pad_str("Name", name_width, Alignment::Left, None),
        pad_str("Swatch", SWATCH_WIDTH, Alignment::Left, None)
    ));

    for (name, o) in &user_config.colors {
        let Override::Spec(spec) = o else {
            continue;
        };
        let sample = match table.get(name) {
            Some(rgb) => swatch(rgb, SWATCH_WIDTH),
            None => pad_str("(invalid)", SWATCH_WIDTH, Alignment::Left, None).into_owned(),
        };
        out.push_str(&format!(
            "{} {} {}\n",
            pad_str(name, name_width, Alignment::Left, None),
            sample,
            spec
        ));
    }

    let removed = user_config.removed();
    if !removed.is_empty() {
        let entries: Vec<String> = removed
            .iter()
            .map(|name| match csscolors::lookup(name) {
                Some(rgb) => format!("{}{}", name, swatch(rgb, 2)),
                None => name.to_string(),
            })
            .collect();
        out.push('\n');
        out.push_str(&wrap(&format!("Nulled: {}", entries.join(", ")), WRAP_WIDTH));
        out.push('\n');
    }

    out.push('\n');
    out
}

/// Print the custom colors (`--list`).
pub fn cmd_list(user_config: &UserConfig, table: &ColorTable) {
    print!("{}", format_list(user_config, table));
}

/// Render every name in the effective table, wrapped.
pub fn format_color_names(table: &ColorTable) -> String {
    wrap(
        &format!("named colors: {}", table.names().join(", ")),
        WRAP_WIDTH,
    )
}

/// Print every available color name (`--colors`).
pub fn cmd_colors(table: &ColorTable) {
    println!("{}", format_color_names(table));
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn test_swatch() {
        assert_eq!(
            swatch(RGB::new(1, 2, 3), 3),
            "\x1b[48;2;1;2;3m   \x1b[0m"
        );
        assert_eq!(
            swatch(RGB::new(999, 0, 0), 1),
            "\x1b[48;2;255;0;0m \x1b[0m"
        );
    }

    #[test]
    fn test_swatch_width_ignores_escapes() {
        assert_eq!(measure_text_width(&swatch(RGB::new(1, 2, 3), 4)), 4);
    }

    #[test]
    fn test_wrap_breaks_at_width() {
        let wrapped = wrap("aaa bbb ccc", 7);
        assert_eq!(wrapped, "aaa bbb\nccc");
    }

    #[test]
    fn test_wrap_counts_wide_characters_as_two_columns() {
        let wide = "緑".repeat(30);
        let wrapped = wrap(&format!("named colors: {}", wide), WRAP_WIDTH);
        let lines: Vec<&str> = wrapped.lines().collect();
        assert_eq!(lines, vec!["named colors:", wide.as_str()]);
    }

    #[test]
    fn test_wrap_keeps_swatches_on_a_line() {
        let entry = format!("red{}", swatch(RGB::new(255, 0, 0), 2));
        let text = format!("Nulled: {}, {}", entry, entry);
        assert_eq!(wrap(&text, 20), text);
    }

    #[test]
    fn test_wrap_long_word() {
        assert_eq!(wrap("a verylongword b", 4), "a\nverylongword\nb");
    }

    #[test]
    fn test_wrap_lines_fit() {
        let table = ColorTable::builtin();
        for line in format_color_names(&table).lines() {
            assert!(measure_text_width(line) <= WRAP_WIDTH, "too wide: {}", line);
        }
    }

    #[test]
    fn test_color_names_respect_removals() {
        let mut overrides = BTreeMap::new();
        overrides.insert("papayawhip".to_string(), Override::Removed);
        let (table, _) = ColorTable::with_overrides(&overrides);
        let names = format_color_names(&table);
        assert!(names.starts_with("named colors: aliceblue,"));
        assert!(!names.contains("papayawhip"));
    }

    #[test]
    fn test_format_list_empty() {
        let config = UserConfig {
            colors: BTreeMap::new(),
            ..UserConfig::default()
        };
        assert_eq!(
            format_list(&config, &ColorTable::builtin()),
            "no custom colors to list\n"
        );
    }

    #[test]
    fn test_format_list_rows_and_nulled() {
        let mut config = UserConfig::default();
        config
            .colors
            .insert("papayawhip".to_string(), Override::Removed);
        config
            .colors
            .insert("broken".to_string(), Override::Spec("nope".to_string()));
        let (table, _) = ColorTable::with_overrides(&config.colors);

        let out = format_list(&config, &table);
        assert!(out.contains("Name"));
        assert!(out.contains("Definition"));
        assert!(out.contains(&format!(
            "alisongreen  {} rgb(125,199,53)",
            swatch(RGB::new(125, 199, 53), SWATCH_WIDTH)
        )));
        assert!(out.contains("broken       (invalid) nope"));
        assert!(out.contains("Nulled: papayawhip\x1b[48;2;255;239;213m"));
    }

    #[test]
    fn test_format_list_aligns_wide_names() {
        let mut config = UserConfig {
            colors: BTreeMap::new(),
            ..UserConfig::default()
        };
        config
            .colors
            .insert("ab".to_string(), Override::Spec("red".to_string()));
        config
            .colors
            .insert("緑".to_string(), Override::Spec("green".to_string()));
        let (table, _) = ColorTable::with_overrides(&config.colors);

        let out = format_list(&config, &table);
        let red = swatch(RGB::new(255, 0, 0), SWATCH_WIDTH);
        let green = swatch(RGB::new(0, 128, 0), SWATCH_WIDTH);
        assert!(out.contains("Name Swatch    Definition\n"));
        assert!(out.contains(&format!("ab  {} red\n", red)));
        assert!(out.contains(&format!("緑  {} green\n", green)));
    }
}

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use clap::{ArgAction, Parser};

mod color;
mod colors;
mod csscolors;
mod init;
mod iterm;
mod resolve;
mod table;
mod user_config;

use iterm::TitleMode;
use resolve::{Choice, Request, Resolution, Resolver};
use table::ColorTable;
use user_config::{Setting, UserConfig};

#[derive(Parser, Debug)]
#[command(name = "tabset")]
#[command(about = "Set the color, title, and badge of an iTerm2 tab")]
#[command(disable_help_flag = true)]
struct Cli {
    /// Text for badge, title, and color at once (the color spec with --add)
    text: Vec<String>,

    /// Set badge, title, and color from one string
    #[arg(short, long, value_name = "TEXT")]
    all: Option<String>,

    /// Tab color: a name, rgb(), hex, part of a name, random, or RANDOM
    #[arg(short, long, value_name = "SPEC", num_args = 0..=1, default_missing_value = "")]
    color: Option<String>,

    /// Pick a named color by hashing this string
    #[arg(short = 'h', long, value_name = "SEED")]
    hash: Option<String>,

    /// Badge text
    #[arg(short, long, value_name = "TEXT", num_args = 0..=1, default_missing_value = "")]
    badge: Option<String>,

    /// Tab or window title
    #[arg(short, long, value_name = "TEXT", num_args = 0..=1, default_missing_value = "")]
    title: Option<String>,

    /// Title mode: 0 = window and tab, 1 = tab, 2 = window
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=2))]
    mode: Option<u8>,

    /// Print the current directory
    #[arg(long)]
    pwd: bool,

    /// Write a sample config file
    #[arg(long)]
    init: bool,

    /// Add a named color; the color spec is the free argument
    #[arg(long, value_name = "NAME", num_args = 0..=1, default_missing_value = "")]
    add: Option<String>,

    /// Delete a named color
    #[arg(long = "del", visible_alias = "delete", value_name = "NAME", num_args = 0..=1, default_missing_value = "")]
    del: Option<String>,

    /// List custom colors
    #[arg(long)]
    list: bool,

    /// List all color names
    #[arg(long)]
    colors: bool,

    /// Show how colors were chosen
    #[arg(short = 'V', long)]
    verbose: bool,

    /// Print help
    #[arg(long, action = ArgAction::Help)]
    help: Option<bool>,
}

impl Cli {
    /// Whether anything beyond `--pwd`/`--verbose` was asked for.
    fn has_specific_args(&self) -> bool {
        self.all.is_some()
            || self.color.is_some()
            || self.hash.is_some()
            || self.badge.is_some()
            || self.title.is_some()
            || self.mode.is_some()
            || self.add.is_some()
            || self.del.is_some()
            || self.init
            || self.list
            || self.colors
    }

    /// The string to use for badge, title, and color together, if any.
    fn all_text(&self, user_config: &UserConfig, cwd: &Path, home: Option<&Path>) -> Option<String> {
        let defaults = &user_config.defaults;
        if self.add.is_some() {
            return self.all.clone();
        }
        match self.text.as_slice() {
            [] if !self.has_specific_args() => Some(
                defaults
                    .setting(Setting::All, None, cwd, home)
                    .unwrap_or_else(|| cwd.display().to_string()),
            ),
            [] => self.all.clone(),
            [one] => defaults.setting(Setting::All, Some(one.as_str()), cwd, home),
            many => Some(many.join(" ")),
        }
    }

    fn color_request(&self) -> Request {
        match (&self.color, &self.hash) {
            (Some(spec), _) if !spec.is_empty() => Request::Named(spec.clone()),
            (Some(_), _) | (None, Some(_)) => Request::Unset,
            (None, None) => Request::Disabled,
        }
    }
}

/// Describe what the resolver did. Candidates and the default fallback are
/// always reported; the choice label only with `--verbose`.
fn format_report(resolution: &Resolution, verbose: bool) -> String {
    let mut out = String::new();
    if let Choice::RandomlyPicked { candidates, .. } = &resolution.choice {
        out.push_str(&colors::wrap(&format!("possibly: {}", candidates.join(", ")), 70));
        out.push('\n');
    }
    if verbose {
        out.push_str(&format!("{}\n", resolution.choice));
    }
    if let Choice::Default { requested, .. } = &resolution.choice {
        out.push_str(&format!("because no color \"{}\" known\n", requested));
        out.push_str("use --colors option to list color names\n");
    }
    out
}

fn report(resolution: &Resolution, verbose: bool) {
    print!("{}", format_report(resolution, verbose));
}

fn run(cli: Cli) -> Result<(), String> {
    let cwd = std::env::current_dir()
        .map_err(|e| format!("Error getting current directory: {}", e))?;
    let home = std::env::var_os("HOME").map(PathBuf::from);

    let mut config = user_config::load_user_config();
    let (table, skipped) = ColorTable::with_overrides(&config.colors);
    for name in skipped {
        eprintln!("tabset: warning: ignoring color override '{}'", name);
    }
    let mut resolver = Resolver::new(&table, cli.hash.clone(), rand::thread_rng())?;

    let mode = cli
        .mode
        .and_then(TitleMode::from_code)
        .unwrap_or_default();

    if cli.pwd {
        println!("dir: {}", cwd.display());
    }

    if cli.colors {
        colors::cmd_colors(&table);
    }

    if let Some(all) = cli.all_text(&config, &cwd, home.as_deref()) {
        iterm::set_badge(&all);
        iterm::set_title(&all, mode);
        let picked = resolver.pick_for_text(&all);
        report(&picked, cli.verbose);
        if let Some(resolution) = resolver.resolve(Request::Predecoded(picked.rgb)) {
            iterm::set_tab_color(resolution.rgb);
        }
    }

    if let Some(badge) = &cli.badge {
        let badge = config
            .defaults
            .setting(Setting::Badge, Some(badge.as_str()), &cwd, home.as_deref());
        if let Some(badge) = badge {
            iterm::set_badge(&badge);
        }
    }

    if let Some(title) = &cli.title {
        let title = config
            .defaults
            .setting(Setting::Title, Some(title.as_str()), &cwd, home.as_deref());
        if let Some(title) = title {
            iterm::set_title(&title, mode);
        }
    }

    if let Some(name) = &cli.add {
        if name.is_empty() {
            return Err("must give name to add".to_string());
        }
        let [spec] = cli.text.as_slice() else {
            return Err("add what color?".to_string());
        };
        let (name, rgb) = config.add_color(name, spec)?;
        user_config::save_user_config(&config)?;
        println!("added: {} ({})", name, rgb.to_hex());
    }

    if let Some(name) = &cli.del {
        if name.is_empty() {
            return Err("must give name to delete".to_string());
        }
        config.delete_color(name)?;
        user_config::save_user_config(&config)?;
        println!("deleted: {}", name);
    }

    if cli.list {
        colors::cmd_list(&config, &table);
    }

    if let Some(resolution) = resolver.resolve(cli.color_request()) {
        report(&resolution, cli.verbose);
        iterm::set_tab_color(resolution.rgb);
    }

    if cli.init {
        init::cmd_init(&user_config::config_file_path())?;
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();

    let result = run(cli);
    io::stdout().flush().ok();
    if let Err(e) = result {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::color::RGB;

/// Which title an OSC title sequence sets.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum TitleMode {
    /// Window and tab title.
    Both,
    /// Tab title only.
    #[default]
    Tab,
    /// Window title only.
    Window,
}

impl TitleMode {
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(TitleMode::Both),
            1 => Some(TitleMode::Tab),
            2 => Some(TitleMode::Window),
            _ => None,
        }
    }

    fn code(self) -> u8 {
        match self {
            TitleMode::Both => 0,
            TitleMode::Tab => 1,
            TitleMode::Window => 2,
        }
    }
}

/// iTerm2 proprietary escape sequence for tab color (OSC 6).
pub fn tab_color_sequence(rgb: RGB) -> String {
    format!(
        "\x1b]6;1;bg;red;brightness;{}\x07\x1b]6;1;bg;green;brightness;{}\x07\x1b]6;1;bg;blue;brightness;{}\x07",
        rgb.r, rgb.g, rgb.b
    )
}

pub fn title_sequence(title: &str, mode: TitleMode) -> String {
    format!("\x1b]{};{}\x07", mode.code(), title)
}

/// Badge text is base64 encoded; a trailing non-breaking space keeps it off
/// the window edge.
pub fn badge_sequence(message: &str) -> String {
    let padded = format!("{}\u{a0}", message);
    format!("\x1b]1337;SetBadgeFormat={}\x07", STANDARD.encode(padded))
}

/// Set the iTerm2 tab color.
pub fn set_tab_color(rgb: RGB) {
    print!("{}", tab_color_sequence(rgb));
}

/// Set the tab and/or window title.
pub fn set_title(title: &str, mode: TitleMode) {
    print!("{}", title_sequence(title, mode));
}

/// Set the iTerm2 badge.
pub fn set_badge(message: &str) {
    print!("{}", badge_sequence(message));
}

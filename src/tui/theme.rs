use std::collections::BTreeMap;

use ratatui::style::Color;

/// Parsed color theme for the TUI
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub background: Color,
    pub text: Color,
    pub text_bright: Color,
    pub highlight: Color,
    pub dim: Color,
    pub red: Color,
    pub green: Color,
    pub blue: Color,
    pub selection_bg: Color,
    pub input_bg: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            background: Color::Rgb(0x0C, 0x00, 0x1B),
            text: Color::Rgb(0xB0, 0xAA, 0xFF),
            text_bright: Color::Rgb(0xFF, 0xFF, 0xFF),
            highlight: Color::Rgb(0xFB, 0x41, 0x96),
            dim: Color::Rgb(0x7D, 0x78, 0xBF),
            red: Color::Rgb(0xF4, 0x43, 0x36),
            green: Color::Rgb(0x4C, 0xAF, 0x50),
            blue: Color::Rgb(0x21, 0x96, 0xF3),
            selection_bg: Color::Rgb(0x3D, 0x14, 0x38),
            input_bg: Color::Rgb(0x1A, 0x10, 0x2E),
        }
    }
}

/// Parse a hex color string like "#FF4444" into an RGB Color
fn parse_hex_color(hex: &str) -> Option<Color> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::Rgb(r, g, b))
}

impl Theme {
    /// Apply `[ui.colors]` overrides on top of the defaults.
    /// Unknown keys and malformed values are logged and skipped.
    pub fn from_colors(colors: &BTreeMap<String, String>) -> Self {
        let mut theme = Theme::default();
        for (key, value) in colors {
            let Some(color) = parse_hex_color(value) else {
                log::warn!("event=theme_color status=skipped key={key} value={value:?}");
                continue;
            };
            let slot = match key.as_str() {
                "background" => &mut theme.background,
                "text" => &mut theme.text,
                "text_bright" => &mut theme.text_bright,
                "highlight" => &mut theme.highlight,
                "dim" => &mut theme.dim,
                "red" => &mut theme.red,
                "green" => &mut theme.green,
                "blue" => &mut theme.blue,
                "selection_bg" => &mut theme.selection_bg,
                "input_bg" => &mut theme.input_bg,
                _ => {
                    log::warn!("event=theme_color status=unknown_key key={key}");
                    continue;
                }
            };
            *slot = color;
        }
        theme
    }

    /// Foreground for a task description
    pub fn task_color(&self, completed: bool) -> Color {
        if completed { self.dim } else { self.text_bright }
    }
}

//! UI 主题：追踪器用到的所有颜色集中在这里。
//!
//! 默认配色：炭灰底板上的麦色字牌，字母用完后变灰。

use crate::kernel::ThemeSettings;
use ratatui::style::Color;

#[derive(Debug, Clone, PartialEq)]
pub struct UiTheme {
    pub background: Color,
    pub hands_bg: Color,
    pub tile_bg: Color,
    pub tile_fg: Color,
    pub count_fg: Color,
    pub depleted_bg: Color,
    pub depleted_fg: Color,
    pub cursor: Color,
    pub button_bg: Color,
    pub button_fg: Color,
    pub confirm_bg: Color,
    pub header_fg: Color,
    pub dialog_bg: Color,
    pub dialog_fg: Color,
    pub muted_fg: Color,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminalColorSupport {
    TrueColor,
    Ansi256,
    Ansi16,
}

pub fn detect_terminal_color_support() -> TerminalColorSupport {
    if let Ok(value) = std::env::var("TILETRACK_COLOR_SUPPORT") {
        match value.trim().to_ascii_lowercase().as_str() {
            "truecolor" | "24bit" | "rgb" => return TerminalColorSupport::TrueColor,
            "256" | "ansi256" => return TerminalColorSupport::Ansi256,
            "16" | "ansi16" | "basic" => return TerminalColorSupport::Ansi16,
            _ => {}
        }
    }

    let colorterm = std::env::var("COLORTERM")
        .unwrap_or_default()
        .to_ascii_lowercase();
    let term = std::env::var("TERM")
        .unwrap_or_default()
        .to_ascii_lowercase();
    let truecolor = ["truecolor", "24bit", "direct"]
        .iter()
        .any(|needle| colorterm.contains(needle) || term.contains(needle));
    if truecolor {
        return TerminalColorSupport::TrueColor;
    }

    if term.contains("256color") {
        return TerminalColorSupport::Ansi256;
    }

    TerminalColorSupport::Ansi16
}

impl Default for UiTheme {
    fn default() -> Self {
        Self {
            background: Color::Rgb(0x33, 0x33, 0x33),
            hands_bg: Color::Rgb(0x2B, 0x2B, 0x2B),
            tile_bg: Color::Rgb(0xF5, 0xDE, 0xB3),
            tile_fg: Color::Rgb(0x00, 0x00, 0x00),
            count_fg: Color::Rgb(0x55, 0x55, 0x55),
            depleted_bg: Color::Rgb(0x99, 0x99, 0x99),
            depleted_fg: Color::Rgb(0x66, 0x66, 0x66),
            cursor: Color::Indexed(6), // Cyan
            button_bg: Color::Rgb(0x4A, 0x90, 0xE2),
            button_fg: Color::Indexed(15),
            confirm_bg: Color::Rgb(0x4C, 0xAF, 0x50),
            header_fg: Color::Indexed(15),
            dialog_bg: Color::Rgb(0xF0, 0xF0, 0xF0),
            dialog_fg: Color::Rgb(0x00, 0x00, 0x00),
            muted_fg: Color::Indexed(8), // DarkGray
        }
    }
}

impl UiTheme {
    pub fn adapt_to_terminal_capabilities(&mut self) {
        self.apply_color_support(detect_terminal_color_support());
    }

    fn colors_mut(&mut self) -> [&mut Color; 15] {
        [
            &mut self.background,
            &mut self.hands_bg,
            &mut self.tile_bg,
            &mut self.tile_fg,
            &mut self.count_fg,
            &mut self.depleted_bg,
            &mut self.depleted_fg,
            &mut self.cursor,
            &mut self.button_bg,
            &mut self.button_fg,
            &mut self.confirm_bg,
            &mut self.header_fg,
            &mut self.dialog_bg,
            &mut self.dialog_fg,
            &mut self.muted_fg,
        ]
    }

    pub(crate) fn apply_color_support(&mut self, support: TerminalColorSupport) {
        if support == TerminalColorSupport::TrueColor {
            return;
        }
        for color in self.colors_mut() {
            *color = map_color_for_support(*color, support);
        }
    }

    /// Unparseable values are ignored so a typo never blanks the screen.
    pub fn apply_settings(&mut self, settings: &ThemeSettings) {
        let overrides = [
            (&settings.background, &mut self.background),
            (&settings.tile_bg, &mut self.tile_bg),
            (&settings.tile_fg, &mut self.tile_fg),
            (&settings.count_fg, &mut self.count_fg),
            (&settings.depleted_bg, &mut self.depleted_bg),
            (&settings.depleted_fg, &mut self.depleted_fg),
            (&settings.cursor, &mut self.cursor),
            (&settings.button_bg, &mut self.button_bg),
            (&settings.confirm_bg, &mut self.confirm_bg),
            (&settings.header_fg, &mut self.header_fg),
            (&settings.dialog_bg, &mut self.dialog_bg),
            (&settings.dialog_fg, &mut self.dialog_fg),
        ];
        for (value, slot) in overrides {
            let Some(value) = value else {
                continue;
            };
            match parse_color(value) {
                Some(color) => *slot = color,
                None => tracing::warn!(value = %value, "ignoring unparseable theme colour"),
            }
        }
    }
}

fn map_color_for_support(color: Color, support: TerminalColorSupport) -> Color {
    match (support, color) {
        (TerminalColorSupport::TrueColor, value) => value,
        (TerminalColorSupport::Ansi256, Color::Rgb(r, g, b)) => {
            Color::Indexed(rgb_to_ansi256_index(r, g, b))
        }
        (TerminalColorSupport::Ansi16, Color::Rgb(r, g, b)) => {
            Color::Indexed(rgb_to_ansi16_index(r, g, b))
        }
        (TerminalColorSupport::Ansi16, Color::Indexed(i)) if i > 15 => {
            let (r, g, b) = ansi256_index_to_rgb(i);
            Color::Indexed(rgb_to_ansi16_index(r, g, b))
        }
        (_, value) => value,
    }
}

fn nearest_index(r: u8, g: u8, b: u8, palette: impl Iterator<Item = (u8, (u8, u8, u8))>) -> u8 {
    palette
        .min_by_key(|&(_, (pr, pg, pb))| color_distance_sq(r, g, b, pr, pg, pb))
        .map(|(index, _)| index)
        .unwrap_or(0)
}

fn rgb_to_ansi256_index(r: u8, g: u8, b: u8) -> u8 {
    nearest_index(r, g, b, (0u8..=255).map(|i| (i, ansi256_index_to_rgb(i))))
}

fn rgb_to_ansi16_index(r: u8, g: u8, b: u8) -> u8 {
    nearest_index(
        r,
        g,
        b,
        ANSI16_RGB.iter().copied().enumerate().map(|(i, rgb)| (i as u8, rgb)),
    )
}

fn ansi256_index_to_rgb(index: u8) -> (u8, u8, u8) {
    if index <= 15 {
        return ANSI16_RGB[index as usize];
    }

    if (16..=231).contains(&index) {
        let level = [0u8, 95, 135, 175, 215, 255];
        let offset = index - 16;
        let r = level[(offset / 36) as usize];
        let g = level[((offset / 6) % 6) as usize];
        let b = level[(offset % 6) as usize];
        return (r, g, b);
    }

    let gray = 8u8.saturating_add((index - 232).saturating_mul(10));
    (gray, gray, gray)
}

fn color_distance_sq(r1: u8, g1: u8, b1: u8, r2: u8, g2: u8, b2: u8) -> u32 {
    let dr = i32::from(r1) - i32::from(r2);
    let dg = i32::from(g1) - i32::from(g2);
    let db = i32::from(b1) - i32::from(b2);
    (dr * dr + dg * dg + db * db) as u32
}

const ANSI16_RGB: [(u8, u8, u8); 16] = [
    (0, 0, 0),
    (205, 0, 0),
    (0, 205, 0),
    (205, 205, 0),
    (0, 0, 238),
    (205, 0, 205),
    (0, 205, 205),
    (229, 229, 229),
    (127, 127, 127),
    (255, 0, 0),
    (0, 255, 0),
    (255, 255, 0),
    (92, 92, 255),
    (255, 0, 255),
    (0, 255, 255),
    (255, 255, 255),
];

pub fn parse_color(value: &str) -> Option<Color> {
    let v = value.trim();
    if v.is_empty() {
        return None;
    }

    if let Some(hex) = v.strip_prefix('#') {
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
        return Some(Color::Rgb(r, g, b));
    }

    let c = match v.to_ascii_lowercase().as_str() {
        "reset" => Color::Reset,
        "black" => Color::Indexed(0),
        "red" => Color::Indexed(1),
        "green" => Color::Indexed(2),
        "yellow" => Color::Indexed(3),
        "blue" => Color::Indexed(4),
        "magenta" => Color::Indexed(5),
        "cyan" => Color::Indexed(6),
        "gray" | "grey" => Color::Indexed(7),
        "dark_gray" | "darkgrey" => Color::Indexed(8),
        "light_red" => Color::Indexed(9),
        "light_green" => Color::Indexed(10),
        "light_yellow" => Color::Indexed(11),
        "light_blue" => Color::Indexed(12),
        "light_magenta" => Color::Indexed(13),
        "light_cyan" => Color::Indexed(14),
        "white" => Color::Indexed(15),
        _ => return None,
    };

    Some(c)
}

#[cfg(test)]
#[path = "../../tests/unit/app/theme.rs"]
mod tests;

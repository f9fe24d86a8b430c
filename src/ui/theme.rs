//! Theme colours from `/api/config` and the fixed medal/trend palette.

use eframe::egui::{self, Color32};

use crate::engine::cards::Medal;
use crate::types::ThemeConfig;

pub const GOLD: Color32 = Color32::from_rgb(255, 215, 0);
pub const SILVER: Color32 = Color32::from_rgb(192, 192, 192);
pub const BRONZE: Color32 = Color32::from_rgb(205, 127, 50);

pub const TREND_UP: Color32 = Color32::from_rgb(76, 217, 100);
pub const TREND_DOWN: Color32 = Color32::from_rgb(255, 69, 58);

pub fn medal_color(medal: Medal) -> Color32 {
    match medal {
        Medal::Gold => GOLD,
        Medal::Silver => SILVER,
        Medal::Bronze => BRONZE,
    }
}

/// Parse `#rgb` or `#rrggbb` (leading `#` optional).
pub fn parse_hex(s: &str) -> Option<Color32> {
    let hex = s.trim().trim_start_matches('#');
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    match hex.len() {
        3 => {
            let mut rgb = [0u8; 3];
            for (out, i) in rgb.iter_mut().zip(0..3) {
                let v = u8::from_str_radix(&hex[i..=i], 16).ok()?;
                *out = v * 17;
            }
            Some(Color32::from_rgb(rgb[0], rgb[1], rgb[2]))
        }
        6 => {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            Some(Color32::from_rgb(r, g, b))
        }
        _ => None,
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
    pub primary: Color32,
    pub secondary: Color32,
    pub background: Color32,
    pub text: Color32,
    pub accent: Color32,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            primary: Color32::from_rgb(0xff, 0x6b, 0x35),
            secondary: Color32::from_rgb(0xf7, 0x93, 0x1e),
            background: Color32::from_rgb(0x1a, 0x1a, 0x2e),
            text: Color32::WHITE,
            accent: Color32::from_rgb(0x00, 0xd9, 0xff),
        }
    }
}

impl Theme {
    /// Build from config; any unparseable colour keeps its default.
    pub fn from_config(cfg: &ThemeConfig) -> Self {
        let d = Self::default();
        let pick = |s: &str, fallback: Color32, what: &str| {
            parse_hex(s).unwrap_or_else(|| {
                log::warn!("Invalid {what} colour {s:?}, using default");
                fallback
            })
        };
        Self {
            primary: pick(&cfg.primary_color, d.primary, "primary"),
            secondary: pick(&cfg.secondary_color, d.secondary, "secondary"),
            background: pick(&cfg.background_color, d.background, "background"),
            text: pick(&cfg.text_color, d.text, "text"),
            accent: pick(&cfg.accent_color, d.accent, "accent"),
        }
    }

    /// Translucent card background that works on any panel colour.
    pub fn card_fill(&self) -> Color32 {
        Color32::from_white_alpha(14)
    }

    pub fn highlight_fill(&self) -> Color32 {
        self.primary.gamma_multiply(0.25)
    }

    pub fn apply(&self, ctx: &egui::Context) {
        let mut visuals = egui::Visuals::dark();
        visuals.panel_fill = self.background;
        visuals.window_fill = self.background;
        visuals.extreme_bg_color = self.background;
        visuals.override_text_color = Some(self.text);
        visuals.hyperlink_color = self.accent;
        visuals.selection.bg_fill = self.primary;
        visuals.widgets.inactive.weak_bg_fill = self.secondary.gamma_multiply(0.35);
        visuals.widgets.hovered.weak_bg_fill = self.secondary.gamma_multiply(0.6);
        ctx.set_visuals(visuals);
    }
}

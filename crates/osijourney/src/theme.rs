use eframe::egui::Color32;

use crate::deck::{FeatureLevel, Tone};

#[derive(Debug, Clone)]
pub struct Theme {
    pub background: Color32,
    pub panel: Color32,
    pub panel_border: Color32,
    pub foreground: Color32,
    pub muted: Color32,
    pub dim: Color32,
    pub heading_color: Color32,
    pub accent: Color32,
    pub accent_alt: Color32,
    pub rain: Color32,
    pub title_size: f32,
    pub subtitle_size: f32,
    pub body_size: f32,
    pub small_size: f32,
    pub mono_size: f32,
    pub display_size: f32,
}

impl Theme {
    /// The dark classroom palette. `large` scales every type size up for
    /// projectors and big displays.
    pub fn for_level(level: FeatureLevel) -> Self {
        let type_scale = level.type_scale();
        Self {
            background: Color32::from_rgb(0x11, 0x18, 0x27),
            panel: Color32::from_rgba_unmultiplied(0, 0, 0, 77),
            panel_border: Color32::from_rgb(0x1F, 0x29, 0x37),
            foreground: Color32::from_rgb(0xD1, 0xD5, 0xDB),
            muted: Color32::from_rgb(0x9C, 0xA3, 0xAF),
            dim: Color32::from_rgb(0x6B, 0x72, 0x80),
            heading_color: Color32::WHITE,
            accent: Color32::from_rgb(0x22, 0xD3, 0xEE),
            accent_alt: Color32::from_rgb(0xA8, 0x55, 0xF7),
            rain: Color32::from_rgb(0x4A, 0xDE, 0x80),
            title_size: 56.0 * type_scale,
            subtitle_size: 28.0 * type_scale,
            body_size: 22.0 * type_scale,
            small_size: 18.0 * type_scale,
            mono_size: 19.0 * type_scale,
            display_size: 72.0 * type_scale,
        }
    }

    /// Apply opacity to a color
    pub fn with_opacity(color: Color32, opacity: f32) -> Color32 {
        let [r, g, b, a] = color.to_srgba_unmultiplied();
        let alpha = (a as f32 * opacity.clamp(0.0, 1.0)) as u8;
        Color32::from_rgba_unmultiplied(r, g, b, alpha)
    }

    /// Color of an OSI layer (1..=7). Anything else falls back to the accent.
    pub fn layer_color(&self, layer: u8) -> Color32 {
        match layer {
            7 => Color32::from_rgb(0xFF, 0x6B, 0x6B),
            6 => Color32::from_rgb(0xFE, 0xCA, 0x57),
            5 => Color32::from_rgb(0x48, 0xDB, 0xFB),
            4 => Color32::from_rgb(0x1D, 0xD1, 0xA1),
            3 => Color32::from_rgb(0x5F, 0x27, 0xCD),
            2 => Color32::from_rgb(0xFF, 0x9F, 0x43),
            1 => Color32::from_rgb(0x00, 0xD2, 0xD3),
            _ => self.accent,
        }
    }

    pub fn tone(&self, tone: Tone) -> Color32 {
        match tone {
            Tone::Layer(layer) => self.layer_color(layer),
            Tone::Red => Color32::from_rgb(0xF8, 0x71, 0x71),
            Tone::Yellow => Color32::from_rgb(0xFA, 0xCC, 0x15),
            Tone::Cyan => self.accent,
            Tone::Green => Color32::from_rgb(0x4A, 0xDE, 0x80),
            Tone::Purple => Color32::from_rgb(0xC0, 0x84, 0xFC),
            Tone::Orange => Color32::from_rgb(0xFB, 0x92, 0x3C),
            Tone::Blue => Color32::from_rgb(0x60, 0xA5, 0xFA),
            Tone::Plain => self.foreground,
            Tone::Muted => self.muted,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_large_level_scales_type() {
        let base = Theme::for_level(FeatureLevel::Base);
        let large = Theme::for_level(FeatureLevel::LargeDisplay);
        assert!(large.title_size > base.title_size);
        assert_eq!(base.background, large.background);
    }

    #[test]
    fn test_layer_colors_are_distinct() {
        let theme = Theme::for_level(FeatureLevel::InfoPanels);
        let colors: Vec<Color32> = (1..=7).map(|l| theme.layer_color(l)).collect();
        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(a, b);
            }
        }
        assert_eq!(theme.layer_color(0), theme.accent);
    }

    #[test]
    fn test_with_opacity_scales_alpha() {
        let c = Theme::with_opacity(Color32::from_rgb(10, 20, 30), 0.5);
        assert_eq!(c.a(), 127);
        let hidden = Theme::with_opacity(Color32::WHITE, -1.0);
        assert_eq!(hidden.a(), 0);
    }
}

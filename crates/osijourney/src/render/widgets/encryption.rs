use eframe::egui::{self, Color32, FontId, Pos2, Rect, Stroke};

use crate::deck::{CipherBand, Tone};
use crate::render::SlideFrame;

/// Seconds each band stays highlighted.
pub const CYCLE_SECONDS: f32 = 2.0;

/// Index of the highlighted band at `t` seconds.
pub fn active_band(t: f32, count: usize) -> usize {
    if count == 0 {
        return 0;
    }
    (t.max(0.0) / CYCLE_SECONDS) as usize % count
}

/// Bands up to the active one are fully shown; the rest are dimmed.
pub fn band_shown(index: usize, active: usize) -> bool {
    index <= active
}

/// Nested bands, each narrower than the previous.
pub fn draw(
    painter: &egui::Painter,
    bands: &[CipherBand],
    frame: &SlideFrame,
    pos: Pos2,
    width: f32,
) -> f32 {
    let s = frame.scale;
    let gap = 8.0 * s;
    let active = active_band(frame.elapsed, bands.len());
    let mut y = pos.y;

    for (i, band) in bands.iter().enumerate() {
        let shown = band_shown(i, active);
        let alpha = if shown { 1.0 } else { 0.3 };
        let zoom = if shown { 1.0 } else { 0.9 };
        let base = frame.theme.tone(band.tone);
        let color = frame.color(base, alpha);
        // The plain message sits in a solid band; ciphers are tinted.
        let (fill, text_color) = if band.tone == Tone::Plain {
            (frame.color(Color32::WHITE, alpha), frame.color(Color32::BLACK, alpha))
        } else {
            (frame.color(base, 0.19 * alpha), color)
        };

        let band_width = ((280.0 - i as f32 * 50.0) * 1.6 * s * zoom).min(width);
        let galley = painter.layout_no_wrap(
            format!("{}: {}", band.name, band.content),
            FontId::proportional(frame.theme.small_size * 0.9 * s * zoom),
            text_color,
        );
        let height = galley.rect.height() + 16.0 * s * zoom;
        let rect = Rect::from_min_size(
            Pos2::new(pos.x + (width - band_width) / 2.0, y),
            egui::vec2(band_width, height),
        );
        if i == active {
            painter.rect_stroke(
                rect.expand(3.0 * s),
                10.0 * s,
                Stroke::new(3.0 * s, frame.color(base, 0.35)),
                egui::StrokeKind::Outside,
            );
        }
        painter.rect_filled(rect, 8.0 * s, fill);
        painter.rect_stroke(rect, 8.0 * s, Stroke::new(2.0 * s, color), egui::StrokeKind::Inside);
        painter.galley(rect.center() - galley.rect.size() / 2.0, galley, text_color);
        y += height + gap;
    }

    (y - pos.y - gap).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_band_cycles_every_two_seconds() {
        assert_eq!(active_band(0.0, 4), 0);
        assert_eq!(active_band(1.9, 4), 0);
        assert_eq!(active_band(2.0, 4), 1);
        assert_eq!(active_band(7.5, 4), 3);
        assert_eq!(active_band(8.0, 4), 0);
        assert_eq!(active_band(3.0, 0), 0);
    }

    #[test]
    fn test_bands_shown_up_to_active() {
        let shown: Vec<bool> = (0..4).map(|i| band_shown(i, 2)).collect();
        assert_eq!(shown, vec![true, true, true, false]);
    }
}

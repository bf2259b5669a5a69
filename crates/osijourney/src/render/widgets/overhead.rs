use eframe::egui::{self, FontId, Pos2, Rect};

use crate::deck::OverheadRow;
use crate::render::SlideFrame;

/// Per-row start delay of the grow animation.
const ROW_DELAY: f32 = 0.2;
/// Seconds a bar takes to reach its full width.
const GROW_SECONDS: f32 = 1.0;

/// Fraction of the track a bar fills at `t` seconds after the slide opened.
pub fn bar_fraction(row: usize, to: u32, max: u32, t: f32) -> f32 {
    if max == 0 {
        return 0.0;
    }
    let progress = ((t - row as f32 * ROW_DELAY) / GROW_SECONDS).clamp(0.0, 1.0);
    // Ease out.
    let eased = 1.0 - (1.0 - progress).powi(2);
    to as f32 / max as f32 * eased
}

/// The largest byte count, which fills the whole track.
pub fn track_max(rows: &[OverheadRow]) -> u32 {
    rows.iter().map(|r| r.to).max().unwrap_or(0)
}

pub fn draw(
    painter: &egui::Painter,
    rows: &[OverheadRow],
    frame: &SlideFrame,
    pos: Pos2,
    width: f32,
) -> f32 {
    let s = frame.scale;
    let max = track_max(rows);
    let label_width = 110.0 * s;
    let value_width = 130.0 * s;
    let bar_height = 22.0 * s;
    let gap = 10.0 * s;
    let font = FontId::proportional(frame.theme.small_size * 0.85 * s);
    let label_color = frame.color(frame.theme.muted, 1.0);
    let track_width = (width - label_width - value_width).max(1.0);
    let mut y = pos.y;

    for (i, row) in rows.iter().enumerate() {
        let label = painter.layout_no_wrap(row.label.to_string(), font.clone(), label_color);
        painter.galley(
            Pos2::new(pos.x, y + (bar_height - label.rect.height()) / 2.0),
            label,
            label_color,
        );

        let track = Rect::from_min_size(
            Pos2::new(pos.x + label_width, y),
            egui::vec2(track_width, bar_height),
        );
        painter.rect_filled(track, 4.0 * s, frame.color(frame.theme.panel_border, 1.0));
        let fraction = bar_fraction(i, row.to, max, frame.elapsed);
        let bar = Rect::from_min_size(track.min, egui::vec2(track_width * fraction, bar_height));
        painter.rect_filled(bar, 4.0 * s, frame.color(frame.theme.layer_color(row.layer), 1.0));

        let value = painter.layout_no_wrap(
            format!("{} \u{2192} {}", row.from, row.to),
            FontId::monospace(frame.theme.mono_size * 0.8 * s),
            label_color,
        );
        painter.galley(
            Pos2::new(track.right() + 10.0 * s, y + (bar_height - value.rect.height()) / 2.0),
            value,
            label_color,
        );
        y += bar_height + gap;
    }

    (y - pos.y - gap).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bars_grow_after_their_delay() {
        assert_eq!(bar_fraction(0, 549, 549, 0.0), 0.0);
        assert_eq!(bar_fraction(3, 549, 549, 0.5), 0.0);
        assert_eq!(bar_fraction(0, 549, 549, 1.0), 1.0);
        let mid = bar_fraction(0, 549, 549, 0.5);
        assert!(mid > 0.5 && mid < 1.0);
    }

    #[test]
    fn test_bars_settle_proportional_to_size() {
        let settled = bar_fraction(1, 324, 549, 10.0);
        assert!((settled - 324.0 / 549.0).abs() < 1e-6);
        assert_eq!(bar_fraction(0, 10, 0, 10.0), 0.0);
    }

    #[test]
    fn test_track_max() {
        let rows = vec![
            OverheadRow { label: "a", layer: 7, from: 4, to: 324 },
            OverheadRow { label: "b", layer: 2, from: 489, to: 549 },
        ];
        assert_eq!(track_max(&rows), 549);
        assert_eq!(track_max(&[]), 0);
    }
}

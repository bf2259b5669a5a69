use eframe::egui::{self, FontId, Pos2, Rect};

use crate::render::SlideFrame;

/// Bar height of level `i`, highest voltage first.
pub fn bar_height(index: usize) -> f32 {
    (40.0 - index as f32 * 8.0).max(4.0)
}

/// Voltage levels as a row of bars shrinking from +1V to -1V.
pub fn draw(
    painter: &egui::Painter,
    levels: &[&str],
    frame: &SlideFrame,
    pos: Pos2,
    width: f32,
) -> f32 {
    let s = frame.scale;
    let gap = 8.0 * s;
    let count = levels.len().max(1) as f32;
    let bar_width = ((width - gap * (count - 1.0)) / count).min(80.0 * s);
    let total = bar_width * count + gap * (count - 1.0);
    let left = pos.x + (width - total) / 2.0;
    let max_height = bar_height(0) * s;
    let label_color = frame.color(frame.theme.muted, 1.0);
    let mut label_height = 0.0f32;

    for (i, level) in levels.iter().enumerate() {
        let x = left + i as f32 * (bar_width + gap);
        let h = bar_height(i) * s;
        let bar = Rect::from_min_size(
            Pos2::new(x, pos.y + max_height - h),
            egui::vec2(bar_width, h),
        );
        painter.rect_filled(bar, 3.0 * s, frame.color(frame.theme.accent, 1.0 - i as f32 * 0.12));
        let label = painter.layout_no_wrap(
            level.to_string(),
            FontId::monospace(frame.theme.mono_size * 0.7 * s),
            label_color,
        );
        label_height = label_height.max(label.rect.height());
        painter.galley(
            Pos2::new(x + (bar_width - label.rect.width()) / 2.0, pos.y + max_height + 4.0 * s),
            label,
            label_color,
        );
    }

    max_height + 4.0 * s + label_height
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bars_shrink_by_level() {
        let heights: Vec<f32> = (0..5).map(bar_height).collect();
        assert_eq!(heights, vec![40.0, 32.0, 24.0, 16.0, 8.0]);
        assert_eq!(bar_height(9), 4.0);
    }
}

use eframe::egui::{self, Color32, FontId, Pos2, Rect, Shape, Stroke};

use crate::render::{panel_shape, SlideFrame};

pub fn is_highlighted(index: usize, highlight: &[usize]) -> bool {
    highlight.contains(&index)
}

/// Hex tokens in a wrapping row; highlighted ones are drawn filled.
pub fn draw(
    painter: &egui::Painter,
    bytes: &[&str],
    highlight: &[usize],
    frame: &SlideFrame,
    pos: Pos2,
    width: f32,
) -> f32 {
    let s = frame.scale;
    let pad = 12.0 * s;
    let gap = 4.0 * s;
    let token_pad = egui::vec2(4.0 * s, 2.0 * s);
    let accent = frame.theme.accent;
    let bg = painter.add(Shape::Noop);
    let mut x = pos.x + pad;
    let mut y = pos.y + pad;
    let mut row_height = 0.0f32;

    for (i, byte) in bytes.iter().enumerate() {
        let lit = is_highlighted(i, highlight);
        let color = if lit {
            frame.color(Color32::BLACK, 1.0)
        } else {
            frame.color(accent, 0.85)
        };
        let galley = painter.layout_no_wrap(
            byte.to_string(),
            FontId::monospace(frame.theme.mono_size * 0.9 * s),
            color,
        );
        let size = galley.rect.size() + token_pad * 2.0;
        if x > pos.x + pad && x + size.x > pos.x + width - pad {
            x = pos.x + pad;
            y += row_height + gap;
        }
        let token = Rect::from_min_size(Pos2::new(x, y), size);
        if lit {
            painter.rect_filled(token, 3.0 * s, frame.color(accent, 1.0));
        }
        painter.galley(token.min + token_pad, galley, color);
        x += size.x + gap;
        row_height = row_height.max(size.y);
    }

    let height = y + row_height + pad - pos.y;
    painter.set(
        bg,
        panel_shape(
            Rect::from_min_size(pos, egui::vec2(width, height)),
            6.0 * s,
            frame.color(Color32::BLACK, 0.5),
            Stroke::new(1.0 * s, frame.color(accent, 0.3)),
        ),
    );
    height
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_highlight_membership() {
        let highlight = [0, 1, 2, 3];
        assert!(is_highlighted(0, &highlight));
        assert!(is_highlighted(3, &highlight));
        assert!(!is_highlighted(4, &highlight));
        assert!(!is_highlighted(0, &[]));
    }
}

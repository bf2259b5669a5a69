use eframe::egui::{self, Color32, FontId, Pos2, Rect, Stroke};

use crate::deck::layers;
use crate::deck::Direction;
use crate::render::SlideFrame;

/// One header band of the packet stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PacketEntry {
    pub layer: u8,
    /// Nesting depth; deeper bands are padded wider.
    pub depth: usize,
    pub emphasized: bool,
}

/// Which layers are visible and how deeply each is nested.
///
/// Downward keeps the headers added so far (numbers `>= current`), the
/// outermost last; upward keeps the layers already reached (`<= current`).
pub fn visible_layers(layers: &[u8], current: u8, direction: Direction) -> Vec<PacketEntry> {
    let mut visible: Vec<u8> = match direction {
        Direction::Down => layers.iter().copied().filter(|&l| l >= current).collect(),
        Direction::Up => layers.iter().copied().filter(|&l| l <= current).collect(),
    };
    match direction {
        Direction::Down => visible.sort_unstable_by(|a, b| b.cmp(a)),
        Direction::Up => visible.sort_unstable(),
    }
    let len = visible.len();
    visible
        .into_iter()
        .enumerate()
        .map(|(idx, layer)| PacketEntry {
            layer,
            depth: match direction {
                Direction::Down => idx,
                Direction::Up => len - idx - 1,
            },
            emphasized: layer == current,
        })
        .collect()
}

/// Layers and current layer of the overview's encapsulation stack at `step`.
///
/// One header is added per step, L7 first, until all seven are present.
pub fn encapsulation_frame(step: u8) -> (Vec<u8>, u8) {
    let count = usize::from(step.min(7));
    let layers: Vec<u8> = (1..=7).rev().take(count).collect();
    let current = 8u8.saturating_sub(step).max(1);
    (layers, current)
}

pub fn label(layer: u8) -> String {
    let short = layers::layer(layer).map(|l| l.short).unwrap_or("?");
    format!("L{layer} {short}")
}

/// Draw the stack centered in `width`. Returns height used.
pub fn draw(
    painter: &egui::Painter,
    layers: &[u8],
    current: u8,
    direction: Direction,
    frame: &SlideFrame,
    pos: Pos2,
    width: f32,
) -> f32 {
    let s = frame.scale;
    let gap = 6.0 * s;
    let font_size = frame.theme.small_size * 0.8 * s;
    let mut y = pos.y;

    for entry in visible_layers(layers, current, direction) {
        let zoom = if entry.emphasized { 1.1 } else { 1.0 };
        let alpha = if entry.emphasized { 1.0 } else { 0.7 };
        let fill = frame.color(frame.theme.layer_color(entry.layer), alpha);
        let text_color = frame.color(Color32::BLACK, alpha);
        let galley = painter.layout_no_wrap(
            label(entry.layer),
            FontId::proportional(font_size * zoom),
            text_color,
        );
        let pad = egui::vec2(
            (12.0 + entry.depth as f32 * 6.0) * s * zoom,
            (4.0 + entry.depth as f32 * 2.0) * s * zoom,
        );
        let size = galley.rect.size() + pad * 2.0;
        let rect = Rect::from_min_size(
            Pos2::new(pos.x + (width - size.x) / 2.0, y),
            size,
        );
        if entry.emphasized {
            painter.rect_stroke(
                rect.expand(3.0 * s),
                6.0 * s,
                Stroke::new(3.0 * s, frame.color(frame.theme.layer_color(entry.layer), 0.4)),
                egui::StrokeKind::Outside,
            );
        }
        painter.rect_filled(rect, 4.0 * s, fill);
        painter.galley(rect.min + pad, galley, text_color);
        y += size.y + gap;
    }

    (y - pos.y - gap).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layer_ids(entries: &[PacketEntry]) -> Vec<u8> {
        entries.iter().map(|e| e.layer).collect()
    }

    #[test]
    fn test_downward_keeps_layers_at_or_above_current() {
        let entries = visible_layers(&[7, 6, 5, 4, 3, 2, 1], 4, Direction::Down);
        assert_eq!(layer_ids(&entries), vec![7, 6, 5, 4]);
        let depths: Vec<_> = entries.iter().map(|e| e.depth).collect();
        assert_eq!(depths, vec![0, 1, 2, 3]);
        let emphasized: Vec<_> = entries.iter().filter(|e| e.emphasized).map(|e| e.layer).collect();
        assert_eq!(emphasized, vec![4]);
    }

    #[test]
    fn test_upward_keeps_layers_at_or_below_current() {
        let entries = visible_layers(&[1, 2, 3, 4, 5, 6, 7], 3, Direction::Up);
        assert_eq!(layer_ids(&entries), vec![1, 2, 3]);
        let depths: Vec<_> = entries.iter().map(|e| e.depth).collect();
        assert_eq!(depths, vec![2, 1, 0]);
        assert!(entries[2].emphasized);
    }

    #[test]
    fn test_unsorted_input_is_ordered() {
        let entries = visible_layers(&[5, 7, 6], 5, Direction::Down);
        assert_eq!(layer_ids(&entries), vec![7, 6, 5]);
    }

    #[test]
    fn test_encapsulation_frame_grows_per_step() {
        assert_eq!(encapsulation_frame(0), (vec![], 8));
        assert_eq!(encapsulation_frame(1), (vec![7], 7));
        assert_eq!(encapsulation_frame(3), (vec![7, 6, 5], 5));
        assert_eq!(encapsulation_frame(7), (vec![7, 6, 5, 4, 3, 2, 1], 1));
        assert_eq!(encapsulation_frame(10), (vec![7, 6, 5, 4, 3, 2, 1], 1));
    }

    #[test]
    fn test_label() {
        assert_eq!(label(4), "L4 TRANS");
        assert_eq!(label(1), "L1 PHY");
    }
}

use eframe::egui::{self, Color32, FontId, Pos2, Rect, Shape, Stroke};

use crate::deck::{HopCard, HopNode, Tone};
use crate::render::{panel_shape, SlideFrame};

const LIT_LINE: Color32 = Color32::from_rgb(0x00, 0xFF, 0x88);
const DARK_LINE: Color32 = Color32::from_rgb(0x33, 0x41, 0x55);

/// Active hop (1-based, 0 = none yet) at an animation step.
pub fn active_hop(step: u8) -> usize {
    usize::from(step.min(7))
}

/// Segment `i` joins node `i` to node `i + 1`.
pub fn segment_lit(segment: usize, active_hop: usize) -> bool {
    segment + 1 < active_hop
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeState {
    /// The packet is currently at this node.
    pub active: bool,
    /// The packet has reached this node.
    pub reached: bool,
}

pub fn node_state(node: usize, active_hop: usize) -> NodeState {
    NodeState {
        active: node + 1 == active_hop,
        reached: node < active_hop,
    }
}

/// A hop card lights up once the step passes its index.
pub fn card_lit(card: usize, step: u8) -> bool {
    usize::from(step) > card
}

/// Draw nodes positioned by percent inside a fixed-height strip.
pub fn draw(
    painter: &egui::Painter,
    nodes: &[HopNode],
    frame: &SlideFrame,
    pos: Pos2,
    width: f32,
) -> f32 {
    let s = frame.scale;
    let rect = Rect::from_min_size(pos, egui::vec2(width, 170.0 * s));
    let hop = active_hop(frame.step);
    let at = |node: &HopNode| {
        Pos2::new(
            rect.left() + rect.width() * node.x / 100.0,
            rect.top() + rect.height() * node.y / 100.0,
        )
    };

    for (i, pair) in nodes.windows(2).enumerate() {
        let line = [at(&pair[0]), at(&pair[1])];
        if segment_lit(i, hop) {
            painter.line_segment(line, Stroke::new(2.0 * s, frame.color(LIT_LINE, 1.0)));
        } else {
            let stroke = Stroke::new(2.0 * s, frame.color(DARK_LINE, 1.0));
            painter.extend(Shape::dashed_line(&line, stroke, 5.0 * s, 5.0 * s));
        }
    }

    let accent = frame.color(frame.theme.accent, 1.0);
    for (i, node) in nodes.iter().enumerate() {
        let state = node_state(i, hop);
        let mut center = at(node);
        let icon_size = (if state.active { 40.0 } else { 32.0 }) * s;
        if state.active {
            // Bounce once per second.
            let bounce = (frame.elapsed * std::f32::consts::TAU).sin().abs();
            center.y -= bounce * 8.0 * s;
            let ping = (frame.elapsed % 1.0) * 12.0 * s;
            painter.circle_stroke(
                at(node),
                28.0 * s + ping,
                Stroke::new(2.0 * s, frame.color(frame.theme.accent, 0.5)),
            );
        }

        let icon_color = frame.color(Color32::WHITE, 1.0);
        let icon = painter.layout_no_wrap(
            node.icon.to_string(),
            FontId::proportional(icon_size),
            icon_color,
        );
        let icon_pos = center - icon.rect.size() / 2.0;
        let icon_h = icon.rect.height();
        painter.galley(icon_pos, icon, icon_color);

        let label_color = if state.reached { accent } else { frame.color(frame.theme.dim, 1.0) };
        let label = painter.layout_no_wrap(
            node.name.to_string(),
            FontId::proportional(frame.theme.small_size * 0.85 * s),
            label_color,
        );
        let label_pos = Pos2::new(
            center.x - label.rect.width() / 2.0,
            icon_pos.y + icon_h + 2.0 * s,
        );
        painter.galley(label_pos, label, label_color);
    }

    rect.height() + 24.0 * s
}

/// Three-column grid of per-hop cards.
pub fn draw_cards(
    painter: &egui::Painter,
    hops: &[HopCard],
    frame: &SlideFrame,
    pos: Pos2,
    width: f32,
) -> f32 {
    let s = frame.scale;
    let gap = 12.0 * s;
    let pad = 10.0 * s;
    let columns = 3;
    let card_width = (width - gap * (columns as f32 - 1.0)) / columns as f32;
    let size = frame.theme.small_size * 0.85 * s;
    let mut y = pos.y;

    for (row_idx, row) in hops.chunks(columns).enumerate() {
        let mut row_height = 0.0f32;
        let mut backgrounds = Vec::with_capacity(row.len());
        for (col, card) in row.iter().enumerate() {
            let idx = row_idx * columns + col;
            let lit = card_lit(idx, frame.step);
            let alpha = if lit { 1.0 } else { 0.5 };
            let x = pos.x + col as f32 * (card_width + gap);
            let bg = painter.add(Shape::Noop);
            let lines = [
                (format!("HOP {}: {}", card.hop, card.name), frame.theme.accent),
                (card.action.to_string(), frame.theme.muted),
                (format!("TTL: {}", card.ttl), frame.theme.tone(Tone::Yellow)),
            ];
            let mut ty = y + pad;
            for (text, color) in lines {
                let color = frame.color(color, alpha);
                let galley = painter.layout(
                    text,
                    FontId::proportional(size),
                    color,
                    card_width - pad * 2.0,
                );
                let h = galley.rect.height();
                painter.galley(Pos2::new(x + pad, ty), galley, color);
                ty += h + 2.0 * s;
            }
            row_height = row_height.max(ty - y + pad - 2.0 * s);
            backgrounds.push((bg, x, lit));
        }
        for (bg, x, lit) in backgrounds {
            let rect = Rect::from_min_size(Pos2::new(x, y), egui::vec2(card_width, row_height));
            let (fill, border) = if lit {
                (frame.color(frame.theme.accent, 0.1), frame.color(frame.theme.accent, 1.0))
            } else {
                (
                    frame.color(frame.theme.panel_border, 0.5),
                    frame.color(frame.theme.panel_border, 1.0),
                )
            };
            painter.set(bg, panel_shape(rect, 6.0 * s, fill, Stroke::new(1.0 * s, border)));
        }
        y += row_height + gap;
    }

    (y - pos.y - gap).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_hop_caps_at_seven() {
        assert_eq!(active_hop(0), 0);
        assert_eq!(active_hop(4), 4);
        assert_eq!(active_hop(10), 7);
    }

    #[test]
    fn test_segments_light_behind_the_packet() {
        let hop = 4;
        let lit: Vec<bool> = (0..6).map(|i| segment_lit(i, hop)).collect();
        assert_eq!(lit, vec![true, true, true, false, false, false]);
        assert!((0..6).all(|i| !segment_lit(i, 0)));
        assert!((0..6).all(|i| segment_lit(i, 7)));
    }

    #[test]
    fn test_exactly_one_active_node() {
        for hop in 1..=7 {
            let active: Vec<usize> = (0..7).filter(|&i| node_state(i, hop).active).collect();
            assert_eq!(active, vec![hop - 1]);
            let reached = (0..7).filter(|&i| node_state(i, hop).reached).count();
            assert_eq!(reached, hop);
        }
        assert!((0..7).all(|i| node_state(i, 0) == NodeState { active: false, reached: false }));
    }

    #[test]
    fn test_cards_follow_step() {
        assert!(!card_lit(0, 0));
        assert!(card_lit(0, 1));
        assert!(card_lit(5, 6));
        assert!(!card_lit(5, 5));
    }
}

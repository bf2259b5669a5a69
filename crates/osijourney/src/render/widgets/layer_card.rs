use eframe::egui::{self, FontId, Pos2, Rect, Shape, Stroke};

use crate::deck::layers::{self, LayerDetail, LayerProfile};
use crate::deck::Direction;
use crate::render::widgets::{hex_viewer, packet_stack, signal_wave};
use crate::render::{panel_shape, SlideFrame};

/// Header bytes highlighted in the detail card.
const HIGHLIGHT: [usize; 4] = [0, 1, 2, 3];

/// Layers whose headers are present while walking `direction` at `current`.
pub fn stack_for(direction: Direction, current: u8) -> Vec<u8> {
    match direction {
        Direction::Down => (current..=7).collect(),
        Direction::Up => (1..=current).collect(),
    }
}

/// Packet stack beside the detail card of the layer the step has reached.
pub fn draw(
    painter: &egui::Painter,
    direction: Direction,
    frame: &SlideFrame,
    pos: Pos2,
    width: f32,
) -> f32 {
    let s = frame.scale;
    let current = layers::walk_layer(direction, frame.step);
    let Some(profile) = layers::layer(current) else {
        return 0.0;
    };

    let stack_width = 260.0 * s;
    let gap = 32.0 * s;
    let stack_h = packet_stack::draw(
        painter,
        &stack_for(direction, current),
        current,
        direction,
        frame,
        pos,
        stack_width,
    );
    let card_h = draw_detail(
        painter,
        profile,
        profile.detail(direction),
        frame,
        Pos2::new(pos.x + stack_width + gap, pos.y),
        width - stack_width - gap,
    );
    stack_h.max(card_h)
}

fn draw_detail(
    painter: &egui::Painter,
    profile: &LayerProfile,
    detail: &LayerDetail,
    frame: &SlideFrame,
    pos: Pos2,
    width: f32,
) -> f32 {
    let s = frame.scale;
    let pad = 20.0 * s;
    let inner = width - pad * 2.0;
    let x = pos.x + pad;
    let color = frame.color(frame.theme.layer_color(profile.number), 1.0);
    let text_color = frame.color(frame.theme.foreground, 1.0);
    let muted = frame.color(frame.theme.muted, 1.0);
    let bg = painter.add(Shape::Noop);
    let mut y = pos.y + pad;

    let heading = painter.layout(
        format!("{}  L{} - {}", detail.icon, profile.number, profile.name),
        FontId::proportional(frame.theme.subtitle_size * s),
        color,
        inner,
    );
    let h = heading.rect.height();
    painter.galley(Pos2::new(x, y), heading, color);
    y += h + 4.0 * s;

    let protocol = painter.layout(
        detail.protocol.to_string(),
        FontId::monospace(frame.theme.mono_size * s),
        muted,
        inner,
    );
    let h = protocol.rect.height();
    painter.galley(Pos2::new(x, y), protocol, muted);
    y += h + 12.0 * s;

    let description = painter.layout(
        detail.description.to_string(),
        FontId::proportional(frame.theme.body_size * 0.9 * s),
        text_color,
        inner,
    );
    let h = description.rect.height();
    painter.galley(Pos2::new(x, y), description, text_color);
    y += h + 12.0 * s;

    for line in detail.details {
        let galley = painter.layout(
            format!("\u{25B8} {line}"),
            FontId::monospace(frame.theme.mono_size * 0.85 * s),
            text_color,
            inner,
        );
        let h = galley.rect.height();
        painter.galley(Pos2::new(x, y), galley, text_color);
        y += h + 4.0 * s;
    }
    y += 8.0 * s;

    if !detail.hex.is_empty() {
        let label = painter.layout_no_wrap(
            "HEADER (HEX)".to_string(),
            FontId::proportional(frame.theme.small_size * 0.8 * s),
            muted,
        );
        let h = label.rect.height();
        painter.galley(Pos2::new(x, y), label, muted);
        y += h + 6.0 * s;
        y += hex_viewer::draw(painter, detail.hex, &HIGHLIGHT, frame, Pos2::new(x, y), inner);
        y += 12.0 * s;
    }

    let size = painter.layout_no_wrap(
        detail.size.to_string(),
        FontId::monospace(frame.theme.mono_size * s),
        color,
    );
    let h = size.rect.height();
    painter.galley(Pos2::new(x, y), size, color);
    y += h;

    if profile.number == 1 {
        y += 8.0 * s;
        y += signal_wave::draw(painter, true, None, frame, Pos2::new(x, y), inner);
    }

    let height = y + pad - pos.y;
    painter.set(
        bg,
        panel_shape(
            Rect::from_min_size(pos, egui::vec2(width, height)),
            12.0 * s,
            frame.color(frame.theme.layer_color(profile.number), 0.1),
            Stroke::new(2.0 * s, color),
        ),
    );
    height
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stack_grows_toward_current() {
        assert_eq!(stack_for(Direction::Down, 7), vec![7]);
        assert_eq!(stack_for(Direction::Down, 4), vec![4, 5, 6, 7]);
        assert_eq!(stack_for(Direction::Up, 1), vec![1]);
        assert_eq!(stack_for(Direction::Up, 3), vec![1, 2, 3]);
    }

    #[test]
    fn test_walk_always_lands_on_a_known_layer() {
        for step in 0..=crate::controller::ANIMATION_STEP_CAP {
            for direction in [Direction::Down, Direction::Up] {
                let current = layers::walk_layer(direction, step);
                assert!(layers::layer(current).is_some());
            }
        }
    }
}

use eframe::egui::{self, FontId, Pos2, Rect, Shape, Stroke};

use crate::deck::{Endpoint, Tone};
use crate::render::{panel_shape, SlideFrame};

/// Sender and receiver cards with the message travelling between them.
pub fn draw(
    painter: &egui::Painter,
    from: &Endpoint,
    to: &Endpoint,
    message: &str,
    frame: &SlideFrame,
    pos: Pos2,
    width: f32,
) -> f32 {
    let s = frame.scale;
    let card_width = 280.0 * s;
    let middle_width = 220.0 * s;
    let total = card_width * 2.0 + middle_width;
    let left = pos.x + (width - total).max(0.0) / 2.0;

    let h_from = draw_endpoint(
        painter,
        from,
        Tone::Green,
        frame,
        Pos2::new(left, pos.y),
        card_width,
    );
    let h_to = draw_endpoint(
        painter,
        to,
        Tone::Blue,
        frame,
        Pos2::new(left + card_width + middle_width, pos.y),
        card_width,
    );
    let height = h_from.max(h_to);

    // The message pulses between the endpoints.
    let pulse = 0.6 + 0.4 * (frame.elapsed * std::f32::consts::PI).sin().abs();
    let color = frame.color(frame.theme.tone(Tone::Yellow), pulse);
    let galley = painter.layout_no_wrap(
        message.to_string(),
        FontId::monospace(frame.theme.subtitle_size * s),
        color,
    );
    let center = Pos2::new(left + card_width + middle_width / 2.0, pos.y + height / 2.0);
    painter.galley(center - galley.rect.size() / 2.0, galley, color);

    height
}

fn draw_endpoint(
    painter: &egui::Painter,
    endpoint: &Endpoint,
    tone: Tone,
    frame: &SlideFrame,
    pos: Pos2,
    width: f32,
) -> f32 {
    let s = frame.scale;
    let pad = 16.0 * s;
    let accent = frame.color(frame.theme.tone(tone), 1.0);
    let bg = painter.add(Shape::Noop);
    let mut y = pos.y + pad;

    let lines = [
        (
            endpoint.icon,
            FontId::proportional(frame.theme.display_size * 0.7 * s),
            frame.color(egui::Color32::WHITE, 1.0),
        ),
        (endpoint.label, FontId::proportional(frame.theme.body_size * s), accent),
        (
            endpoint.address,
            FontId::monospace(frame.theme.mono_size * s),
            frame.color(frame.theme.muted, 1.0),
        ),
    ];
    for (text, font, color) in lines {
        let galley = painter.layout_no_wrap(text.to_string(), font, color);
        let h = galley.rect.height();
        painter.galley(Pos2::new(pos.x + (width - galley.rect.width()) / 2.0, y), galley, color);
        y += h + 4.0 * s;
    }

    let height = y - 4.0 * s + pad - pos.y;
    painter.set(
        bg,
        panel_shape(
            Rect::from_min_size(pos, egui::vec2(width, height)),
            12.0 * s,
            frame.color(frame.theme.tone(tone), 0.12),
            Stroke::new(1.5 * s, frame.color(frame.theme.tone(tone), 0.5)),
        ),
    );
    height
}

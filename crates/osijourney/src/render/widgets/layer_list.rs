use eframe::egui::{self, FontId, Pos2, Rect};

use crate::controller::ANIMATION_STEP_INTERVAL;
use crate::deck::layers::LAYERS;
use crate::render::SlideFrame;

/// Layer `n` appears once the step reaches `8 - n`, L7 first.
pub fn layer_visible(layer: u8, step: u8) -> bool {
    step >= 8u8.saturating_sub(layer)
}

/// Slide-in progress of a visible layer, 0 at its reveal and 1 one step later.
pub fn slide_in(layer: u8, elapsed: f32) -> f32 {
    let interval = ANIMATION_STEP_INTERVAL.as_secs_f32();
    let revealed_at = f32::from(8u8.saturating_sub(layer)) * interval;
    ((elapsed - revealed_at) / interval).clamp(0.0, 1.0)
}

/// The seven layers as tinted rows with a colored left edge.
pub fn draw(painter: &egui::Painter, frame: &SlideFrame, pos: Pos2, width: f32) -> f32 {
    let s = frame.scale;
    let gap = 8.0 * s;
    let pad = 10.0 * s;
    let number_width = 64.0 * s;
    let mut y = pos.y;

    for profile in &LAYERS {
        let row_top = y;
        let name_font = FontId::proportional(frame.theme.body_size * s);
        let role_font = FontId::proportional(frame.theme.small_size * 0.85 * s);
        let name_h = painter
            .layout_no_wrap(profile.name.to_string(), name_font.clone(), frame.theme.foreground)
            .rect
            .height();
        let role_h = painter
            .layout_no_wrap(profile.role.to_string(), role_font.clone(), frame.theme.muted)
            .rect
            .height();
        let row_height = name_h + role_h + pad * 2.0;
        y += row_height + gap;

        if !layer_visible(profile.number, frame.step) {
            continue;
        }
        let progress = slide_in(profile.number, frame.elapsed);
        let offset = -100.0 * s * (1.0 - progress);
        let alpha = 0.3 + 0.7 * progress;
        let color = frame.color(frame.theme.layer_color(profile.number), alpha);
        let left = pos.x + offset;

        let rect = Rect::from_min_size(Pos2::new(left, row_top), egui::vec2(width, row_height));
        painter.rect_filled(
            rect,
            6.0 * s,
            frame.color(frame.theme.layer_color(profile.number), 0.12 * alpha),
        );
        painter.rect_filled(
            Rect::from_min_size(rect.min, egui::vec2(4.0 * s, row_height)),
            0.0,
            color,
        );

        let number = painter.layout_no_wrap(
            format!("L{}", profile.number),
            FontId::proportional(frame.theme.subtitle_size * s),
            color,
        );
        painter.galley(
            Pos2::new(left + 16.0 * s, row_top + (row_height - number.rect.height()) / 2.0),
            number,
            color,
        );
        let name = painter.layout_no_wrap(profile.name.to_string(), name_font, color);
        painter.galley(Pos2::new(left + number_width, row_top + pad), name, color);
        let role_color = frame.color(frame.theme.muted, alpha);
        let role = painter.layout_no_wrap(profile.role.to_string(), role_font, role_color);
        painter.galley(Pos2::new(left + number_width, row_top + pad + name_h), role, role_color);
    }

    (y - pos.y - gap).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layers_appear_top_down() {
        assert!(!layer_visible(7, 0));
        assert!(layer_visible(7, 1));
        assert!(!layer_visible(6, 1));
        assert!(layer_visible(1, 7));
        assert!(!layer_visible(1, 6));
        let shown = (1..=7).filter(|&l| layer_visible(l, 3)).count();
        assert_eq!(shown, 3);
    }

    #[test]
    fn test_slide_in_takes_one_step() {
        assert_eq!(slide_in(7, 0.5), 0.0);
        assert_eq!(slide_in(7, 1.0), 1.0);
        assert_eq!(slide_in(7, 0.75), 0.5);
        assert_eq!(slide_in(1, 3.4), 0.0);
        assert_eq!(slide_in(1, 10.0), 1.0);
    }
}

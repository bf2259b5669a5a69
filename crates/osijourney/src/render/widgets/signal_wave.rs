use eframe::egui::{self, FontId, Pos2, Rect, Shape, Stroke};

use crate::deck::Tone;
use crate::render::SlideFrame;

/// The wave is defined in a 200x40 view box.
const VIEW_W: f32 = 200.0;
const VIEW_H: f32 = 40.0;
/// One up-arc plus one down-arc.
const PERIOD: f32 = 40.0;
/// Offset of each arc's control point from the midline.
const AMPLITUDE: f32 = 15.0;
/// View-box units scrolled per second.
const SPEED: f32 = 40.0;
const SAMPLES: usize = 120;

/// Height of the wave at view-box `x`: alternating quadratic arcs over the
/// midline `y = 20`, peaking at `y = 12.5` and dipping to `y = 27.5`.
pub fn wave_y(x: f32) -> f32 {
    let p = x.rem_euclid(PERIOD);
    let half = PERIOD / 2.0;
    let (u, sign) = if p < half { (p / half, -1.0) } else { ((p - half) / half, 1.0) };
    VIEW_H / 2.0 + sign * 2.0 * AMPLITUDE * u * (1.0 - u)
}

/// Horizontal scroll at `t` seconds; wraps every period.
pub fn scroll_offset(t: f32) -> f32 {
    (t * SPEED).rem_euclid(PERIOD)
}

/// View-box points of the scrolling wave.
pub fn wave_points(t: f32) -> Vec<(f32, f32)> {
    let offset = scroll_offset(t);
    (0..=SAMPLES)
        .map(|i| {
            let x = VIEW_W * i as f32 / SAMPLES as f32;
            (x, wave_y(x + offset))
        })
        .collect()
}

/// Draw the wave, or a dashed flat line when inactive. Returns height used.
pub fn draw(
    painter: &egui::Painter,
    active: bool,
    caption: Option<&str>,
    frame: &SlideFrame,
    pos: Pos2,
    width: f32,
) -> f32 {
    let s = frame.scale;
    let rect = Rect::from_min_size(pos, egui::vec2(width, 64.0 * s));
    let color = frame.color(frame.theme.tone(Tone::Green), 1.0);
    let stroke = Stroke::new(2.0 * s, color);
    let to_screen = |(x, y): (f32, f32)| {
        Pos2::new(
            rect.left() + x / VIEW_W * rect.width(),
            rect.top() + y / VIEW_H * rect.height(),
        )
    };

    if active {
        let points: Vec<Pos2> = wave_points(frame.elapsed).into_iter().map(to_screen).collect();
        painter.add(Shape::line(points, stroke));
    } else {
        let line = [to_screen((0.0, VIEW_H / 2.0)), to_screen((VIEW_W, VIEW_H / 2.0))];
        painter.extend(Shape::dashed_line(&line, stroke, 5.0 * s, 5.0 * s));
    }

    let mut height = rect.height();
    if let Some(caption) = caption {
        let caption_color = frame.color(frame.theme.accent, 1.0);
        let galley = painter.layout_no_wrap(
            caption.to_string(),
            FontId::monospace(frame.theme.small_size * s),
            caption_color,
        );
        let x = rect.center().x - galley.rect.width() / 2.0;
        height += galley.rect.height() + 6.0 * s;
        painter.galley(Pos2::new(x, rect.bottom() + 6.0 * s), galley, caption_color);
    }
    height
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn test_wave_passes_through_midline() {
        for x in [0.0, 20.0, 40.0, 60.0, 200.0] {
            assert!(close(wave_y(x), 20.0), "x = {x}");
        }
    }

    #[test]
    fn test_wave_alternates_peak_and_trough() {
        assert!(close(wave_y(10.0), 12.5));
        assert!(close(wave_y(30.0), 27.5));
        assert!(close(wave_y(50.0), 12.5));
    }

    #[test]
    fn test_scroll_repeats_every_second() {
        assert!(close(scroll_offset(0.0), 0.0));
        assert!(close(scroll_offset(0.5), 20.0));
        assert!(close(scroll_offset(1.0), 0.0));
        let a = wave_points(0.25);
        let b = wave_points(1.25);
        for (p, q) in a.iter().zip(&b) {
            assert!(close(p.1, q.1));
        }
    }

    #[test]
    fn test_points_span_view_box() {
        let points = wave_points(0.0);
        assert_eq!(points.first().map(|p| p.0), Some(0.0));
        assert_eq!(points.last().map(|p| p.0), Some(VIEW_W));
        assert!(points.iter().all(|&(_, y)| (0.0..=VIEW_H).contains(&y)));
    }
}

use eframe::egui::{self, FontId, Pos2, Rect};
use rand::Rng;

use crate::theme::Theme;

pub const DROP_COUNT: usize = 30;
/// Opacity of the whole rain layer.
pub const LAYER_OPACITY: f32 = 0.2;
/// Drops start this far above the top edge.
const START_OFFSET: f32 = 20.0;

/// One falling `0`/`1` glyph.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RainDrop {
    /// Horizontal position in percent of the width.
    pub left: f32,
    /// Seconds before the first fall.
    pub delay: f32,
    /// Seconds per fall.
    pub duration: f32,
    pub glyph: char,
}

impl RainDrop {
    /// Fall progress in `[0, 1)` at `t` seconds, or `None` before the delay.
    pub fn phase(&self, t: f32) -> Option<f32> {
        if t < self.delay {
            return None;
        }
        Some(((t - self.delay) % self.duration) / self.duration)
    }
}

/// Background of falling binary digits, generated once.
#[derive(Debug, Clone)]
pub struct BinaryRain {
    drops: Vec<RainDrop>,
}

impl BinaryRain {
    pub fn new(rng: &mut impl Rng) -> Self {
        let drops = (0..DROP_COUNT)
            .map(|_| RainDrop {
                left: rng.gen_range(0.0..100.0),
                delay: rng.gen_range(0.0..5.0),
                duration: rng.gen_range(3.0..7.0),
                glyph: if rng.gen_bool(0.5) { '1' } else { '0' },
            })
            .collect();
        Self { drops }
    }

    /// Paint every visible drop at `t` seconds since start.
    pub fn draw(&self, painter: &egui::Painter, theme: &Theme, rect: Rect, t: f32, scale: f32) {
        let font = FontId::monospace(14.0 * scale);
        let travel = rect.height() + START_OFFSET * scale;
        for drop in &self.drops {
            let Some(phase) = drop.phase(t) else {
                continue;
            };
            let color = Theme::with_opacity(theme.rain, LAYER_OPACITY * (1.0 - phase));
            let pos = Pos2::new(
                rect.left() + rect.width() * drop.left / 100.0,
                rect.top() - START_OFFSET * scale + travel * phase,
            );
            let galley = painter.layout_no_wrap(drop.glyph.to_string(), font.clone(), color);
            painter.galley(pos, galley, color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_drops_within_ranges() {
        let mut rng = StdRng::seed_from_u64(7);
        let rain = BinaryRain::new(&mut rng);
        assert_eq!(rain.drops.len(), DROP_COUNT);
        for drop in rain.drops {
            assert!((0.0..100.0).contains(&drop.left));
            assert!((0.0..5.0).contains(&drop.delay));
            assert!((3.0..7.0).contains(&drop.duration));
            assert!(drop.glyph == '0' || drop.glyph == '1');
        }
    }

    #[test]
    fn test_same_seed_same_rain() {
        let a = BinaryRain::new(&mut StdRng::seed_from_u64(42));
        let b = BinaryRain::new(&mut StdRng::seed_from_u64(42));
        assert_eq!(a.drops, b.drops);
    }

    #[test]
    fn test_phase_waits_for_delay_then_loops() {
        let drop = RainDrop {
            left: 50.0,
            delay: 2.0,
            duration: 4.0,
            glyph: '1',
        };
        assert_eq!(drop.phase(1.0), None);
        assert_eq!(drop.phase(2.0), Some(0.0));
        assert_eq!(drop.phase(4.0), Some(0.5));
        assert_eq!(drop.phase(7.0), Some(0.25));
    }
}

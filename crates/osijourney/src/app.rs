use std::time::{Duration, Instant};

use eframe::egui;
use tracing::{debug, info};

use crate::config::Config;
use crate::controller::{Controller, NavKey};
use crate::deck::{info as panels, Deck, FeatureLevel};
use crate::render::widgets::binary_rain::BinaryRain;
use crate::render::{self, chrome, overlay, Hits, SlideFrame};
use crate::theme::Theme;

/// Frame deltas above this are clamped so a stalled window does not skip slides.
const MAX_FRAME_DELTA: Duration = Duration::from_millis(250);
const REPAINT_INTERVAL: Duration = Duration::from_millis(16);
const TOAST_DURATION: f32 = 1.5;
const TOAST_FADE_START: f32 = 1.0;
const DOUBLE_TAP: f32 = 1.0;

struct Toast {
    message: String,
    start: Instant,
}

impl Toast {
    fn new(message: String) -> Self {
        Self {
            message,
            start: Instant::now(),
        }
    }

    fn opacity(&self) -> f32 {
        toast_opacity(self.start.elapsed().as_secs_f32())
    }

    fn is_expired(&self) -> bool {
        self.start.elapsed().as_secs_f32() >= TOAST_DURATION
    }
}

fn toast_opacity(elapsed: f32) -> f32 {
    if elapsed < TOAST_FADE_START {
        1.0
    } else if elapsed < TOAST_DURATION {
        1.0 - (elapsed - TOAST_FADE_START) / (TOAST_DURATION - TOAST_FADE_START)
    } else {
        0.0
    }
}

/// Keys routed to the controller.
fn nav_key(key: egui::Key) -> Option<NavKey> {
    match key {
        egui::Key::ArrowRight => Some(NavKey::ArrowRight),
        egui::Key::ArrowLeft => Some(NavKey::ArrowLeft),
        egui::Key::Space => Some(NavKey::Space),
        egui::Key::Home => Some(NavKey::Home),
        egui::Key::End => Some(NavKey::End),
        egui::Key::Escape => Some(NavKey::Escape),
        _ => None,
    }
}

/// Feed navigation key presses to the controller, in order.
///
/// Presses the controller handles are consumed from `events`; the rest stay
/// queued. Returns every navigation press with whether it was handled.
fn route_nav_keys(
    controller: &mut Controller,
    events: &mut Vec<egui::Event>,
) -> Vec<(NavKey, bool)> {
    let mut presses = Vec::new();
    events.retain(|event| {
        let egui::Event::Key {
            key, pressed: true, ..
        } = event
        else {
            return true;
        };
        let Some(nav) = nav_key(*key) else {
            return true;
        };
        let handled = controller.handle_key(nav);
        presses.push((nav, handled));
        !handled
    });
    presses
}

/// Where and how a presentation starts, after merging CLI flags with config.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Launch {
    pub level: FeatureLevel,
    /// 0-indexed, clamped to the deck.
    pub start: usize,
    pub autoplay: bool,
}

/// CLI flags win over config; config wins over built-in defaults.
pub fn resolve_launch(
    level: Option<FeatureLevel>,
    slide: Option<usize>,
    autoplay: bool,
    config: &Config,
) -> Launch {
    let defaults = config.defaults.as_ref();
    let level = level
        .or_else(|| {
            defaults
                .and_then(|d| d.level.as_deref())
                .and_then(FeatureLevel::from_name)
        })
        .unwrap_or_default();
    let slide = slide.or_else(|| defaults.and_then(|d| d.start_slide));
    let autoplay = autoplay || defaults.and_then(|d| d.autoplay.as_deref()) == Some("on");

    let total = Deck::new(level).len();
    let start = slide
        .map(|n| n.saturating_sub(1))
        .unwrap_or(0)
        .min(total.saturating_sub(1));

    Launch {
        level,
        start,
        autoplay,
    }
}

pub struct PresentationApp {
    deck: Deck,
    controller: Controller,
    theme: Theme,
    rain: BinaryRain,
    start: Instant,
    last_frame: Instant,
    show_hud: bool,
    toast: Option<Toast>,
    last_esc: Option<Instant>,
    hits: Hits,
}

impl PresentationApp {
    pub fn new(launch: Launch) -> Self {
        let deck = Deck::new(launch.level);
        let mut controller = Controller::starting_at(deck.len(), launch.start);
        if launch.autoplay {
            controller.toggle_autoplay();
        }
        let now = Instant::now();
        Self {
            theme: Theme::for_level(launch.level),
            rain: BinaryRain::new(&mut rand::thread_rng()),
            deck,
            controller,
            start: now,
            last_frame: now,
            show_hud: false,
            toast: None,
            last_esc: None,
            hits: Hits::new(),
        }
    }

    fn tick(&mut self) {
        let now = Instant::now();
        let dt = now.duration_since(self.last_frame).min(MAX_FRAME_DELTA);
        self.last_frame = now;
        self.controller.advance(dt);
    }

    fn draw_toast(&self, painter: &egui::Painter, rect: egui::Rect, scale: f32) {
        let Some(toast) = &self.toast else { return };
        let opacity = toast.opacity();
        if opacity <= 0.0 {
            return;
        }
        let color = Theme::with_opacity(self.theme.foreground, opacity * 0.9);
        let bg = Theme::with_opacity(self.theme.panel, opacity * 0.9);
        let galley = painter.layout_no_wrap(
            toast.message.clone(),
            egui::FontId::proportional(20.0 * scale),
            color,
        );
        let padding = 16.0 * scale;
        let toast_rect = egui::Rect::from_min_size(
            egui::pos2(
                rect.center().x - galley.rect.width() / 2.0 - padding,
                rect.bottom() - (chrome::BOTTOM_BAR + 80.0) * scale,
            ),
            egui::vec2(
                galley.rect.width() + padding * 2.0,
                galley.rect.height() + padding * 2.0,
            ),
        );
        painter.rect_filled(toast_rect, 8.0 * scale, bg);
        painter.galley(toast_rect.min + egui::vec2(padding, padding), galley, color);
    }
}

impl eframe::App for PresentationApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.tick();

        // Viewport commands are sent after the input closure to avoid a lock.
        let mut viewport_cmds: Vec<egui::ViewportCommand> = Vec::new();

        ctx.input_mut(|i| {
            if i.key_pressed(egui::Key::Q) {
                viewport_cmds.push(egui::ViewportCommand::Close);
                return;
            }
            if i.key_pressed(egui::Key::F) {
                viewport_cmds.push(egui::ViewportCommand::Fullscreen(
                    !i.viewport().fullscreen.unwrap_or(false),
                ));
            }
            if i.key_pressed(egui::Key::H) {
                self.show_hud = !self.show_hud;
            }
            if i.key_pressed(egui::Key::A) {
                self.controller.toggle_autoplay();
            }

            for (nav, handled) in route_nav_keys(&mut self.controller, &mut i.events) {
                if nav != NavKey::Escape {
                    continue;
                }
                if handled {
                    self.last_esc = None;
                    continue;
                }
                // Unhandled Escape: double-tap to exit.
                if self
                    .last_esc
                    .is_some_and(|last| last.elapsed().as_secs_f32() < DOUBLE_TAP)
                {
                    viewport_cmds.push(egui::ViewportCommand::Close);
                    return;
                }
                self.last_esc = Some(Instant::now());
                self.toast = Some(Toast::new("Premi Esc di nuovo per uscire".to_string()));
            }
        });

        for cmd in viewport_cmds {
            ctx.send_viewport_cmd(cmd);
        }

        if self.toast.as_ref().is_some_and(|t| t.is_expired()) {
            self.toast = None;
        }

        let (hover, click) = ctx.input(|i| {
            let click = if i.pointer.primary_clicked() {
                i.pointer.interact_pos()
            } else {
                None
            };
            (i.pointer.hover_pos(), click)
        });

        let bg = self.theme.background;
        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(bg).inner_margin(0.0))
            .show(ctx, |ui| {
                let rect = ui.max_rect();
                let painter = ui.painter();
                let scale = render::compute_scale(rect);
                let current = self.controller.current_slide();
                self.hits.clear();

                chrome::draw_backdrop(painter, &self.theme, rect);
                self.rain.draw(
                    painter,
                    &self.theme,
                    rect,
                    self.start.elapsed().as_secs_f32(),
                    scale,
                );
                let total = self.controller.total_slides();
                chrome::draw_progress(painter, &self.theme, rect, current, total, scale);

                if let Some(slide) = self.deck.get(current) {
                    let frame = SlideFrame {
                        theme: &self.theme,
                        scale,
                        opacity: 1.0,
                        step: self.controller.animation_step(),
                        elapsed: self.controller.time_on_slide().as_secs_f32(),
                    };
                    render::render_slide(
                        painter,
                        slide,
                        &frame,
                        chrome::slide_area(rect, scale),
                        &mut self.hits,
                    );
                }

                let nav = chrome::NavState {
                    current,
                    total,
                    autoplay: self.controller.is_autoplay(),
                };
                chrome::draw_nav(painter, &self.theme, rect, nav, hover, scale, &mut self.hits);

                if let Some(panel) = self.controller.active_info().and_then(panels::lookup) {
                    overlay::draw_info(painter, &self.theme, rect, panel, scale, &mut self.hits);
                }

                if self.show_hud {
                    chrome::draw_hud(painter, &self.theme, rect, scale);
                }
                self.draw_toast(painter, rect, scale);
            });

        if let Some(action) = click.and_then(|pos| self.hits.action_at(pos)) {
            debug!(?action, "pointer action");
            self.controller.apply(action);
        }
        if hover.is_some_and(|pos| self.hits.is_clickable(pos)) {
            ctx.set_cursor_icon(egui::CursorIcon::PointingHand);
        }

        // The background rain never stops, so keep a steady frame rate.
        ctx.request_repaint_after(REPAINT_INTERVAL);
    }
}

impl Drop for PresentationApp {
    fn drop(&mut self) {
        self.controller.shutdown();
        debug!("presentation closed");
    }
}

pub fn run(launch: Launch, windowed: bool) -> anyhow::Result<()> {
    let deck = Deck::new(launch.level);
    let title = format!("{} ({})", deck.title(), launch.level);
    info!(
        level = %launch.level,
        slides = deck.len(),
        start = launch.start + 1,
        autoplay = launch.autoplay,
        "starting presentation"
    );

    let viewport = if windowed {
        egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 720.0])
            .with_title(&title)
    } else {
        egui::ViewportBuilder::default()
            .with_fullscreen(true)
            .with_title(&title)
    };

    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        &title,
        options,
        Box::new(move |_cc| Ok(Box::new(PresentationApp::new(launch)))),
    )
    .map_err(|e| anyhow::anyhow!("{e}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DefaultsConfig;

    fn config(level: Option<&str>, autoplay: Option<&str>, start_slide: Option<usize>) -> Config {
        Config {
            defaults: Some(DefaultsConfig {
                level: level.map(str::to_string),
                autoplay: autoplay.map(str::to_string),
                start_slide,
            }),
        }
    }

    #[test]
    fn test_launch_defaults_without_config() {
        let launch = resolve_launch(None, None, false, &Config::default());
        assert_eq!(
            launch,
            Launch {
                level: FeatureLevel::InfoPanels,
                start: 0,
                autoplay: false,
            }
        );
    }

    #[test]
    fn test_cli_flags_override_config() {
        let cfg = config(Some("base"), Some("off"), Some(3));
        let launch = resolve_launch(Some(FeatureLevel::LargeDisplay), Some(5), true, &cfg);
        assert_eq!(launch.level, FeatureLevel::LargeDisplay);
        assert_eq!(launch.start, 4);
        assert!(launch.autoplay);
    }

    #[test]
    fn test_config_fills_missing_flags() {
        let cfg = config(Some("base"), Some("on"), Some(2));
        let launch = resolve_launch(None, None, false, &cfg);
        assert_eq!(launch.level, FeatureLevel::Base);
        assert_eq!(launch.start, 1);
        assert!(launch.autoplay);
    }

    #[test]
    fn test_start_slide_is_clamped_to_deck() {
        let launch = resolve_launch(Some(FeatureLevel::Base), Some(99), false, &Config::default());
        assert_eq!(launch.start, 11);
        let launch = resolve_launch(None, Some(0), false, &Config::default());
        assert_eq!(launch.start, 0);
    }

    #[test]
    fn test_unknown_config_level_falls_back() {
        let cfg = config(Some("deluxe"), None, None);
        assert_eq!(resolve_launch(None, None, false, &cfg).level, FeatureLevel::InfoPanels);
    }

    #[test]
    fn test_nav_keys() {
        assert_eq!(nav_key(egui::Key::Space), Some(NavKey::Space));
        assert_eq!(nav_key(egui::Key::Escape), Some(NavKey::Escape));
        assert_eq!(nav_key(egui::Key::Q), None);
    }

    fn key_press(key: egui::Key) -> egui::Event {
        egui::Event::Key {
            key,
            physical_key: None,
            pressed: true,
            repeat: false,
            modifiers: egui::Modifiers::NONE,
        }
    }

    #[test]
    fn test_handled_nav_keys_are_consumed() {
        let mut controller = Controller::new(5);
        let mut events = vec![
            key_press(egui::Key::ArrowRight),
            key_press(egui::Key::Q),
            key_press(egui::Key::Space),
        ];
        let presses = route_nav_keys(&mut controller, &mut events);

        assert_eq!(controller.current_slide(), 2);
        assert_eq!(presses, vec![(NavKey::ArrowRight, true), (NavKey::Space, true)]);
        assert_eq!(events, vec![key_press(egui::Key::Q)]);
    }

    #[test]
    fn test_unhandled_escape_stays_queued() {
        let mut controller = Controller::new(5);
        let mut events = vec![key_press(egui::Key::Escape)];
        let presses = route_nav_keys(&mut controller, &mut events);

        assert_eq!(presses, vec![(NavKey::Escape, false)]);
        assert_eq!(events.len(), 1);

        controller.open_info("ip");
        let presses = route_nav_keys(&mut controller, &mut events);
        assert_eq!(presses, vec![(NavKey::Escape, true)]);
        assert!(events.is_empty());
        assert_eq!(controller.active_info(), None);
    }

    #[test]
    fn test_toast_fades_out() {
        assert_eq!(toast_opacity(0.5), 1.0);
        assert!((toast_opacity(1.25) - 0.5).abs() < 1e-6);
        assert_eq!(toast_opacity(2.0), 0.0);
    }
}

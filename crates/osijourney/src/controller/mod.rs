pub mod scheduler;

use std::time::Duration;

use tracing::{debug, info, trace};

use scheduler::Scheduler;

/// Interval between animation step increments.
pub const ANIMATION_STEP_INTERVAL: Duration = Duration::from_millis(500);
/// Highest animation step; the step task stops once it is reached.
pub const ANIMATION_STEP_CAP: u8 = 10;
/// Interval between autoplay advances.
pub const AUTOPLAY_INTERVAL: Duration = Duration::from_millis(8000);

/// Recurring tasks owned by the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Task {
    AnimationStep,
    Autoplay,
}

/// Keys the controller reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    ArrowRight,
    ArrowLeft,
    Space,
    Home,
    End,
    Escape,
}

/// Pointer-driven requests collected while drawing a frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Next,
    Previous,
    GoTo(usize),
    ToggleAutoPlay,
    OpenInfo(String),
    CloseInfo,
}

/// Owns all mutable presentation state and the timers that drive it.
#[derive(Debug, Clone)]
pub struct Controller {
    total_slides: usize,
    current_slide: usize,
    animation_step: u8,
    autoplay: bool,
    active_info: Option<String>,
    slide_entered_at: Duration,
    scheduler: Scheduler<Task>,
}

impl Controller {
    /// Mount a controller on the first slide.
    pub fn new(total_slides: usize) -> Self {
        let mut controller = Self {
            total_slides: total_slides.max(1),
            current_slide: 0,
            animation_step: 0,
            autoplay: false,
            active_info: None,
            slide_entered_at: Duration::ZERO,
            scheduler: Scheduler::new(),
        };
        controller
            .scheduler
            .start(Task::AnimationStep, ANIMATION_STEP_INTERVAL);
        controller
    }

    /// Mount a controller on `start` (clamped).
    pub fn starting_at(total_slides: usize, start: usize) -> Self {
        let mut controller = Self::new(total_slides);
        controller.current_slide = start.min(controller.last_index());
        controller
    }

    pub fn total_slides(&self) -> usize {
        self.total_slides
    }

    pub fn current_slide(&self) -> usize {
        self.current_slide
    }

    pub fn animation_step(&self) -> u8 {
        self.animation_step
    }

    pub fn is_autoplay(&self) -> bool {
        self.autoplay
    }

    pub fn active_info(&self) -> Option<&str> {
        self.active_info.as_deref()
    }

    /// Time elapsed since the current slide was entered.
    pub fn time_on_slide(&self) -> Duration {
        self.scheduler.now().saturating_sub(self.slide_entered_at)
    }

    #[cfg(test)]
    pub fn is_task_running(&self, task: Task) -> bool {
        self.scheduler.is_scheduled(task)
    }

    fn last_index(&self) -> usize {
        self.total_slides - 1
    }

    pub fn go_to_slide(&mut self, index: usize) {
        let target = index.min(self.last_index());
        if target == self.current_slide {
            return;
        }
        debug!(from = self.current_slide, to = target, "slide change");
        self.current_slide = target;
        self.on_slide_changed();
    }

    pub fn next_slide(&mut self) {
        self.go_to_slide(self.current_slide.saturating_add(1));
    }

    pub fn previous_slide(&mut self) {
        self.go_to_slide(self.current_slide.saturating_sub(1));
    }

    pub fn toggle_autoplay(&mut self) {
        self.autoplay = !self.autoplay;
        if self.autoplay {
            self.scheduler.start(Task::Autoplay, AUTOPLAY_INTERVAL);
        } else {
            self.scheduler.cancel(Task::Autoplay);
        }
        info!(enabled = self.autoplay, "autoplay toggled");
    }

    pub fn open_info(&mut self, key: impl Into<String>) {
        let key = key.into();
        debug!(key = %key, "info panel opened");
        self.active_info = Some(key);
    }

    pub fn close_info(&mut self) {
        if self.active_info.take().is_some() {
            debug!("info panel closed");
        }
    }

    /// Map a key press to an operation. Returns whether the key was handled.
    pub fn handle_key(&mut self, key: NavKey) -> bool {
        match key {
            NavKey::ArrowRight | NavKey::Space => self.next_slide(),
            NavKey::ArrowLeft => self.previous_slide(),
            NavKey::Home => self.go_to_slide(0),
            NavKey::End => self.go_to_slide(self.last_index()),
            NavKey::Escape => {
                if self.active_info.is_none() {
                    return false;
                }
                self.close_info();
            }
        }
        true
    }

    pub fn apply(&mut self, action: Action) {
        match action {
            Action::Next => self.next_slide(),
            Action::Previous => self.previous_slide(),
            Action::GoTo(index) => self.go_to_slide(index),
            Action::ToggleAutoPlay => self.toggle_autoplay(),
            Action::OpenInfo(key) => self.open_info(key),
            Action::CloseInfo => self.close_info(),
        }
    }

    /// Advance simulated time by `dt`, firing due tasks in order.
    pub fn advance(&mut self, dt: Duration) {
        let until = self.scheduler.now() + dt;
        while let Some(task) = self.scheduler.pop_due(until) {
            trace!(?task, at = ?self.scheduler.now(), "task fired");
            self.fire(task);
        }
        self.scheduler.settle(until);
    }

    /// Tear down every timer, as on unmount.
    pub fn shutdown(&mut self) {
        self.scheduler.cancel_all();
    }

    fn fire(&mut self, task: Task) {
        match task {
            Task::AnimationStep => {
                self.animation_step = (self.animation_step + 1).min(ANIMATION_STEP_CAP);
                if self.animation_step >= ANIMATION_STEP_CAP {
                    self.scheduler.cancel(Task::AnimationStep);
                }
            }
            Task::Autoplay => {
                // Autoplay loops; manual navigation clamps.
                self.go_to_slide((self.current_slide + 1) % self.total_slides);
            }
        }
    }

    fn on_slide_changed(&mut self) {
        self.animation_step = 0;
        self.active_info = None;
        self.slide_entered_at = self.scheduler.now();
        self.scheduler
            .start(Task::AnimationStep, ANIMATION_STEP_INTERVAL);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_navigation_stays_in_range() {
        let mut c = Controller::new(16);
        let pattern = [1, 1, -1, 1, 1, 1, -1, -1, -1, -1, -1, 1];
        for _ in 0..10 {
            for &delta in &pattern {
                if delta > 0 {
                    c.next_slide();
                } else {
                    c.previous_slide();
                }
                assert!(c.current_slide() < 16);
            }
        }
        for _ in 0..40 {
            c.next_slide();
            assert!(c.current_slide() < 16);
        }
    }

    #[test]
    fn test_clamps_at_boundaries() {
        let mut c = Controller::new(16);
        c.previous_slide();
        assert_eq!(c.current_slide(), 0);
        c.go_to_slide(15);
        c.next_slide();
        assert_eq!(c.current_slide(), 15);
        c.go_to_slide(99);
        assert_eq!(c.current_slide(), 15);
    }

    #[test]
    fn test_right_arrow_fifteen_times_then_stops() {
        let mut c = Controller::new(16);
        for _ in 0..15 {
            assert!(c.handle_key(NavKey::ArrowRight));
        }
        assert_eq!(c.current_slide(), 15);
        c.handle_key(NavKey::ArrowRight);
        assert_eq!(c.current_slide(), 15);
    }

    #[test]
    fn test_home_and_end_keys() {
        let mut c = Controller::starting_at(16, 7);
        c.handle_key(NavKey::End);
        assert_eq!(c.current_slide(), 15);
        c.handle_key(NavKey::Home);
        assert_eq!(c.current_slide(), 0);
        c.handle_key(NavKey::Space);
        assert_eq!(c.current_slide(), 1);
        c.handle_key(NavKey::ArrowLeft);
        assert_eq!(c.current_slide(), 0);
    }

    #[test]
    fn test_autoplay_wraps_from_last_slide() {
        let mut c = Controller::starting_at(16, 15);
        c.toggle_autoplay();
        c.advance(AUTOPLAY_INTERVAL);
        assert_eq!(c.current_slide(), 0);
    }

    #[test]
    fn test_autoplay_single_tick() {
        let mut c = Controller::starting_at(16, 5);
        c.toggle_autoplay();
        assert!(c.is_autoplay());
        c.advance(ms(7999));
        assert_eq!(c.current_slide(), 5);
        c.advance(ms(1));
        assert_eq!(c.current_slide(), 6);
    }

    #[test]
    fn test_autoplay_eleven_ticks_wrap_through_zero() {
        let mut c = Controller::starting_at(16, 15);
        c.toggle_autoplay();
        for _ in 0..11 {
            c.advance(AUTOPLAY_INTERVAL);
        }
        assert_eq!(c.current_slide(), 10);
    }

    #[test]
    fn test_autoplay_in_one_long_advance() {
        let mut c = Controller::starting_at(16, 15);
        c.toggle_autoplay();
        c.advance(AUTOPLAY_INTERVAL * 11);
        assert_eq!(c.current_slide(), 10);
    }

    #[test]
    fn test_autoplay_off_stops_advancing() {
        let mut c = Controller::starting_at(16, 3);
        c.toggle_autoplay();
        c.toggle_autoplay();
        assert!(!c.is_task_running(Task::Autoplay));
        c.advance(AUTOPLAY_INTERVAL * 3);
        assert_eq!(c.current_slide(), 3);
    }

    #[test]
    fn test_slide_change_resets_step_and_info() {
        let mut c = Controller::new(16);
        c.advance(ms(2000));
        assert_eq!(c.animation_step(), 4);
        c.open_info("tcp");
        c.next_slide();
        assert_eq!(c.animation_step(), 0);
        assert_eq!(c.active_info(), None);
        assert_eq!(c.time_on_slide(), Duration::ZERO);
    }

    #[test]
    fn test_autoplay_advance_resets_step_and_info() {
        let mut c = Controller::starting_at(16, 2);
        c.toggle_autoplay();
        c.advance(ms(7000));
        c.open_info("nat");
        c.advance(ms(1000));
        assert_eq!(c.current_slide(), 3);
        assert_eq!(c.animation_step(), 0);
        assert_eq!(c.active_info(), None);
    }

    #[test]
    fn test_same_slide_is_not_a_change() {
        let mut c = Controller::new(16);
        c.advance(ms(1500));
        c.open_info("osi");
        c.go_to_slide(0);
        c.previous_slide();
        assert_eq!(c.animation_step(), 3);
        assert_eq!(c.active_info(), Some("osi"));
    }

    #[test]
    fn test_animation_step_increments_every_interval() {
        let mut c = Controller::new(16);
        for expected in 1..=ANIMATION_STEP_CAP {
            c.advance(ms(499));
            assert_eq!(c.animation_step(), expected - 1);
            c.advance(ms(1));
            assert_eq!(c.animation_step(), expected);
        }
    }

    #[test]
    fn test_animation_step_caps_and_stops() {
        let mut c = Controller::new(16);
        c.advance(Duration::from_secs(60));
        assert_eq!(c.animation_step(), ANIMATION_STEP_CAP);
        assert!(!c.is_task_running(Task::AnimationStep));
        assert!(!c.is_task_running(Task::Autoplay));
    }

    #[test]
    fn test_animation_restarts_after_slide_change() {
        let mut c = Controller::new(16);
        c.advance(ms(750));
        c.next_slide();
        c.advance(ms(499));
        assert_eq!(c.animation_step(), 0);
        c.advance(ms(1));
        assert_eq!(c.animation_step(), 1);
    }

    #[test]
    fn test_info_panel_is_single_slot() {
        let mut c = Controller::new(16);
        c.open_info("x");
        c.close_info();
        assert_eq!(c.active_info(), None);
        c.open_info("tls");
        c.open_info("wifi");
        assert_eq!(c.active_info(), Some("wifi"));
    }

    #[test]
    fn test_escape_only_handled_with_open_panel() {
        let mut c = Controller::new(16);
        assert!(!c.handle_key(NavKey::Escape));
        c.open_info("ofdm");
        assert!(c.handle_key(NavKey::Escape));
        assert_eq!(c.active_info(), None);
    }

    #[test]
    fn test_apply_actions() {
        let mut c = Controller::new(12);
        c.apply(Action::GoTo(4));
        c.apply(Action::Next);
        c.apply(Action::Previous);
        c.apply(Action::Previous);
        assert_eq!(c.current_slide(), 3);
        c.apply(Action::OpenInfo("tcp".to_string()));
        assert_eq!(c.active_info(), Some("tcp"));
        c.apply(Action::CloseInfo);
        assert_eq!(c.active_info(), None);
        c.apply(Action::ToggleAutoPlay);
        assert!(c.is_autoplay());
    }

    #[test]
    fn test_shutdown_cancels_all_timers() {
        let mut c = Controller::new(16);
        c.toggle_autoplay();
        c.shutdown();
        c.advance(AUTOPLAY_INTERVAL * 2);
        assert_eq!(c.current_slide(), 0);
        assert_eq!(c.animation_step(), 0);
    }

    #[test]
    fn test_starting_at_clamps() {
        let c = Controller::starting_at(12, 40);
        assert_eq!(c.current_slide(), 11);
        let empty = Controller::new(0);
        assert_eq!(empty.total_slides(), 1);
    }
}

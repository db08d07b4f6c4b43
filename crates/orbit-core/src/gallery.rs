use crate::error::GalleryError;
use crate::item::Item;
use crate::layout::{CircleSize, FULL_TURN, Layout, normalize};
use crate::options::{Options, OptionsPatch};
use crate::panel::{PanelContent, PanelField, PanelStage, TransitionToken};
use crate::surface::{Motion, Surface};
use crate::timer::{ManualScheduler, Scheduler, Timer, TimerHandle};
use std::time::Duration;
use strum::{Display as StrumDisplay, EnumString, IntoEnumIterator};

/// Magnitude past which a tick folds the accumulated rotation back into `[0, 360)`.
pub const REBASE_THRESHOLD: f64 = FULL_TURN * 1024.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, StrumDisplay)]
pub enum NavKey {
    #[strum(serialize = "ArrowLeft", serialize = "Left")]
    ArrowLeft,
    #[strum(serialize = "ArrowRight", serialize = "Right")]
    ArrowRight,
}

/// Where a navigation came from. Picks the resume delay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    Item,
    Control,
    Key,
    Jump,
}

impl Trigger {
    pub fn resume_delay(&self, options: &Options) -> Duration {
        match self {
            Self::Item => options.click_resume_delay,
            Self::Control | Self::Key | Self::Jump => options.auto_rotate_resume_delay,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Idle,
    AutoRotating,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GalleryState {
    pub current_index: usize,
    /// Absolute ring rotation in degrees. Accumulates; never wrapped on assignment.
    pub rotation: f64,
    pub auto_rotating: bool,
    pub item_count: usize,
}

/// Operations a host exposes for a live gallery, independent of its surface and scheduler.
pub trait GalleryControl {
    fn pause(&mut self);
    fn resume(&mut self);
    fn go_to(&mut self, index: usize);
    fn next(&mut self);
    fn previous(&mut self);
    fn press_key(&mut self, key: NavKey);
    fn update_options(&mut self, patch: &OptionsPatch);
    fn dispose(&mut self);
    fn state(&self) -> GalleryState;
}

/// Rotation and selection controller for one ring of items.
pub struct Gallery<V, S> {
    items: Vec<Item>,
    options: Options,
    state: GalleryState,
    viewport_width: f64,
    eased: bool,
    token: TransitionToken,
    ticker: Option<TimerHandle>,
    disposed: bool,
    surface: V,
    scheduler: S,
}

impl<V: Surface, S: Scheduler> Gallery<V, S> {
    /// Builds the gallery, snaps the ring to the first item, starts the panel reveal and
    /// auto-rotation.
    pub fn new(
        items: Vec<Item>,
        options: Options,
        viewport_width: f64,
        surface: V,
        scheduler: S,
    ) -> Result<Self, GalleryError> {
        if items.is_empty() {
            return Err(GalleryError::NoItems);
        }

        let item_count = items.len();
        let mut gallery = Self {
            items,
            options,
            state: GalleryState {
                current_index: 0,
                rotation: 0.0,
                auto_rotating: false,
                item_count,
            },
            viewport_width,
            eased: false,
            token: TransitionToken::default(),
            ticker: None,
            disposed: false,
            surface,
            scheduler,
        };
        gallery.init();
        Ok(gallery)
    }

    fn init(&mut self) {
        let layout = self.layout();
        let size = CircleSize::for_count(self.state.item_count);
        self.surface.set_circle_size(size);
        self.surface.set_active_slot(layout.active_slot());

        // no easing until the settle timer fires, so the ring does not spin in on load
        self.state.rotation = layout.expected_angle(0);
        self.surface.rotate(self.state.rotation, Motion::Instant);
        self.scheduler.once(self.options.settle_delay, Timer::Settle);

        self.reveal_initial_panel();
        self.start_auto_rotation();

        log::info!(
            "Gallery ready: {} items, {}, active slot {}°",
            self.state.item_count,
            size,
            layout.active_slot()
        );
    }

    pub fn layout(&self) -> Layout {
        Layout::new(self.state.item_count, self.options.active_position)
    }

    pub fn state(&self) -> GalleryState {
        self.state
    }

    pub fn mode(&self) -> Mode {
        if self.state.auto_rotating {
            Mode::AutoRotating
        } else {
            Mode::Idle
        }
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn current_item(&self) -> &Item {
        &self.items[self.state.current_index]
    }

    pub fn viewport_width(&self) -> f64 {
        self.viewport_width
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    pub fn surface(&self) -> &V {
        &self.surface
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn start_auto_rotation(&mut self) {
        if self.disposed || self.state.auto_rotating {
            return;
        }
        self.state.auto_rotating = true;
        self.ticker = Some(self.scheduler.every(self.options.tick_interval, Timer::Tick));
    }

    pub fn stop_auto_rotation(&mut self) {
        if !self.state.auto_rotating {
            return;
        }
        self.state.auto_rotating = false;
        if let Some(handle) = self.ticker.take() {
            self.scheduler.cancel(handle);
        }
    }

    pub fn pause(&mut self) {
        self.stop_auto_rotation();
    }

    pub fn resume(&mut self) {
        self.start_auto_rotation();
    }

    pub fn next(&mut self) {
        self.navigate(self.neighbour(true), Trigger::Control);
    }

    pub fn previous(&mut self) {
        self.navigate(self.neighbour(false), Trigger::Control);
    }

    /// Jumps to `index`. Out-of-range indices are ignored.
    pub fn go_to(&mut self, index: usize) {
        self.navigate(index, Trigger::Jump);
    }

    /// Item click. Clicking the current item still replays the whole transition.
    pub fn select(&mut self, index: usize) {
        self.navigate(index, Trigger::Item);
    }

    pub fn press_key(&mut self, key: NavKey) {
        let forward = key == NavKey::ArrowRight;
        self.navigate(self.neighbour(forward), Trigger::Key);
    }

    /// Recomputes the active description for a new viewport width without replaying the fade.
    pub fn resize(&mut self, viewport_width: f64) {
        if self.disposed {
            return;
        }
        self.viewport_width = viewport_width;
        let content = self.content_for(self.state.current_index);
        self.surface.set_description(&content.description);
    }

    pub fn update_options(&mut self, patch: &OptionsPatch) {
        if self.disposed {
            return;
        }
        let tick_interval = self.options.tick_interval;
        self.options.apply(patch);
        self.surface.set_active_slot(self.layout().active_slot());

        if self.options.tick_interval != tick_interval
            && let Some(handle) = self.ticker.take()
        {
            self.scheduler.cancel(handle);
            self.ticker = Some(self.scheduler.every(self.options.tick_interval, Timer::Tick));
        }
        // breakpoint and word budget apply to the description already on screen
        self.resize(self.viewport_width);
        log::debug!("Options updated: {:?}", self.options);
    }

    /// Cancels every pending timer. All later input is ignored.
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        self.scheduler.cancel_all();
        self.ticker = None;
        self.state.auto_rotating = false;
        self.disposed = true;
        log::info!("Gallery disposed");
    }

    pub fn on_timer(&mut self, timer: Timer) {
        if self.disposed {
            return;
        }
        match timer {
            Timer::Tick => self.tick(),
            Timer::Resume => self.start_auto_rotation(),
            Timer::Settle => self.eased = true,
            Timer::Panel { token, stage } => self.run_panel_stage(token, stage),
        }
    }

    fn neighbour(&self, forward: bool) -> usize {
        let count = self.state.item_count;
        let current = self.state.current_index;
        if forward {
            (current + 1) % count
        } else {
            (current + count - 1) % count
        }
    }

    fn navigate(&mut self, index: usize, trigger: Trigger) {
        if self.disposed || index >= self.state.item_count {
            return;
        }
        log::debug!("Navigating to item {} ({:?})", index, trigger);

        self.stop_auto_rotation();
        self.state.current_index = index;
        self.state.rotation = self.layout().rotate_to(self.state.rotation, index);
        let motion = if self.eased {
            Motion::Eased
        } else {
            Motion::Instant
        };
        self.surface.rotate(self.state.rotation, motion);
        self.transition_panel(index);
        self.scheduler
            .once(trigger.resume_delay(&self.options), Timer::Resume);
    }

    fn tick(&mut self) {
        if !self.state.auto_rotating {
            return;
        }
        self.state.rotation += self.options.auto_rotate_speed;
        if self.state.rotation.abs() > REBASE_THRESHOLD {
            self.state.rotation = normalize(self.state.rotation);
        }
        self.surface.rotate(self.state.rotation, Motion::Instant);

        if let Some(index) = self.layout().item_at(self.state.rotation)
            && index != self.state.current_index
        {
            self.state.current_index = index;
            self.transition_panel(index);
        }
    }

    fn content_for(&self, index: usize) -> PanelContent {
        PanelContent::for_item(
            &self.items[index],
            self.viewport_width,
            self.options.mobile_breakpoint,
            self.options.description_words,
        )
    }

    fn hide_panel(&mut self) {
        for field in PanelField::iter() {
            self.surface.set_field_visible(field, false);
        }
    }

    fn transition_panel(&mut self, index: usize) {
        self.token = self.token.next();
        self.surface.mark_active(index);
        self.hide_panel();
        self.scheduler.once(
            self.options.swap_delay,
            Timer::Panel {
                token: self.token,
                stage: PanelStage::Swap(index),
            },
        );
    }

    fn reveal_initial_panel(&mut self) {
        self.token = self.token.next();
        self.surface.mark_active(self.state.current_index);
        self.hide_panel();
        let content = self.content_for(self.state.current_index);
        self.surface.set_panel_content(&content);
        self.schedule_reveals(self.options.fade_in_delay, self.options.fade_in_stagger);
    }

    fn schedule_reveals(&mut self, offset: Duration, stagger: Duration) {
        let token = self.token;
        for (k, field) in PanelField::iter().enumerate() {
            self.scheduler.once(
                offset + stagger * k as u32,
                Timer::Panel {
                    token,
                    stage: PanelStage::Reveal(field),
                },
            );
        }
    }

    fn run_panel_stage(&mut self, token: TransitionToken, stage: PanelStage) {
        if token != self.token {
            log::trace!("Dropping stale panel stage {:?} ({} < {})", stage, token, self.token);
            return;
        }
        match stage {
            PanelStage::Swap(index) => {
                let content = self.content_for(index);
                self.surface.set_panel_content(&content);
                self.schedule_reveals(self.options.reveal_offset, self.options.reveal_stagger);
            }
            PanelStage::Reveal(field) => self.surface.set_field_visible(field, true),
        }
    }
}

impl<V: Surface> Gallery<V, ManualScheduler> {
    /// Moves the virtual clock forward, firing every timer that falls due on the way.
    pub fn advance(&mut self, by: Duration) {
        let deadline = self.scheduler.now() + by;
        while let Some(timer) = self.scheduler.pop_due(deadline) {
            self.on_timer(timer);
        }
        self.scheduler.set_now(deadline);
    }
}

impl<V: Surface, S: Scheduler> GalleryControl for Gallery<V, S> {
    fn pause(&mut self) {
        Gallery::pause(self);
    }

    fn resume(&mut self) {
        Gallery::resume(self);
    }

    fn go_to(&mut self, index: usize) {
        Gallery::go_to(self, index);
    }

    fn next(&mut self) {
        Gallery::next(self);
    }

    fn previous(&mut self) {
        Gallery::previous(self);
    }

    fn press_key(&mut self, key: NavKey) {
        Gallery::press_key(self, key);
    }

    fn update_options(&mut self, patch: &OptionsPatch) {
        Gallery::update_options(self, patch);
    }

    fn dispose(&mut self) {
        Gallery::dispose(self);
    }

    fn state(&self) -> GalleryState {
        Gallery::state(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{HALF_TURN, angle_difference};
    use crate::surface::Scene;

    type TestGallery = Gallery<Scene, ManualScheduler>;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    fn items(n: usize) -> Vec<Item> {
        (0..n)
            .map(|i| {
                Item::new(
                    format!("Item {i}"),
                    format!("Description of item number {i}"),
                    format!("Open {i}"),
                )
            })
            .collect()
    }

    fn gallery_with(n: usize, options: Options, width: f64) -> TestGallery {
        Gallery::new(items(n), options, width, Scene::default(), ManualScheduler::new()).unwrap()
    }

    fn gallery(n: usize) -> TestGallery {
        gallery_with(n, Options::default(), 1280.0)
    }

    fn congruent(a: f64, b: f64) -> bool {
        angle_difference(a, b) < 1e-6
    }

    fn all_visible(g: &TestGallery) -> bool {
        PanelField::iter().all(|f| g.surface().is_visible(f))
    }

    #[test]
    fn test_empty_gallery_is_rejected() {
        let result = Gallery::new(
            Vec::new(),
            Options::default(),
            1280.0,
            Scene::default(),
            ManualScheduler::new(),
        );
        assert_eq!(result.err(), Some(GalleryError::NoItems));
    }

    #[test]
    fn test_construction_snaps_to_first_item() {
        let g = gallery(7);
        let state = g.state();

        assert_eq!(state.current_index, 0);
        assert_eq!(state.rotation, 270.0);
        assert_eq!(state.item_count, 7);
        assert_eq!(g.mode(), Mode::AutoRotating);

        let scene = g.surface();
        assert_eq!(scene.active_slot, 270.0);
        assert_eq!(scene.circle_size, CircleSize::Medium);
        assert_eq!(scene.motion, Motion::Instant);
        assert_eq!(scene.active, Some(0));
        assert_eq!(scene.panel.title, "Item 0");
        assert_eq!(g.scheduler().pending_of(Timer::Tick), 1);
    }

    #[test]
    fn test_large_gallery_uses_configured_slot() {
        let g = gallery(12);
        assert_eq!(g.state().rotation, 270.12);
        assert_eq!(g.surface().active_slot, 270.12);
        assert_eq!(g.surface().circle_size, CircleSize::Large);
    }

    #[test]
    fn test_initial_reveal_is_staggered() {
        let mut g = gallery(5);
        assert!(!g.surface().is_visible(PanelField::Title));

        g.advance(ms(100));
        assert!(g.surface().is_visible(PanelField::Title));
        assert!(!g.surface().is_visible(PanelField::Description));

        g.advance(ms(200));
        assert!(g.surface().is_visible(PanelField::Description));
        assert!(!g.surface().is_visible(PanelField::Button));

        g.advance(ms(200));
        assert!(all_visible(&g));
        assert_eq!(g.state().current_index, 0);
    }

    #[test]
    fn test_go_to_every_index() {
        for count in 1..=50 {
            let mut g = gallery(count);
            for i in 0..count {
                g.go_to(i);
                assert_eq!(g.state().current_index, i);
                assert!(congruent(g.state().rotation, g.layout().expected_angle(i)));
                assert_eq!(g.surface().active, Some(i));
            }
        }
    }

    #[test]
    fn test_go_to_out_of_range_is_ignored() {
        let mut g = gallery(6);
        g.advance(ms(600));
        let before = g.state();
        let scene = g.surface().clone();

        g.go_to(6);
        g.go_to(usize::MAX);

        assert_eq!(g.state(), before);
        assert_eq!(g.surface(), &scene);
        assert_eq!(g.scheduler().pending_of(Timer::Resume), 0);
    }

    #[test]
    fn test_three_nexts_on_six_items() {
        let mut g = gallery(6);
        assert_eq!(g.state().rotation, 270.0);

        for _ in 0..3 {
            let before = g.state().rotation;
            g.next();
            let delta = g.state().rotation - before;
            assert!(delta > -HALF_TURN && delta <= HALF_TURN);
        }

        assert_eq!(g.state().current_index, 3);
        assert_eq!(g.current_item().title, "Item 3");
        assert_eq!(g.layout().expected_angle(3), 90.0);
        assert!(congruent(g.state().rotation, 90.0));
    }

    #[test]
    fn test_full_circle_returns_to_start() {
        for count in [1, 3, 6, 7, 12, 16, 33] {
            let mut g = gallery(count);
            let start = g.state().rotation;
            for _ in 0..count {
                g.next();
            }
            assert_eq!(g.state().current_index, 0);
            assert!(congruent(g.state().rotation, start), "count {count}");
        }
    }

    #[test]
    fn test_next_then_previous_restores_index() {
        let mut g = gallery(5);
        g.go_to(4);
        g.next();
        assert_eq!(g.state().current_index, 0);
        g.previous();
        assert_eq!(g.state().current_index, 4);
        g.previous();
        g.next();
        assert_eq!(g.state().current_index, 4);
    }

    #[test]
    fn test_pause_and_resume_are_idempotent() {
        let mut g = gallery(6);

        g.pause();
        g.pause();
        assert_eq!(g.mode(), Mode::Idle);
        assert_eq!(g.scheduler().pending_of(Timer::Tick), 0);

        g.resume();
        g.resume();
        assert_eq!(g.mode(), Mode::AutoRotating);
        assert_eq!(g.scheduler().pending_of(Timer::Tick), 1);

        let before = g.state().rotation;
        g.advance(ms(200));
        assert!((g.state().rotation - (before + 10.0 * 0.08)).abs() < 1e-9);
    }

    #[test]
    fn test_tick_interval_change_reschedules_running_ticker() {
        let mut g = gallery(6);
        g.update_options(&OptionsPatch {
            tick_interval: Some(ms(100)),
            ..Default::default()
        });
        assert_eq!(g.scheduler().pending_of(Timer::Tick), 1);

        let before = g.state().rotation;
        g.advance(ms(100));
        assert!((g.state().rotation - (before + 0.08)).abs() < 1e-9);

        g.pause();
        g.update_options(&OptionsPatch {
            tick_interval: Some(ms(40)),
            ..Default::default()
        });
        assert_eq!(g.mode(), Mode::Idle);
        assert_eq!(g.scheduler().pending_of(Timer::Tick), 0);
    }

    #[test]
    fn test_auto_rotation_selects_item_entering_slot() {
        let options = Options {
            auto_rotate_speed: 2.0,
            ..Default::default()
        };
        let mut g = gallery_with(6, options, 1280.0);

        g.advance(ms(540));
        assert_eq!(g.state().current_index, 0);

        // rotation reaches 326° on the 28th tick, inside the tolerance of item 5 (330°)
        g.advance(ms(20));
        assert_eq!(g.state().current_index, 5);
        assert_eq!(g.surface().active, Some(5));
        assert!(!g.surface().is_visible(PanelField::Title));

        g.advance(ms(350));
        assert_eq!(g.surface().panel.title, "Item 5");
        assert!(g.surface().is_visible(PanelField::Title));
        assert!(!g.surface().is_visible(PanelField::Description));
    }

    #[test]
    fn test_control_navigation_resumes_after_delay() {
        let mut g = gallery(6);
        g.next();
        assert_eq!(g.mode(), Mode::Idle);

        g.advance(ms(2999));
        assert_eq!(g.mode(), Mode::Idle);
        g.advance(ms(1));
        assert_eq!(g.mode(), Mode::AutoRotating);
    }

    #[test]
    fn test_item_click_uses_longer_resume_delay() {
        let mut g = gallery(6);
        g.select(2);
        assert_eq!(g.state().current_index, 2);

        g.advance(ms(4999));
        assert_eq!(g.mode(), Mode::Idle);
        g.advance(ms(1));
        assert_eq!(g.mode(), Mode::AutoRotating);
    }

    #[test]
    fn test_clicking_current_item_replays_transition() {
        let mut g = gallery(6);
        g.pause();
        g.advance(ms(1000));
        assert!(all_visible(&g));
        let rotation = g.state().rotation;

        g.select(0);
        assert_eq!(g.state().rotation, rotation);
        assert!(!g.surface().is_visible(PanelField::Title));
        assert_eq!(g.scheduler().pending_of(Timer::Resume), 1);

        g.advance(ms(700));
        assert!(all_visible(&g));
        assert_eq!(g.surface().panel.title, "Item 0");
    }

    #[test]
    fn test_arrow_keys_navigate() {
        let mut g = gallery(4);
        g.press_key(NavKey::ArrowRight);
        assert_eq!(g.state().current_index, 1);
        g.press_key(NavKey::ArrowLeft);
        g.press_key(NavKey::ArrowLeft);
        assert_eq!(g.state().current_index, 3);

        g.advance(ms(3000));
        assert_eq!(g.mode(), Mode::AutoRotating);
        assert_eq!("Right".parse::<NavKey>(), Ok(NavKey::ArrowRight));
    }

    #[test]
    fn test_stale_resume_does_not_double_tick() {
        let mut g = gallery(6);
        g.next();
        g.advance(ms(1000));
        g.next();

        g.advance(ms(2000));
        assert_eq!(g.mode(), Mode::AutoRotating);
        assert_eq!(g.scheduler().pending_of(Timer::Tick), 1);

        g.advance(ms(1000));
        assert_eq!(g.scheduler().pending_of(Timer::Tick), 1);
    }

    #[test]
    fn test_newer_transition_supersedes_older() {
        let mut g = gallery(6);
        g.pause();
        g.advance(ms(1000));

        g.next();
        g.advance(ms(100));
        g.next();

        // the first sequence's swap falls due here and must be dropped
        g.advance(ms(250));
        assert_eq!(g.surface().panel.title, "Item 0");
        assert!(!g.surface().is_visible(PanelField::Title));

        g.advance(ms(700));
        assert_eq!(g.surface().panel.title, "Item 2");
        assert!(all_visible(&g));
    }

    #[test]
    fn test_navigation_eases_only_after_settle() {
        let mut g = gallery(6);
        g.next();
        assert_eq!(g.surface().motion, Motion::Instant);

        g.advance(ms(50));
        g.next();
        assert_eq!(g.surface().motion, Motion::Eased);
    }

    #[test]
    fn test_resize_truncates_active_description() {
        let mut g = gallery(3);
        g.pause();
        g.advance(ms(1000));
        assert_eq!(g.surface().panel.description, "Description of item number 0");

        g.resize(768.0);
        assert_eq!(g.surface().panel.description, "Description of item...");
        assert!(all_visible(&g));

        g.resize(1024.0);
        assert_eq!(g.surface().panel.description, "Description of item number 0");
    }

    #[test]
    fn test_description_options_apply_to_active_panel() {
        let mut g = gallery(3);
        g.pause();
        g.advance(ms(1000));

        g.update_options(&OptionsPatch {
            mobile_breakpoint: Some(1400.0),
            ..Default::default()
        });
        assert_eq!(g.surface().panel.description, "Description of item...");

        g.update_options(&OptionsPatch {
            description_words: Some(2),
            ..Default::default()
        });
        assert_eq!(g.surface().panel.description, "Description of...");
        assert!(all_visible(&g));
    }

    #[test]
    fn test_narrow_viewport_truncates_swapped_content() {
        let mut g = gallery_with(3, Options::default(), 375.0);
        assert_eq!(g.surface().panel.description, "Description of item...");
        g.next();
        g.advance(ms(300));
        assert_eq!(g.surface().panel.description, "Description of item...");
        assert_eq!(g.surface().panel.title, "Item 1");
    }

    #[test]
    fn test_update_options_moves_active_slot() {
        let mut g = gallery(12);
        g.update_options(&OptionsPatch {
            active_position: Some(90.0),
            ..Default::default()
        });
        assert_eq!(g.surface().active_slot, 90.0);

        g.go_to(3);
        assert!(congruent(g.state().rotation, 0.0));
    }

    #[test]
    fn test_long_sessions_rebase_rotation() {
        let mut g = gallery(6);
        g.update_options(&OptionsPatch {
            auto_rotate_speed: Some(400_000.0),
            ..Default::default()
        });
        g.advance(ms(20));
        let rotation = g.state().rotation;
        assert!((0.0..FULL_TURN).contains(&rotation));
        assert_eq!(rotation, 310.0);
    }

    #[test]
    fn test_dispose_cancels_everything() {
        let mut g = gallery(6);
        g.next();
        g.dispose();
        assert!(g.is_disposed());
        assert_eq!(g.scheduler().pending(), 0);

        let state = g.state();
        g.next();
        g.resume();
        g.on_timer(Timer::Tick);
        g.resize(300.0);
        assert_eq!(g.state(), state);
        assert_eq!(g.mode(), Mode::Idle);
        assert_eq!(g.scheduler().pending(), 0);
    }

    #[test]
    fn test_control_trait_delegates() {
        let mut g = gallery(4);
        let control: &mut dyn GalleryControl = &mut g;
        control.go_to(2);
        control.next();
        assert_eq!(control.state().current_index, 3);
        control.dispose();
        assert!(g.is_disposed());
    }
}

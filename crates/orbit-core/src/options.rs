use serde::{Deserialize, Serialize};
use serde_with::{DurationMilliSeconds, DurationSecondsWithFrac, serde_as};
use std::time::Duration;

/// Gallery tunables. Every field falls back to its default when absent from the source.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    /// Degrees added to the ring rotation on every auto-rotate tick.
    pub auto_rotate_speed: f64,
    /// Duration of eased rotations; advisory to the renderer.
    #[serde_as(as = "DurationSecondsWithFrac<f64>")]
    pub transition_speed: Duration,
    /// Active slot angle, only honoured for galleries of more than ten items.
    pub active_position: f64,
    pub mobile_breakpoint: f64,
    pub small_mobile_breakpoint: f64,
    #[serde_as(as = "DurationMilliSeconds<u64>")]
    pub fade_in_delay: Duration,
    #[serde_as(as = "DurationMilliSeconds<u64>")]
    pub fade_in_stagger: Duration,
    #[serde_as(as = "DurationMilliSeconds<u64>")]
    pub auto_rotate_resume_delay: Duration,
    #[serde_as(as = "DurationMilliSeconds<u64>")]
    pub click_resume_delay: Duration,
    #[serde_as(as = "DurationMilliSeconds<u64>")]
    pub tick_interval: Duration,
    #[serde_as(as = "DurationMilliSeconds<u64>")]
    pub swap_delay: Duration,
    #[serde_as(as = "DurationMilliSeconds<u64>")]
    pub reveal_offset: Duration,
    #[serde_as(as = "DurationMilliSeconds<u64>")]
    pub reveal_stagger: Duration,
    #[serde_as(as = "DurationMilliSeconds<u64>")]
    pub settle_delay: Duration,
    /// Word budget for descriptions on narrow viewports.
    pub description_words: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            auto_rotate_speed: 0.08,
            transition_speed: Duration::from_millis(600),
            active_position: 270.12,
            mobile_breakpoint: 768.0,
            small_mobile_breakpoint: 480.0,
            fade_in_delay: Duration::from_millis(100),
            fade_in_stagger: Duration::from_millis(200),
            auto_rotate_resume_delay: Duration::from_millis(3000),
            click_resume_delay: Duration::from_millis(5000),
            tick_interval: Duration::from_millis(20),
            swap_delay: Duration::from_millis(300),
            reveal_offset: Duration::from_millis(50),
            reveal_stagger: Duration::from_millis(150),
            settle_delay: Duration::from_millis(50),
            description_words: 3,
        }
    }
}

impl Options {
    /// Overwrites every field the patch sets. No validation is performed.
    pub fn apply(&mut self, patch: &OptionsPatch) {
        macro_rules! merge {
            ($($field:ident),* $(,)?) => {
                $(if let Some(value) = patch.$field {
                    self.$field = value;
                })*
            };
        }
        merge!(
            auto_rotate_speed,
            transition_speed,
            active_position,
            mobile_breakpoint,
            small_mobile_breakpoint,
            fade_in_delay,
            fade_in_stagger,
            auto_rotate_resume_delay,
            click_resume_delay,
            tick_interval,
            swap_delay,
            reveal_offset,
            reveal_stagger,
            settle_delay,
            description_words,
        );
    }

    pub fn merged(mut self, patch: &OptionsPatch) -> Self {
        self.apply(patch);
        self
    }
}

/// Partial set of options, as passed to a live update.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct OptionsPatch {
    pub auto_rotate_speed: Option<f64>,
    pub transition_speed: Option<Duration>,
    pub active_position: Option<f64>,
    pub mobile_breakpoint: Option<f64>,
    pub small_mobile_breakpoint: Option<f64>,
    pub fade_in_delay: Option<Duration>,
    pub fade_in_stagger: Option<Duration>,
    pub auto_rotate_resume_delay: Option<Duration>,
    pub click_resume_delay: Option<Duration>,
    pub tick_interval: Option<Duration>,
    pub swap_delay: Option<Duration>,
    pub reveal_offset: Option<Duration>,
    pub reveal_stagger: Option<Duration>,
    pub settle_delay: Option<Duration>,
    pub description_words: Option<usize>,
}

impl From<Options> for OptionsPatch {
    fn from(o: Options) -> Self {
        Self {
            auto_rotate_speed: Some(o.auto_rotate_speed),
            transition_speed: Some(o.transition_speed),
            active_position: Some(o.active_position),
            mobile_breakpoint: Some(o.mobile_breakpoint),
            small_mobile_breakpoint: Some(o.small_mobile_breakpoint),
            fade_in_delay: Some(o.fade_in_delay),
            fade_in_stagger: Some(o.fade_in_stagger),
            auto_rotate_resume_delay: Some(o.auto_rotate_resume_delay),
            click_resume_delay: Some(o.click_resume_delay),
            tick_interval: Some(o.tick_interval),
            swap_delay: Some(o.swap_delay),
            reveal_offset: Some(o.reveal_offset),
            reveal_stagger: Some(o.reveal_stagger),
            settle_delay: Some(o.settle_delay),
            description_words: Some(o.description_words),
        }
    }
}

//! The dot-wave animator: a row of dots started and stopped as one session.
//!
//! `DotWaveAnimator` owns its dots exclusively. Starting a session queues one
//! deferred attach per dot, staggered by the configured phase delay; the
//! attaches fire during [`advance`](DotWaveAnimator::advance), which the host
//! calls once per event-loop turn. Stopping removes every named effect
//! immediately and cancels whatever has not fired yet.
//!
//! Parameter setters stop, reconfigure and restart a running session so the
//! wave always reflects current parameters. Recoloring is the exception and
//! applies in place.

use std::fmt;

use glam::Vec2;
use web_time::Duration;

use super::dot::{DotElement, DotRenderState};
use super::effect::{AnimationEffect, EffectKind, EffectSet};
use super::schedule::{AttachSchedule, SessionId, StaggerPolicy, PULSE_DOT_DELAY};
use crate::geometry::{Color, Rect};
use crate::util::clock::{FrameClock, SystemClock};
use crate::util::easing::EasingFunction;

/// Dots in a fresh indicator.
pub const DEFAULT_DOT_COUNT: usize = 3;
/// Default distance a dot travels downward.
pub const DEFAULT_BOUNCE_OFFSET: f32 = 7.5;
/// Default length of one bounce leg.
pub const DEFAULT_BOUNCE_DURATION: Duration = Duration::from_millis(350);
/// Dot diameter used to size a zero frame.
pub const DEFAULT_DOT_WIDTH: f32 = 30.0;
/// Gap used to size a zero frame.
pub const DEFAULT_DOT_SPACING: f32 = 5.0;

/// Opacity range of the fade effect.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FadeRange {
    /// Opacity at the start of each forward leg.
    pub from: f32,
    /// Opacity at the end of each forward leg.
    pub to: f32,
}

impl Default for FadeRange {
    fn default() -> Self {
        Self { from: 1.0, to: 0.5 }
    }
}

/// Every tunable of the animator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimatorConfig {
    /// Number of dots. Must be at least 2.
    pub dot_count: usize,
    /// Downward travel of the bounce.
    pub bounce_offset: f32,
    /// Length of one leg of both bounce and fade.
    pub bounce_duration: Duration,
    /// Which effects a session attaches.
    pub effects: EffectSet,
    /// Fade opacities.
    pub fade: FadeRange,
    /// Per-dot phase delay policy.
    pub stagger: StaggerPolicy,
    /// Curve for each effect leg.
    pub easing: EasingFunction,
    /// Dot fill.
    pub dot_color: Color,
}

impl AnimatorConfig {
    /// Configurable dot count, bounce only, delay `duration / (n - 1)`.
    #[must_use]
    pub fn classic() -> Self {
        Self {
            dot_count: DEFAULT_DOT_COUNT,
            bounce_offset: DEFAULT_BOUNCE_OFFSET,
            bounce_duration: DEFAULT_BOUNCE_DURATION,
            effects: EffectSet::BOUNCE,
            fade: FadeRange::default(),
            stagger: StaggerPolicy::DurationFraction,
            easing: EasingFunction::Linear,
            dot_color: Color::WHITE,
        }
    }

    /// Three dots, bounce and fade, fixed 0.33 s delay.
    #[must_use]
    pub fn pulse() -> Self {
        Self {
            dot_count: 3,
            effects: EffectSet::BOUNCE_AND_FADE,
            stagger: StaggerPolicy::Fixed(PULSE_DOT_DELAY),
            ..Self::classic()
        }
    }

    /// Frame used when the host hands over a zero-sized one.
    #[must_use]
    pub fn default_frame_size(&self) -> Vec2 {
        let n = self.dot_count as f32;
        Vec2::new(
            n * DEFAULT_DOT_WIDTH + (n - 1.0).max(0.0) * DEFAULT_DOT_SPACING,
            DEFAULT_DOT_WIDTH + self.bounce_offset,
        )
    }
}

impl Default for AnimatorConfig {
    fn default() -> Self {
        Self::classic()
    }
}

/// Animated row of dots.
pub struct DotWaveAnimator {
    frame: Rect,
    config: AnimatorConfig,
    dots: Vec<DotElement>,
    is_animating: bool,
    schedule: AttachSchedule,
    clock: Box<dyn FrameClock>,
}

impl fmt::Debug for DotWaveAnimator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DotWaveAnimator")
            .field("frame", &self.frame)
            .field("config", &self.config)
            .field("dots", &self.dots.len())
            .field("is_animating", &self.is_animating)
            .field("session", &self.schedule.session())
            .field("pending", &self.schedule.len())
            .finish()
    }
}

impl DotWaveAnimator {
    /// Classic animator on the system clock.
    #[must_use]
    pub fn new(frame: Rect) -> Self {
        Self::with_config(frame, AnimatorConfig::classic(), SystemClock::new())
    }

    /// Animator with explicit parameters and time source.
    ///
    /// A frame with zero width or height is replaced by one sized for the
    /// dots at their default diameter and spacing.
    pub fn with_config(
        frame: Rect,
        config: AnimatorConfig,
        clock: impl FrameClock + 'static,
    ) -> Self {
        debug_assert!(config.dot_count >= 2, "an indicator needs at least two dots");
        let frame = if frame.is_degenerate() {
            Rect::new(frame.origin, config.default_frame_size())
        } else {
            frame
        };
        let mut animator = Self {
            frame,
            config,
            dots: Vec::new(),
            is_animating: false,
            schedule: AttachSchedule::new(),
            clock: Box::new(clock),
        };
        animator.generate_dots();
        animator.layout_dots();
        animator
    }

    // -- Derived geometry ------------------------------------------------

    /// Dot diameter: frame height less the bounce travel, never negative.
    #[must_use]
    pub fn dot_size(&self) -> f32 {
        (self.frame.height() - self.config.bounce_offset).max(0.0)
    }

    /// Gap between dots: the width left after the dots, shared across the
    /// `n - 1` gaps. Never negative; zero for fewer than two dots.
    #[must_use]
    pub fn spacing(&self) -> f32 {
        let n = self.config.dot_count;
        if n < 2 {
            return 0.0;
        }
        let fill = self.frame.width() - n as f32 * self.dot_size();
        (fill / (n - 1) as f32).max(0.0)
    }

    /// Delay between consecutive dots under the current policy.
    #[must_use]
    pub fn delay_per_dot(&self) -> Duration {
        self.config
            .stagger
            .delay_per_dot(self.config.bounce_duration, self.config.dot_count)
    }

    // -- Accessors -------------------------------------------------------

    /// Frame in the parent's coordinates.
    #[must_use]
    pub fn frame(&self) -> Rect {
        self.frame
    }

    /// Current parameters.
    #[must_use]
    pub fn config(&self) -> &AnimatorConfig {
        &self.config
    }

    /// The dots, left to right.
    #[must_use]
    pub fn dots(&self) -> &[DotElement] {
        &self.dots
    }

    /// Whether a session is open. Staggered dots may not have started yet.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.is_animating
    }

    /// Current session id.
    #[must_use]
    pub fn session(&self) -> SessionId {
        self.schedule.session()
    }

    /// Offsets from session start of attaches that have not fired.
    #[must_use]
    pub fn pending_delays(&self) -> Vec<Duration> {
        self.schedule.offsets()
    }

    /// Number of attaches that have not fired.
    #[must_use]
    pub fn pending_len(&self) -> usize {
        self.schedule.len()
    }

    // -- Session control -------------------------------------------------

    /// Open a session. Each dot `i` gets its effects attached
    /// `i × delay_per_dot` from now. No-op if a session is already open.
    pub fn start_animating(&mut self) {
        if self.is_animating {
            return;
        }
        let now = self.clock.now();
        let delay = self.delay_per_dot();
        let session =
            self.schedule
                .begin(now, self.dots.len(), delay, self.config.effects);
        self.is_animating = true;
        log::debug!(
            "typing indicator session {:?} started: {} dots, {:?} apart",
            session,
            self.dots.len(),
            delay
        );
    }

    /// Close the session: detach every named effect now and cancel attaches
    /// that have not fired. No-op if no session is open.
    pub fn stop_animating(&mut self) {
        if !self.is_animating {
            return;
        }
        let mut removed = 0usize;
        for dot in &mut self.dots {
            for kind in EffectKind::ALL {
                if dot.detach(kind) {
                    removed += 1;
                }
            }
        }
        let cancelled = self.schedule.cancel();
        self.is_animating = false;
        log::debug!(
            "typing indicator stopped: {removed} effects removed, {cancelled} pending attaches cancelled"
        );
    }

    /// Run one event-loop turn at the clock's current time.
    pub fn advance(&mut self) {
        let now = self.clock.now();
        self.advance_to(now);
    }

    /// Fire every attach due at or before `now`, in dot order.
    ///
    /// Each effect is stamped with its scheduled time rather than `now`, so
    /// the wave keeps its exact phase even when turns arrive late.
    pub fn advance_to(&mut self, now: Duration) {
        for entry in self.schedule.drain_due(now) {
            if !self.is_animating {
                continue;
            }
            let Some(dot) = self.dots.get_mut(entry.dot) else {
                continue;
            };
            for kind in entry.effects.iter() {
                dot.attach(Self::effect_for(&self.config, kind), entry.due);
            }
        }
    }

    fn effect_for(config: &AnimatorConfig, kind: EffectKind) -> AnimationEffect {
        let effect = match kind {
            EffectKind::Bounce => {
                AnimationEffect::bounce(config.bounce_offset, config.bounce_duration)
            }
            EffectKind::Fade => AnimationEffect::fade(
                config.fade.from,
                config.fade.to,
                config.bounce_duration,
            ),
        };
        effect.with_easing(config.easing)
    }

    // -- Rendering -------------------------------------------------------

    /// Sampled dot states at the clock's current time.
    #[must_use]
    pub fn render_states(&self) -> Vec<DotRenderState> {
        self.render_states_at(self.clock.now())
    }

    /// Sampled dot states at `now`.
    #[must_use]
    pub fn render_states_at(&self, now: Duration) -> Vec<DotRenderState> {
        self.dots.iter().map(|d| d.render_state(now)).collect()
    }

    // -- Reconfiguration -------------------------------------------------

    /// Rebuild the row with `count` dots, resuming a running session.
    ///
    /// `count` must be at least 2.
    pub fn set_dot_count(&mut self, count: usize) {
        debug_assert!(count >= 2, "an indicator needs at least two dots");
        self.reconfigure(|a| {
            a.config.dot_count = count;
            a.generate_dots();
        });
    }

    /// Change the bounce travel. Dot size depends on it, so the row is
    /// resized as well.
    pub fn set_bounce_offset(&mut self, offset: f32) {
        self.reconfigure(|a| a.config.bounce_offset = offset);
    }

    /// Change the leg length of both effects.
    pub fn set_bounce_duration(&mut self, duration: Duration) {
        self.reconfigure(|a| a.config.bounce_duration = duration);
    }

    /// Choose which effects sessions attach.
    pub fn set_effects(&mut self, effects: EffectSet) {
        self.reconfigure(|a| a.config.effects = effects);
    }

    /// Change the fade opacities.
    pub fn set_fade_range(&mut self, fade: FadeRange) {
        self.reconfigure(|a| a.config.fade = fade);
    }

    /// Change the per-dot delay policy.
    pub fn set_stagger(&mut self, stagger: StaggerPolicy) {
        self.reconfigure(|a| a.config.stagger = stagger);
    }

    /// Change the leg curve.
    pub fn set_easing(&mut self, easing: EasingFunction) {
        self.reconfigure(|a| a.config.easing = easing);
    }

    /// Replace every parameter at once, rebuilding dots if the count changed.
    /// A config that differs only in color recolors in place.
    pub fn set_config(&mut self, config: AnimatorConfig) {
        debug_assert!(config.dot_count >= 2, "an indicator needs at least two dots");
        let recolored = AnimatorConfig {
            dot_color: config.dot_color,
            ..self.config
        };
        if recolored == config {
            self.set_dot_color(config.dot_color);
            return;
        }
        self.reconfigure(|a| {
            let rebuild = a.config.dot_count != config.dot_count;
            a.config = config;
            if rebuild {
                a.generate_dots();
            }
        });
        self.set_dot_color(config.dot_color);
    }

    /// Recolor every dot in place. The session is not interrupted.
    pub fn set_dot_color(&mut self, color: Color) {
        self.config.dot_color = color;
        for dot in &mut self.dots {
            dot.set_fill(color);
        }
    }

    /// Move or resize the row. Dots are resized and laid out again; running
    /// effects keep their phase.
    pub fn set_frame(&mut self, frame: Rect) {
        self.frame = frame;
        self.layout_dots();
    }

    /// Place dot `i` at `x = i × (dot_size + spacing)`, top-aligned.
    pub fn layout_dots(&mut self) {
        let size = self.dot_size();
        let step = size + self.spacing();
        let needed = self.config.dot_count as f32 * size;
        if self.frame.width() < needed {
            log::warn!(
                "typing indicator frame {}pt wide cannot fit {} dots of {size}pt",
                self.frame.width(),
                self.config.dot_count
            );
        }
        for (i, dot) in self.dots.iter_mut().enumerate() {
            dot.set_frame(Vec2::new(i as f32 * step, 0.0), size);
        }
    }

    fn generate_dots(&mut self) {
        let size = self.dot_size();
        let color = self.config.dot_color;
        self.dots.clear();
        self.dots
            .extend((0..self.config.dot_count).map(|_| DotElement::new(size, color)));
        log::debug!("generated {} dots of {size}pt", self.dots.len());
    }

    /// Stop, apply `change`, lay out again, and resume if a session was open.
    fn reconfigure(&mut self, change: impl FnOnce(&mut Self)) {
        let was_animating = self.is_animating;
        self.stop_animating();
        change(self);
        self.layout_dots();
        if was_animating {
            self.start_animating();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::clock::ManualClock;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    fn animator(frame: Rect) -> (DotWaveAnimator, ManualClock) {
        let clock = ManualClock::new();
        let a = DotWaveAnimator::with_config(frame, AnimatorConfig::classic(), clock.clone());
        (a, clock)
    }

    fn attached(a: &DotWaveAnimator) -> Vec<usize> {
        a.dots().iter().map(DotElement::effect_count).collect()
    }

    #[test]
    fn zero_frame_gets_default_size() {
        let (a, _) = animator(Rect::ZERO);
        assert_eq!(a.frame().size, Vec2::new(100.0, 37.5));
        assert_eq!(a.dot_size(), 30.0);
        assert!((a.spacing() - 5.0).abs() < 1e-5);
    }

    #[test]
    fn dot_count_lays_out_uniformly() {
        let (mut a, _) = animator(Rect::from_xywh(0.0, 0.0, 200.0, 27.5));
        for n in 2..=9 {
            a.set_dot_count(n);
            assert_eq!(a.dots().len(), n);
            let d = a.dot_size();
            let expected = (200.0 - n as f32 * d) / (n - 1) as f32;
            assert!((a.spacing() - expected).abs() < 1e-4);
            let xs: Vec<f32> = a.dots().iter().map(|dot| dot.frame().origin.x).collect();
            for pair in xs.windows(2) {
                assert!(pair[1] > pair[0]);
                assert!((pair[1] - pair[0] - (d + expected)).abs() < 1e-3);
            }
            assert!(a.dots().iter().all(|dot| dot.shape().diameter() == d));
        }
    }

    #[test]
    fn two_dots_split_the_remaining_width() {
        let (mut a, _) = animator(Rect::from_xywh(0.0, 0.0, 80.0, 27.5));
        a.set_dot_count(2);
        assert_eq!(a.dot_size(), 20.0);
        assert_eq!(a.spacing(), 40.0);
    }

    #[test]
    fn derived_sizes_never_go_negative() {
        let (mut a, _) = animator(Rect::from_xywh(0.0, 0.0, 10.0, 37.5));
        assert_eq!(a.spacing(), 0.0);
        a.set_bounce_offset(100.0);
        assert_eq!(a.dot_size(), 0.0);
    }

    #[test]
    fn start_sets_flag_before_any_dot_moves() {
        let (mut a, _) = animator(Rect::ZERO);
        a.start_animating();
        assert!(a.is_animating());
        assert_eq!(attached(&a), vec![0, 0, 0]);
        assert_eq!(a.pending_delays(), vec![ms(0), ms(175), ms(350)]);
    }

    #[test]
    fn attaches_fire_staggered_in_dot_order() {
        let (mut a, clock) = animator(Rect::ZERO);
        a.start_animating();
        a.advance();
        assert_eq!(attached(&a), vec![1, 0, 0]);
        clock.advance(ms(175));
        a.advance();
        assert_eq!(attached(&a), vec![1, 1, 0]);
        clock.advance(ms(175));
        a.advance();
        assert_eq!(attached(&a), vec![1, 1, 1]);
        assert_eq!(a.pending_len(), 0);
        let stamps: Vec<_> = a
            .dots()
            .iter()
            .filter_map(|d| d.effect(EffectKind::Bounce).map(|e| e.attached_at))
            .collect();
        assert_eq!(stamps, vec![ms(0), ms(175), ms(350)]);
    }

    #[test]
    fn start_is_idempotent() {
        let (mut a, clock) = animator(Rect::ZERO);
        a.start_animating();
        let session = a.session();
        clock.advance(ms(100));
        a.start_animating();
        assert_eq!(a.session(), session);
        assert_eq!(a.pending_len(), 3);
        clock.advance(ms(1000));
        a.advance();
        assert_eq!(attached(&a), vec![1, 1, 1]);
    }

    #[test]
    fn stop_is_idempotent_and_clears_effects() {
        let (mut a, clock) = animator(Rect::ZERO);
        a.start_animating();
        clock.advance(ms(500));
        a.advance();
        a.stop_animating();
        assert!(!a.is_animating());
        assert_eq!(attached(&a), vec![0, 0, 0]);
        let session = a.session();
        a.stop_animating();
        assert!(!a.is_animating());
        assert_eq!(a.session(), session);
    }

    #[test]
    fn stop_before_delayed_attach_leaves_nothing_behind() {
        let (mut a, clock) = animator(Rect::ZERO);
        a.start_animating();
        a.advance();
        a.stop_animating();
        clock.advance(ms(2000));
        a.advance();
        assert_eq!(attached(&a), vec![0, 0, 0]);
        assert_eq!(a.pending_len(), 0);
    }

    #[test]
    fn restart_repeats_the_same_schedule() {
        let (mut a, clock) = animator(Rect::ZERO);
        a.start_animating();
        let first = a.pending_delays();
        let first_session = a.session();
        clock.advance(ms(90));
        a.advance();
        a.stop_animating();
        a.start_animating();
        assert_eq!(a.pending_delays(), first);
        assert_ne!(a.session(), first_session);
    }

    #[test]
    fn color_change_keeps_session_running() {
        let (mut a, clock) = animator(Rect::ZERO);
        a.start_animating();
        a.advance();
        let session = a.session();
        let pending = a.pending_delays();
        let red = Color::rgb(1.0, 0.0, 0.0);
        a.set_dot_color(red);
        assert!(a.is_animating());
        assert_eq!(a.session(), session);
        assert_eq!(a.pending_delays(), pending);
        assert!(a.dots().iter().all(|d| d.fill() == red));
        assert_eq!(attached(&a), vec![1, 0, 0]);
        clock.advance(ms(400));
        a.advance();
        assert_eq!(attached(&a), vec![1, 1, 1]);
    }

    #[test]
    fn dot_count_change_restarts_running_session() {
        let (mut a, clock) = animator(Rect::from_xywh(0.0, 0.0, 200.0, 37.5));
        a.start_animating();
        clock.advance(ms(1000));
        a.advance();
        let before = a.session();
        a.set_dot_count(5);
        assert!(a.is_animating());
        assert_ne!(a.session(), before);
        assert_eq!(attached(&a), vec![0; 5]);
        assert_eq!(a.pending_delays().len(), 5);
        assert_eq!(a.pending_delays()[4], ms(350));
    }

    #[test]
    fn idle_reconfigure_stays_idle() {
        let (mut a, _) = animator(Rect::ZERO);
        a.set_dot_count(4);
        a.set_bounce_duration(ms(600));
        assert!(!a.is_animating());
        assert_eq!(a.pending_len(), 0);
        assert_eq!(a.dots().len(), 4);
    }

    #[test]
    fn duration_change_reschedules_with_new_delay() {
        let (mut a, _) = animator(Rect::ZERO);
        a.start_animating();
        a.set_bounce_duration(ms(500));
        assert!(a.is_animating());
        assert_eq!(a.pending_delays(), vec![ms(0), ms(250), ms(500)]);
    }

    #[test]
    fn bounce_offset_change_resizes_and_restarts() {
        let (mut a, clock) = animator(Rect::ZERO);
        a.start_animating();
        clock.advance(ms(400));
        a.advance();
        a.set_bounce_offset(10.0);
        assert_eq!(a.dot_size(), 27.5);
        assert!(a.dots().iter().all(|d| d.shape().diameter() == 27.5));
        assert!(a.is_animating());
        a.advance();
        let bounce = a.dots()[0].effect(EffectKind::Bounce).map(|e| e.effect.to);
        assert_eq!(bounce, Some(10.0));
    }

    #[test]
    fn pulse_attaches_bounce_and_fade_on_fixed_delay() {
        let clock = ManualClock::new();
        let mut a = DotWaveAnimator::with_config(Rect::ZERO, AnimatorConfig::pulse(), clock.clone());
        a.start_animating();
        assert_eq!(a.pending_delays(), vec![ms(0), ms(330), ms(660)]);
        clock.advance(ms(660));
        a.advance();
        assert_eq!(attached(&a), vec![2, 2, 2]);
        let fade = a.dots()[2].effect(EffectKind::Fade).map(|e| e.effect);
        assert_eq!(fade.map(|f| (f.from, f.to)), Some((1.0, 0.5)));
    }

    #[test]
    fn render_states_follow_the_wave() {
        let (mut a, clock) = animator(Rect::ZERO);
        a.start_animating();
        a.advance();
        clock.advance(ms(350));
        a.advance();
        let states = a.render_states();
        assert!((states[0].frame.origin.y - 7.5).abs() < 1e-4);
        assert!((states[1].frame.origin.y - 3.75).abs() < 1e-4);
        assert_eq!(states[2].frame.origin.y, 0.0);
    }

    #[test]
    fn frame_change_relayouts_without_restarting() {
        let (mut a, clock) = animator(Rect::ZERO);
        a.start_animating();
        a.advance();
        let session = a.session();
        clock.advance(ms(10));
        a.set_frame(Rect::from_xywh(5.0, 5.0, 160.0, 47.5));
        assert_eq!(a.session(), session);
        assert_eq!(a.dot_size(), 40.0);
        assert_eq!(a.dots()[2].frame().origin.x, 120.0);
        assert_eq!(attached(&a), vec![1, 0, 0]);
    }

    #[test]
    fn set_config_rebuilds_and_recolors() {
        let (mut a, _) = animator(Rect::ZERO);
        a.start_animating();
        let mut config = AnimatorConfig::pulse();
        config.dot_count = 4;
        config.dot_color = Color::LIGHT_GRAY;
        a.set_config(config);
        assert!(a.is_animating());
        assert_eq!(a.dots().len(), 4);
        assert!(a.dots().iter().all(|d| d.fill() == Color::LIGHT_GRAY));
        assert_eq!(a.config().effects, EffectSet::BOUNCE_AND_FADE);
    }

    #[test]
    fn color_only_config_keeps_session() {
        let (mut a, clock) = animator(Rect::ZERO);
        a.start_animating();
        clock.advance(ms(400));
        a.advance();
        let session = a.session();
        let red = Color::rgb(1.0, 0.0, 0.0);
        let mut config = *a.config();
        config.dot_color = red;
        a.set_config(config);
        assert!(a.is_animating());
        assert_eq!(a.session(), session);
        assert_eq!(attached(&a), vec![1, 1, 1]);
        assert_eq!(a.pending_len(), 0);
        assert!(a.dots().iter().all(|d| d.fill() == red));
        assert_eq!(a.config().dot_color, red);
    }

    #[test]
    fn effects_change_restarts_with_both_effects() {
        let (mut a, clock) = animator(Rect::ZERO);
        a.start_animating();
        clock.advance(ms(400));
        a.advance();
        let before = a.session();
        a.set_effects(EffectSet::BOUNCE_AND_FADE);
        assert!(a.is_animating());
        assert_ne!(a.session(), before);
        assert_eq!(attached(&a), vec![0, 0, 0]);
        clock.advance(ms(400));
        a.advance();
        assert_eq!(attached(&a), vec![2, 2, 2]);
    }

    #[test]
    fn fade_range_change_restarts_with_new_opacities() {
        let clock = ManualClock::new();
        let mut a = DotWaveAnimator::with_config(Rect::ZERO, AnimatorConfig::pulse(), clock.clone());
        a.start_animating();
        clock.advance(ms(700));
        a.advance();
        let before = a.session();
        a.set_fade_range(FadeRange { from: 0.9, to: 0.2 });
        assert!(a.is_animating());
        assert_ne!(a.session(), before);
        assert_eq!(a.pending_delays(), vec![ms(0), ms(330), ms(660)]);
        clock.advance(ms(700));
        a.advance();
        let fades: Vec<_> = a
            .dots()
            .iter()
            .filter_map(|d| d.effect(EffectKind::Fade).map(|e| (e.effect.from, e.effect.to)))
            .collect();
        assert_eq!(fades, vec![(0.9, 0.2); 3]);
    }

    #[test]
    fn stagger_change_reschedules_with_fixed_delay() {
        let (mut a, clock) = animator(Rect::ZERO);
        a.start_animating();
        clock.advance(ms(100));
        a.advance();
        let before = a.session();
        a.set_stagger(StaggerPolicy::Fixed(ms(330)));
        assert!(a.is_animating());
        assert_ne!(a.session(), before);
        assert_eq!(attached(&a), vec![0, 0, 0]);
        assert_eq!(a.pending_delays(), vec![ms(0), ms(330), ms(660)]);
    }

    #[test]
    fn easing_change_restarts_with_new_curve() {
        let (mut a, clock) = animator(Rect::ZERO);
        a.start_animating();
        clock.advance(ms(400));
        a.advance();
        let before = a.session();
        a.set_easing(EasingFunction::EaseInOut);
        assert!(a.is_animating());
        assert_ne!(a.session(), before);
        clock.advance(ms(400));
        a.advance();
        let curves: Vec<_> = a
            .dots()
            .iter()
            .filter_map(|d| d.effect(EffectKind::Bounce).map(|e| e.effect.easing))
            .collect();
        assert_eq!(curves, vec![EasingFunction::EaseInOut; 3]);
    }
}

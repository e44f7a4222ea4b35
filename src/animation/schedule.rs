//! Staggered attach schedule with session-tagged cancellation.
//!
//! Starting a session queues one deferred attach per dot:
//! - Dot 0: due at the session start
//! - Dot 1: due at start + delay
//! - Dot N: due at start + N × delay
//!
//! The queue is drained by the owner's event-loop turn. Every entry carries
//! the session it was queued for; cancelling bumps the session so an entry
//! that somehow outlives its session is dropped instead of fired.

use std::collections::VecDeque;

use web_time::Duration;

use super::effect::EffectSet;

/// Fixed per-dot delay of the three-dot pulse indicator.
pub const PULSE_DOT_DELAY: Duration = Duration::from_millis(330);

/// How the per-dot phase delay is derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StaggerPolicy {
    /// `bounce_duration / (dot_count - 1)`: the last dot starts exactly one
    /// leg after the first, so the wave spans one bounce.
    #[default]
    DurationFraction,
    /// Constant delay regardless of dot count or duration.
    Fixed(Duration),
}

impl StaggerPolicy {
    /// Delay between consecutive dots. Fewer than two dots yields zero.
    #[must_use]
    pub fn delay_per_dot(self, bounce_duration: Duration, dot_count: usize) -> Duration {
        match self {
            Self::DurationFraction => {
                let gaps = dot_count.saturating_sub(1) as u32;
                bounce_duration.checked_div(gaps).unwrap_or_default()
            }
            Self::Fixed(delay) => delay,
        }
    }
}

/// Identifier of one start→stop span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct SessionId(pub u64);

impl SessionId {
    fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

/// One queued attach.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingAttach {
    /// Session this attach belongs to.
    pub session: SessionId,
    /// Dot index.
    pub dot: usize,
    /// Clock time at which it fires.
    pub due: Duration,
    /// Offset from the session start (`dot × delay`).
    pub offset: Duration,
    /// Effects to attach.
    pub effects: EffectSet,
}

/// Serial queue of deferred attaches, ordered by dot index.
#[derive(Debug, Default)]
pub struct AttachSchedule {
    pending: VecDeque<PendingAttach>,
    session: SessionId,
}

impl AttachSchedule {
    /// Empty schedule.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current session.
    #[must_use]
    pub fn session(&self) -> SessionId {
        self.session
    }

    /// Open a new session at `now` and queue one attach per dot.
    ///
    /// Anything still pending from an earlier session is discarded first.
    pub fn begin(
        &mut self,
        now: Duration,
        dot_count: usize,
        delay: Duration,
        effects: EffectSet,
    ) -> SessionId {
        let _ = self.cancel();
        let session = self.session;
        self.pending.reserve(dot_count);
        let mut offset = Duration::ZERO;
        for dot in 0..dot_count {
            self.pending.push_back(PendingAttach {
                session,
                dot,
                due: now + offset,
                offset,
                effects,
            });
            offset += delay;
        }
        session
    }

    /// Invalidate the current session and drop its pending attaches.
    /// Returns how many were dropped.
    pub fn cancel(&mut self) -> usize {
        let dropped = self.pending.len();
        self.pending.clear();
        self.session = self.session.next();
        dropped
    }

    /// Pop every attach due at or before `now`, in queue order, discarding
    /// entries from any session other than the current one.
    pub fn drain_due(&mut self, now: Duration) -> Vec<PendingAttach> {
        let mut fired = Vec::new();
        while let Some(next) = self.pending.front() {
            if next.due > now {
                break;
            }
            let Some(entry) = self.pending.pop_front() else {
                break;
            };
            if entry.session == self.session {
                fired.push(entry);
            } else {
                log::debug!(
                    "dropping stale attach for dot {} (session {:?}, current {:?})",
                    entry.dot,
                    entry.session,
                    self.session
                );
            }
        }
        fired
    }

    /// Number of attaches not yet fired.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// True if nothing is pending.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Offsets from session start of the pending attaches, in order.
    #[must_use]
    pub fn offsets(&self) -> Vec<Duration> {
        self.pending.iter().map(|p| p.offset).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn duration_fraction_spreads_one_leg() {
        let p = StaggerPolicy::DurationFraction;
        assert_eq!(p.delay_per_dot(ms(350), 3), ms(175));
        assert_eq!(p.delay_per_dot(ms(350), 2), ms(350));
        assert_eq!(p.delay_per_dot(ms(350), 8) * 7, ms(350));
    }

    #[test]
    fn single_dot_does_not_divide_by_zero() {
        let p = StaggerPolicy::DurationFraction;
        assert_eq!(p.delay_per_dot(ms(350), 1), Duration::ZERO);
        assert_eq!(p.delay_per_dot(ms(350), 0), Duration::ZERO);
    }

    #[test]
    fn fixed_ignores_count_and_duration() {
        let p = StaggerPolicy::Fixed(PULSE_DOT_DELAY);
        assert_eq!(p.delay_per_dot(ms(10), 3), ms(330));
        assert_eq!(p.delay_per_dot(ms(900), 7), ms(330));
    }

    #[test]
    fn begin_queues_one_entry_per_dot() {
        let mut s = AttachSchedule::new();
        let id = s.begin(ms(1000), 4, ms(100), EffectSet::BOUNCE);
        assert_eq!(s.len(), 4);
        assert_eq!(s.offsets(), vec![ms(0), ms(100), ms(200), ms(300)]);
        assert_eq!(s.session(), id);
    }

    #[test]
    fn drain_fires_in_dot_order() {
        let mut s = AttachSchedule::new();
        let _ = s.begin(ms(0), 3, ms(50), EffectSet::BOUNCE);
        let first = s.drain_due(ms(0));
        assert_eq!(first.iter().map(|p| p.dot).collect::<Vec<_>>(), vec![0]);
        let rest = s.drain_due(ms(500));
        assert_eq!(rest.iter().map(|p| p.dot).collect::<Vec<_>>(), vec![1, 2]);
        assert!(s.is_empty());
    }

    #[test]
    fn cancel_invalidates_session() {
        let mut s = AttachSchedule::new();
        let first = s.begin(ms(0), 3, ms(50), EffectSet::BOUNCE);
        assert_eq!(s.cancel(), 3);
        assert_ne!(s.session(), first);
        assert!(s.drain_due(ms(1000)).is_empty());
    }

    #[test]
    fn begin_discards_previous_session() {
        let mut s = AttachSchedule::new();
        let a = s.begin(ms(0), 3, ms(50), EffectSet::BOUNCE);
        let b = s.begin(ms(10), 2, ms(50), EffectSet::BOUNCE);
        assert_ne!(a, b);
        assert_eq!(s.len(), 2);
        assert!(s.drain_due(ms(1000)).iter().all(|p| p.session == b));
    }
}

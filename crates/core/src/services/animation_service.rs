use rust_decimal::Decimal;
use std::collections::BTreeMap;
use std::time::Duration;
use tracing::debug;

use crate::models::display::{DisplayedValue, Quantity};

/// One emitted animation frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame {
    pub value: Decimal,
    /// True on the last frame; `value` is then exactly the target.
    pub done: bool,
}

/// A linear, floor-truncated interpolation from one value to another.
///
/// Time comes from the host: each `advance(now)` call passes the tick
/// timestamp (any monotonic origin). The first tick captures the start,
/// later ticks measure elapsed time against it, so irregular frame
/// intervals don't matter.
#[derive(Debug, Clone)]
pub struct Transition {
    from: Decimal,
    to: Decimal,
    duration: Duration,
    started_at: Option<Duration>,
    current: Decimal,
    finished: bool,
}

impl Transition {
    pub fn new(from: Decimal, to: Decimal, duration: Duration) -> Self {
        Self {
            from,
            to,
            duration,
            started_at: None,
            current: from,
            finished: false,
        }
    }

    pub fn start_value(&self) -> Decimal {
        self.from
    }

    pub fn end_value(&self) -> Decimal {
        self.to
    }

    /// Last emitted value (`from` before the first tick).
    pub fn current(&self) -> Decimal {
        self.current
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Value at `elapsed` since the start:
    /// `floor(from + (to - from) × min(elapsed / duration, 1))`,
    /// except that the end of the transition yields `to` exactly.
    pub fn sample(&self, elapsed: Duration) -> Decimal {
        if elapsed >= self.duration {
            return self.to;
        }
        let elapsed_us = Decimal::from(micros(elapsed));
        let duration_us = Decimal::from(micros(self.duration));

        // Multiply first; near the Decimal range fall back to a weighted blend.
        self.to
            .checked_sub(self.from)
            .and_then(|span| span.checked_mul(elapsed_us))
            .and_then(|d| d.checked_div(duration_us))
            .and_then(|d| d.checked_add(self.from))
            .or_else(|| {
                let t = elapsed_us.checked_div(duration_us)?;
                let head = self.from.checked_mul(Decimal::ONE - t)?;
                let tail = self.to.checked_mul(t)?;
                head.checked_add(tail)
            })
            .map(|v| v.floor())
            .unwrap_or(self.to)
    }

    /// Produce the frame for host tick `now`. Returns `None` once the
    /// final frame has been emitted.
    pub fn advance(&mut self, now: Duration) -> Option<Frame> {
        if self.finished {
            return None;
        }
        let start = *self.started_at.get_or_insert(now);
        let elapsed = now.saturating_sub(start);

        self.current = self.sample(elapsed);
        self.finished = elapsed >= self.duration;
        Some(Frame {
            value: self.current,
            done: self.finished,
        })
    }

    /// Consume the transition into a lazy, finite sequence of frame values,
    /// one per tick timestamp. Ends after the frame equal to `to`, or when
    /// the ticks run out.
    pub fn frames<I>(self, ticks: I) -> Frames<I::IntoIter>
    where
        I: IntoIterator<Item = Duration>,
    {
        Frames {
            transition: self,
            ticks: ticks.into_iter(),
        }
    }
}

/// Iterator returned by [`Transition::frames`].
#[derive(Debug)]
pub struct Frames<I> {
    transition: Transition,
    ticks: I,
}

impl<I: Iterator<Item = Duration>> Iterator for Frames<I> {
    type Item = Decimal;

    fn next(&mut self) -> Option<Decimal> {
        if self.transition.is_finished() {
            return None;
        }
        let now = self.ticks.next()?;
        self.transition.advance(now).map(|f| f.value)
    }
}

fn micros(d: Duration) -> u64 {
    u64::try_from(d.as_micros()).unwrap_or(u64::MAX)
}

#[derive(Debug, Clone, Default)]
struct Track {
    value: DisplayedValue,
    transition: Option<Transition>,
}

/// Drives every on-screen figure, one transition per quantity.
///
/// Starting a transition for a quantity abandons the one in flight and
/// begins from whatever is on screen right now.
#[derive(Debug, Clone)]
pub struct ValueAnimator {
    duration: Duration,
    tracks: BTreeMap<Quantity, Track>,
}

impl ValueAnimator {
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            tracks: BTreeMap::new(),
        }
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Aim `quantity` at `target`. Returns false (and leaves any running
    /// transition alone) when it is already heading there.
    pub fn retarget(&mut self, quantity: Quantity, target: Decimal) -> bool {
        let track = self.tracks.entry(quantity).or_default();
        if track.value.target == target {
            return false;
        }

        let from = track.value.previous;
        debug!(%quantity, %from, to = %target, "transition started");
        track.transition = Some(Transition::new(from, target, self.duration));
        track.value.target = target;
        true
    }

    /// Advance all running transitions to tick `now`. Returns the frames
    /// emitted on this tick.
    pub fn tick(&mut self, now: Duration) -> Vec<(Quantity, Frame)> {
        let mut frames = Vec::new();

        for (quantity, track) in &mut self.tracks {
            let Some(transition) = track.transition.as_mut() else {
                continue;
            };
            if let Some(frame) = transition.advance(now) {
                track.value.previous = frame.value;
                frames.push((*quantity, frame));
            }
            if transition.is_finished() {
                track.value.previous = track.value.target;
                track.transition = None;
            }
        }

        frames
    }

    /// What the screen shows for `quantity` right now.
    pub fn displayed(&self, quantity: Quantity) -> Decimal {
        self.value(quantity).previous
    }

    pub fn value(&self, quantity: Quantity) -> DisplayedValue {
        self.tracks
            .get(&quantity)
            .map(|t| t.value)
            .unwrap_or_default()
    }

    pub fn is_animating(&self) -> bool {
        self.tracks.values().any(|t| t.transition.is_some())
    }

    /// Jump every figure to its target and drop running transitions.
    pub fn settle(&mut self) {
        for track in self.tracks.values_mut() {
            track.value.previous = track.value.target;
            track.transition = None;
        }
    }
}

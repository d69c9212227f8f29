//! Game clock: periodic timers, one-shot timers and per-frame callbacks.
//!
//! The session never touches wall-clock time. It registers timers through the
//! [`Scheduler`] trait and drains due events once per frame, so the terminal
//! host can feed real elapsed time while tests feed exact deltas.
//!
//! Timers are registered into a [`TimerGroup`]. Cancelling a group removes
//! every timer in it immediately, including events that are already due but
//! not yet polled. This is what guarantees that nothing fires after a round
//! is torn down.

use std::collections::VecDeque;

/// Cancellation group a timer belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerGroup {
    /// Spawn, countdown, difficulty ramp and motion. Torn down at round end.
    Round,
    /// Cosmetic effects that outlive the round (particle expiry).
    Effects,
}

/// Handle to a registered timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerId(u64);

/// Timing seam between the game core and its host.
pub trait Scheduler<E> {
    /// Fire `event` every `period_ms`, first after one full period.
    fn every(&mut self, group: TimerGroup, period_ms: u64, event: E) -> TimerId;

    /// Fire `event` once after `delay_ms`.
    fn after(&mut self, group: TimerGroup, delay_ms: u64, event: E) -> TimerId;

    /// Fire `event` once per frame, after all due timers of that frame.
    fn on_frame(&mut self, group: TimerGroup, event: E) -> TimerId;

    /// Cancel one timer. Returns false if it was already gone.
    fn cancel(&mut self, id: TimerId) -> bool;

    /// Cancel every timer in `group`. Returns how many were removed.
    fn cancel_group(&mut self, group: TimerGroup) -> usize;

    /// Start a new frame, advancing the clock by `dt_ms`.
    fn begin_frame(&mut self, dt_ms: u64);

    /// Next event of the current frame, or `None` once the frame is drained.
    fn poll(&mut self) -> Option<E>;

    /// Logical time since the clock was created.
    fn now_ms(&self) -> u64;

    /// Number of live timers, frame callbacks included.
    fn pending(&self) -> usize;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Cadence {
    Every(u64),
    Once,
    Frame,
}

#[derive(Debug, Clone)]
struct Timer<E> {
    id: TimerId,
    group: TimerGroup,
    cadence: Cadence,
    due_ms: u64,
    event: E,
}

/// Accumulator-driven [`Scheduler`].
///
/// Timers due within a frame are delivered in due-time order, ties broken by
/// registration order. A periodic timer that fell several periods behind
/// fires once per missed period.
#[derive(Debug, Clone)]
pub struct FrameClock<E> {
    now_ms: u64,
    next_id: u64,
    timers: Vec<Timer<E>>,
    frame_queue: VecDeque<TimerId>,
}

impl<E> Default for FrameClock<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> FrameClock<E> {
    pub fn new() -> Self {
        Self {
            now_ms: 0,
            next_id: 0,
            timers: Vec::new(),
            frame_queue: VecDeque::new(),
        }
    }

    fn register(&mut self, group: TimerGroup, cadence: Cadence, due_ms: u64, event: E) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.timers.push(Timer {
            id,
            group,
            cadence,
            due_ms,
            event,
        });
        id
    }

    /// Index of the earliest due non-frame timer.
    fn next_due_index(&self) -> Option<usize> {
        self.timers
            .iter()
            .enumerate()
            .filter(|(_, t)| t.cadence != Cadence::Frame && t.due_ms <= self.now_ms)
            .min_by_key(|(_, t)| (t.due_ms, t.id))
            .map(|(i, _)| i)
    }
}

impl<E: Clone> Scheduler<E> for FrameClock<E> {
    fn every(&mut self, group: TimerGroup, period_ms: u64, event: E) -> TimerId {
        // A zero period would never let a frame drain
        let period_ms = period_ms.max(1);
        let due_ms = self.now_ms + period_ms;
        self.register(group, Cadence::Every(period_ms), due_ms, event)
    }

    fn after(&mut self, group: TimerGroup, delay_ms: u64, event: E) -> TimerId {
        let due_ms = self.now_ms + delay_ms;
        self.register(group, Cadence::Once, due_ms, event)
    }

    fn on_frame(&mut self, group: TimerGroup, event: E) -> TimerId {
        let now = self.now_ms;
        self.register(group, Cadence::Frame, now, event)
    }

    fn cancel(&mut self, id: TimerId) -> bool {
        let before = self.timers.len();
        self.timers.retain(|t| t.id != id);
        self.frame_queue.retain(|queued| *queued != id);
        self.timers.len() != before
    }

    fn cancel_group(&mut self, group: TimerGroup) -> usize {
        let before = self.timers.len();
        self.timers.retain(|t| t.group != group);
        let timers = &self.timers;
        self.frame_queue
            .retain(|queued| timers.iter().any(|t| t.id == *queued));
        before - self.timers.len()
    }

    fn begin_frame(&mut self, dt_ms: u64) {
        self.now_ms += dt_ms;
        self.frame_queue = self
            .timers
            .iter()
            .filter(|t| t.cadence == Cadence::Frame)
            .map(|t| t.id)
            .collect();
    }

    fn poll(&mut self) -> Option<E> {
        if let Some(index) = self.next_due_index() {
            let event = self.timers[index].event.clone();
            match self.timers[index].cadence {
                Cadence::Every(period) => self.timers[index].due_ms += period,
                Cadence::Once => {
                    self.timers.remove(index);
                }
                Cadence::Frame => unreachable!("frame callbacks are not time-due"),
            }
            return Some(event);
        }

        while let Some(id) = self.frame_queue.pop_front() {
            if let Some(timer) = self.timers.iter().find(|t| t.id == id) {
                return Some(timer.event.clone());
            }
        }

        None
    }

    fn now_ms(&self) -> u64 {
        self.now_ms
    }

    fn pending(&self) -> usize {
        self.timers.len()
    }
}

use std::fmt;
use std::time::Duration;

use chrono::NaiveDate;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::{debug, trace, warn};

use crate::core::{ChartKind, DataPoint, PointId, Transition, sample};
use crate::error::ChartResult;

use super::{
    DemoConfig, InvalidationMask, InvalidationTopic, RevealScheduler, ScheduledReveal,
};

/// Handle returned by [`ChartDemoState::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(InvalidationMask)>;

/// Explicit state container behind the chart demo screen.
///
/// Owns the samples, the selected chart kind, the reveal guard and a virtual
/// clock. All mutation goes through the operations below; each operation that
/// changes observable state ends by notifying subscribers with the coalesced
/// [`InvalidationMask`].
pub struct ChartDemoState {
    config: DemoConfig,
    points: Vec<DataPoint>,
    kind: ChartKind,
    animating: bool,
    appeared: bool,
    next_point_id: u64,
    now: Duration,
    scheduler: RevealScheduler,
    transitions: IndexMap<PointId, Transition>,
    pending_invalidation: InvalidationMask,
    unnotified: InvalidationMask,
    listeners: IndexMap<SubscriptionId, Listener>,
    next_subscription_id: u64,
}

impl fmt::Debug for ChartDemoState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChartDemoState")
            .field("kind", &self.kind)
            .field("points", &self.points.len())
            .field("animating", &self.animating)
            .field("now", &self.now)
            .field("pending_reveals", &self.scheduler.pending_len())
            .field("listeners", &self.listeners.len())
            .finish_non_exhaustive()
    }
}

impl ChartDemoState {
    /// Creates the demo state seeded with the built-in sample dataset.
    pub fn new(config: DemoConfig) -> ChartResult<Self> {
        Self::with_samples(config, sample::initial_samples())
    }

    /// Creates the demo state seeded with caller-provided samples.
    pub fn with_samples(
        config: DemoConfig,
        samples: impl IntoIterator<Item = (NaiveDate, f64)>,
    ) -> ChartResult<Self> {
        config.validate()?;

        let mut state = Self {
            config,
            points: Vec::new(),
            kind: ChartKind::default(),
            animating: false,
            appeared: false,
            next_point_id: 0,
            now: Duration::ZERO,
            scheduler: RevealScheduler::new(),
            transitions: IndexMap::new(),
            pending_invalidation: InvalidationMask::none(),
            unnotified: InvalidationMask::none(),
            listeners: IndexMap::new(),
            next_subscription_id: 0,
        };
        for (date, value) in samples {
            state.push_point(date, value);
        }
        state.pending_invalidation = InvalidationMask::none();
        state.unnotified = InvalidationMask::none();
        Ok(state)
    }

    #[must_use]
    pub fn config(&self) -> &DemoConfig {
        &self.config
    }

    #[must_use]
    pub fn points(&self) -> &[DataPoint] {
        &self.points
    }

    #[must_use]
    pub fn kind(&self) -> ChartKind {
        self.kind
    }

    /// Reveal guard: set by [`Self::reveal`], cleared only by a reset.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.animating
    }

    #[must_use]
    pub fn has_appeared(&self) -> bool {
        self.appeared
    }

    /// Current virtual clock, measured from state creation.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.now
    }

    #[must_use]
    pub fn pending_reveal_count(&self) -> usize {
        self.scheduler.pending_len()
    }

    /// Pending reveals in scheduling order.
    pub fn pending_reveals(&self) -> impl Iterator<Item = &ScheduledReveal> {
        self.scheduler.pending()
    }

    #[must_use]
    pub fn next_reveal_due(&self) -> Option<Duration> {
        self.scheduler.next_due()
    }

    /// Animated reveal progress of the sample at `index` in `0.0..=1.0`.
    ///
    /// Hidden samples report 0.0; revealed samples without an in-flight
    /// transition report 1.0.
    #[must_use]
    pub fn progress_at(&self, index: usize) -> f64 {
        let Some(point) = self.points.get(index) else {
            return 0.0;
        };
        self.progress_of(point)
    }

    #[must_use]
    pub fn has_active_transitions(&self) -> bool {
        self.transitions
            .values()
            .any(|transition| !transition.is_finished_at(self.now))
    }

    /// True while the clock still needs to be driven for the animation to settle.
    #[must_use]
    pub fn needs_animation_frame(&self) -> bool {
        !self.scheduler.is_empty() || self.has_active_transitions()
    }

    /// Registers a redraw observer, called after each operation that changed state.
    pub fn subscribe(
        &mut self,
        listener: impl FnMut(InvalidationMask) + 'static,
    ) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription_id);
        self.next_subscription_id += 1;
        self.listeners.insert(id, Box::new(listener));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.listeners.shift_remove(&id).is_some()
    }

    /// Invalidation accumulated since the last [`Self::take_pending_invalidation`].
    #[must_use]
    pub fn pending_invalidation(&self) -> InvalidationMask {
        self.pending_invalidation
    }

    /// Returns and clears the invalidation accumulated since the last call.
    ///
    /// Observers are notified independently; this is the polling alternative.
    pub fn take_pending_invalidation(&mut self) -> InvalidationMask {
        std::mem::take(&mut self.pending_invalidation)
    }

    /// First appearance of the screen. Starts the reveal exactly once.
    pub fn on_appear(&mut self) -> bool {
        if self.appeared {
            return false;
        }
        self.appeared = true;
        self.start_reveal();
        self.notify();
        true
    }

    /// Switches the chart kind and replays the reveal.
    ///
    /// Selecting the current kind is a no-op and returns `false`.
    pub fn select_kind(&mut self, kind: ChartKind) -> bool {
        if kind == self.kind {
            return false;
        }
        debug!(from = ?self.kind, to = ?kind, "chart kind changed");
        self.kind = kind;
        self.invalidate(InvalidationMask::full(InvalidationTopic::ChartKind));
        self.reset_flags();
        self.start_reveal();
        self.notify();
        true
    }

    /// Toolbar action: appends the fixed three-sample batch and replays the reveal.
    ///
    /// Returns the ids of the appended samples.
    pub fn trigger(&mut self) -> SmallVec<[PointId; 3]> {
        let appended = self.push_trigger_batch();
        self.reset_flags();
        self.start_reveal();
        self.notify();
        appended
    }

    /// Appends the trigger batch without touching reveal state.
    pub fn append_trigger_batch(&mut self) -> SmallVec<[PointId; 3]> {
        let appended = self.push_trigger_batch();
        self.notify();
        appended
    }

    /// Starts the staggered reveal unless one is already running.
    ///
    /// Returns `false` when the guard suppressed the call; in that case nothing
    /// is scheduled and no flag changes.
    pub fn reveal(&mut self) -> bool {
        let started = self.start_reveal();
        self.notify();
        started
    }

    /// Hides every sample, drops pending reveals and clears the reveal guard.
    pub fn reset_reveal(&mut self) {
        self.reset_flags();
        self.notify();
    }

    /// Advances the virtual clock by `delta` and runs due reveals.
    pub fn advance_by(&mut self, delta: Duration) {
        self.advance_to(self.now.saturating_add(delta));
    }

    /// Advances the virtual clock to `target` and runs due reveals.
    ///
    /// The clock never moves backwards; an earlier `target` only runs reveals
    /// that are already due.
    pub fn advance_to(&mut self, target: Duration) {
        let previous = self.now;
        self.now = self.now.max(target);

        for task in self.scheduler.pop_due(self.now) {
            self.fire_reveal(task);
        }

        let now = self.now;
        let moved = self.transitions.values().any(|transition| {
            transition.started_at <= now && !transition.is_finished_at(previous)
        });
        if moved {
            self.invalidate(InvalidationMask::light(InvalidationTopic::Reveal));
        }
        self.transitions
            .retain(|_, transition| !transition.is_finished_at(now));
        self.notify();
    }

    fn push_point(&mut self, date: NaiveDate, value: f64) -> PointId {
        let id = PointId::new(self.next_point_id);
        self.next_point_id += 1;
        self.points.push(DataPoint::new(id, date, value));
        self.invalidate(InvalidationMask::full(InvalidationTopic::Dataset));
        id
    }

    fn push_trigger_batch(&mut self) -> SmallVec<[PointId; 3]> {
        let batch = sample::trigger_batch();
        debug!(
            appended = batch.len(),
            total = self.points.len() + batch.len(),
            "trigger batch appended"
        );
        batch
            .into_iter()
            .map(|(date, value)| self.push_point(date, value))
            .collect()
    }

    fn progress_of(&self, point: &DataPoint) -> f64 {
        if !point.revealed {
            return 0.0;
        }
        self.transitions
            .get(&point.id)
            .map_or(1.0, |transition| transition.progress_at(self.now))
    }

    fn start_reveal(&mut self) -> bool {
        if self.animating {
            debug!("reveal suppressed: already animating");
            return false;
        }
        self.animating = true;

        let step = self.config.stagger_step();
        let prefix = self.config.animated_prefix_len;
        let mut snapped = 0usize;
        for (index, point) in self.points.iter_mut().enumerate() {
            if index >= prefix {
                point.revealed = true;
                self.transitions.shift_remove(&point.id);
                snapped += 1;
            } else {
                let delay = step.saturating_mul(u32::try_from(index).unwrap_or(u32::MAX));
                self.scheduler
                    .schedule(point.id, self.now.saturating_add(delay));
            }
        }
        debug!(
            scheduled = self.points.len() - snapped,
            snapped,
            "reveal started"
        );
        self.invalidate(InvalidationMask::light(InvalidationTopic::Reveal));
        true
    }

    fn reset_flags(&mut self) {
        if self.config.cancel_pending_on_reset {
            let cancelled = self.scheduler.cancel_all();
            if cancelled > 0 {
                debug!(cancelled, "pending reveals cancelled");
            }
        }
        let had_visible = self.points.iter().any(|point| point.revealed);
        for point in &mut self.points {
            point.revealed = false;
        }
        self.transitions.clear();
        self.animating = false;
        if had_visible {
            self.invalidate(InvalidationMask::light(InvalidationTopic::Reveal));
        }
    }

    fn fire_reveal(&mut self, task: ScheduledReveal) {
        let curve = self.config.transition_curve();
        let Some(point) = self.points.iter_mut().find(|point| point.id == task.point_id) else {
            return;
        };
        if point.revealed {
            warn!(
                point = point.id.get(),
                task = task.task_id.get(),
                "stale reveal fired for an already revealed point"
            );
            return;
        }
        trace!(point = point.id.get(), due_ms = task.due_at.as_millis(), "reveal fired");
        point.revealed = true;
        self.transitions
            .insert(point.id, Transition::new(task.due_at, curve));
        self.invalidate(InvalidationMask::light(InvalidationTopic::Reveal));
    }

    fn invalidate(&mut self, mask: InvalidationMask) {
        self.pending_invalidation.merge(mask);
        self.unnotified.merge(mask);
    }

    fn notify(&mut self) {
        let mask = std::mem::take(&mut self.unnotified);
        if mask.is_none() {
            return;
        }
        for listener in self.listeners.values_mut() {
            listener(mask);
        }
    }
}

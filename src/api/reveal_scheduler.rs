use std::time::Duration;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::PointId;

/// Handle of one scheduled reveal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TaskId(u64);

impl TaskId {
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

/// Deferred "set revealed" action for one sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledReveal {
    pub task_id: TaskId,
    pub point_id: PointId,
    pub due_at: Duration,
}

/// Cancellable delayed reveals on a caller-driven clock.
///
/// The scheduler never reads wall time. Owners pass the current clock to
/// [`RevealScheduler::pop_due`], which makes every stagger deterministic in
/// tests and lets a UI main loop drive it from frame ticks.
#[derive(Debug, Default)]
pub struct RevealScheduler {
    tasks: IndexMap<TaskId, ScheduledReveal>,
    next_task_id: u64,
}

impl RevealScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, point_id: PointId, due_at: Duration) -> TaskId {
        let task_id = TaskId(self.next_task_id);
        self.next_task_id += 1;
        self.tasks.insert(
            task_id,
            ScheduledReveal {
                task_id,
                point_id,
                due_at,
            },
        );
        task_id
    }

    pub fn cancel(&mut self, task_id: TaskId) -> bool {
        self.tasks.shift_remove(&task_id).is_some()
    }

    /// Cancels every pending reveal of `point_id`; returns how many were dropped.
    pub fn cancel_point(&mut self, point_id: PointId) -> usize {
        let before = self.tasks.len();
        self.tasks.retain(|_, task| task.point_id != point_id);
        before - self.tasks.len()
    }

    pub fn cancel_all(&mut self) -> usize {
        let cancelled = self.tasks.len();
        self.tasks.clear();
        cancelled
    }

    /// Removes and returns tasks due at or before `now`, ordered by due time
    /// and then by scheduling order.
    pub fn pop_due(&mut self, now: Duration) -> Vec<ScheduledReveal> {
        let mut due: Vec<ScheduledReveal> = self
            .tasks
            .values()
            .filter(|task| task.due_at <= now)
            .copied()
            .collect();
        if due.is_empty() {
            return due;
        }
        self.tasks.retain(|_, task| task.due_at > now);
        due.sort_by_key(|task| (task.due_at, task.task_id));
        due
    }

    #[must_use]
    pub fn next_due(&self) -> Option<Duration> {
        self.tasks.values().map(|task| task.due_at).min()
    }

    #[must_use]
    pub fn pending_len(&self) -> usize {
        self.tasks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Pending tasks in scheduling order.
    pub fn pending(&self) -> impl Iterator<Item = &ScheduledReveal> {
        self.tasks.values()
    }
}

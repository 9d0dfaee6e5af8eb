//! Deadline-ordered task table.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::time::Duration;
use tokio::time::Instant;

/// What a scheduled task does when it fires.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TaskKind {
    /// Return a button from Error to Default.
    ErrorRecovery,
    /// Reset a form after a successful submission.
    FormReset,
}

/// Identity of a scheduled task: the owning element plus the task kind.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TaskKey {
    pub owner: String,
    pub kind: TaskKind,
}

impl TaskKey {
    pub fn new(owner: impl Into<String>, kind: TaskKind) -> Self {
        Self {
            owner: owner.into(),
            kind,
        }
    }
}

/// At most one pending task per key.
#[derive(Clone, Debug, Default)]
pub struct Scheduler {
    tasks: BTreeMap<TaskKey, Instant>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `key` to fire `delay` after `now`, replacing any pending
    /// task with the same key. Returns the replaced deadline.
    pub fn schedule_at(&mut self, key: TaskKey, now: Instant, delay: Duration) -> Option<Instant> {
        let deadline = now + delay;
        tracing::debug!(owner = %key.owner, kind = ?key.kind, ?delay, "task scheduled");
        self.tasks.insert(key, deadline)
    }

    pub fn schedule(&mut self, key: TaskKey, delay: Duration) -> Option<Instant> {
        self.schedule_at(key, Instant::now(), delay)
    }

    /// Cancel a pending task. Returns whether one was pending.
    pub fn cancel(&mut self, key: &TaskKey) -> bool {
        let cancelled = self.tasks.remove(key).is_some();
        if cancelled {
            tracing::debug!(owner = %key.owner, kind = ?key.kind, "task cancelled");
        }
        cancelled
    }

    /// Cancel every task owned by `owner`.
    pub fn cancel_owner(&mut self, owner: &str) -> usize {
        let before = self.tasks.len();
        self.tasks.retain(|key, _| key.owner != owner);
        before - self.tasks.len()
    }

    pub fn is_pending(&self, key: &TaskKey) -> bool {
        self.tasks.contains_key(key)
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Earliest pending deadline.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.tasks.values().min().copied()
    }

    /// Remove and return every task due at `now`, earliest first.
    pub fn take_due(&mut self, now: Instant) -> Vec<TaskKey> {
        let mut due: Vec<(Instant, TaskKey)> = self
            .tasks
            .iter()
            .filter(|(_, deadline)| **deadline <= now)
            .map(|(key, deadline)| (*deadline, key.clone()))
            .collect();
        due.sort();

        for (_, key) in &due {
            self.tasks.remove(key);
        }
        due.into_iter().map(|(_, key)| key).collect()
    }
}

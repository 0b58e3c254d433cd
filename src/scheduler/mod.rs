//! Deferred commits that run after the render pass.
//!
//! A render pass may compute values from shared state but must not write
//! them back while it is still reading. It schedules the write here instead,
//! tagged with the [`Generation`] it was computed from. When the host drains
//! the queue after the pass, tasks whose generation no longer matches the
//! live state are dropped rather than applied.

use std::collections::VecDeque;

/// Versions of the state a task was computed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Generation {
    /// Bumped whenever the dataset is replaced.
    pub dataset: u64,
    /// Bumped whenever the selection changes.
    pub selection: u64,
}

/// Handle to a scheduled task, usable with [`CommitScheduler::cancel`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ticket(u64);

/// Outcome of one [`CommitScheduler::run_pending`] drain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickReport {
    /// Tasks whose generation matched and were applied.
    pub applied: usize,
    /// Tasks dropped because their generation was stale.
    pub dropped: usize,
}

#[derive(Debug)]
struct Scheduled<T> {
    ticket: Ticket,
    generation: Generation,
    task: T,
}

/// FIFO of tasks to run after the current render pass.
#[derive(Debug)]
pub struct CommitScheduler<T> {
    pending: VecDeque<Scheduled<T>>,
    next_ticket: u64,
}

impl<T> Default for CommitScheduler<T> {
    fn default() -> Self {
        Self {
            pending: VecDeque::new(),
            next_ticket: 0,
        }
    }
}

impl<T> CommitScheduler<T> {
    /// Empty scheduler.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue `task` to run after the current pass.
    ///
    /// A task already queued for the same generation is superseded: only the
    /// latest request computed from a given state is kept.
    pub fn schedule_after_render(
        &mut self,
        task: T,
        generation: Generation,
    ) -> Ticket {
        self.pending.retain(|s| s.generation != generation);
        let ticket = Ticket(self.next_ticket);
        self.next_ticket = self.next_ticket.wrapping_add(1);
        self.pending.push_back(Scheduled {
            ticket,
            generation,
            task,
        });
        ticket
    }

    /// Remove a queued task. Returns `false` if it already ran or was
    /// dropped.
    pub fn cancel(&mut self, ticket: Ticket) -> bool {
        let before = self.pending.len();
        self.pending.retain(|s| s.ticket != ticket);
        self.pending.len() != before
    }

    /// Drop every queued task, returning how many were discarded.
    pub fn clear(&mut self) -> usize {
        let n = self.pending.len();
        self.pending.clear();
        n
    }

    /// Number of queued tasks.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Run every queued task in FIFO order. Tasks computed from `current`
    /// are passed to `apply`; the rest are discarded.
    pub fn run_pending(
        &mut self,
        current: Generation,
        mut apply: impl FnMut(T),
    ) -> TickReport {
        let mut report = TickReport::default();
        while let Some(scheduled) = self.pending.pop_front() {
            if scheduled.generation == current {
                apply(scheduled.task);
                report.applied += 1;
            } else {
                log::trace!(
                    "dropping stale commit {:?} (computed at {:?}, now {:?})",
                    scheduled.ticket,
                    scheduled.generation,
                    current
                );
                report.dropped += 1;
            }
        }
        report
    }
}

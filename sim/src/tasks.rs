use std::time::Duration;

use bevy_ecs::prelude::*;
use bevy_time::{Time, Timer, TimerMode};

use crate::session::SimContext;

// ============================================================================
// Delayed Tasks
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DelayedTask {
    SpawnTarget,
    ClearMessage { stamp: u64 },
}

#[derive(Debug)]
struct PendingTask {
    task: DelayedTask,
    timer: Timer,
}

// One-shot tasks that run at the start of a frame once their delay has elapsed.
#[derive(Resource, Debug, Default)]
pub struct DelayedTasks {
    pending: Vec<PendingTask>,
}

impl DelayedTasks {
    pub fn schedule(&mut self, task: DelayedTask, delay: Duration) {
        self.pending.push(PendingTask {
            task,
            timer: Timer::new(delay, TimerMode::Once),
        });
    }

    // Tick every timer and take the finished tasks, oldest first.
    pub fn drain_due(&mut self, delta: Duration) -> Vec<DelayedTask> {
        let mut due = Vec::new();
        self.pending.retain_mut(|pending| {
            pending.timer.tick(delta);
            if pending.timer.is_finished() {
                due.push(pending.task);
                false
            } else {
                true
            }
        });
        due
    }

    #[must_use]
    pub fn contains(&self, task: DelayedTask) -> bool {
        self.pending.iter().any(|pending| pending.task == task)
    }

    // Time left before the first pending instance of `task` fires.
    #[must_use]
    pub fn remaining(&self, task: DelayedTask) -> Option<Duration> {
        self.pending
            .iter()
            .find(|pending| pending.task == task)
            .map(|pending| pending.timer.remaining())
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.pending.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn clear(&mut self) {
        self.pending.clear();
    }
}

// ============================================================================
// Delayed Tasks System
// ============================================================================

// Runs first in the frame so timer callbacks are serialized with the rest of the tick.
pub fn delayed_tasks_system(time: Res<Time>, mut ctx: SimContext) {
    if ctx.tasks.is_empty() {
        return;
    }

    for task in ctx.tasks.drain_due(time.delta()) {
        ctx.run_task(task);
    }
}

use std::time::Duration;

use bevy_ecs::prelude::*;

use crate::tasks::{DelayedTask, DelayedTasks};

// ============================================================================
// Mission Text
// ============================================================================

// Single on-screen message slot. Each `show` takes a new stamp and schedules a
// clear for that stamp only, so an older timer never wipes a newer message.
#[derive(Resource, Debug, Default)]
pub struct MissionText {
    text: Option<String>,
    stamp: u64,
}

impl MissionText {
    pub fn show(&mut self, text: impl Into<String>, duration: Duration, tasks: &mut DelayedTasks) -> u64 {
        self.stamp += 1;
        self.text = Some(text.into());
        tasks.schedule(DelayedTask::ClearMessage { stamp: self.stamp }, duration);
        self.stamp
    }

    pub fn clear_if_current(&mut self, stamp: u64) -> bool {
        if stamp != self.stamp || self.text.is_none() {
            return false;
        }
        self.text = None;
        true
    }

    #[must_use]
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    #[must_use]
    pub const fn stamp(&self) -> u64 {
        self.stamp
    }

    // Stamps keep counting so clears scheduled before a reset stay stale.
    pub fn clear(&mut self) {
        self.text = None;
    }
}

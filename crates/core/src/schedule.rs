//! Countdown scheduling seam.
//!
//! The engine never spawns anything itself. It asks a [`Scheduler`] for a
//! recurring one-second schedule and keeps the returned [`TimerHandle`]. Each
//! schedule is tagged with a generation number; the driver feeds ticks back
//! through `GameEngine::tick(generation)`, and ticks from a schedule that was
//! already replaced are dropped by the engine.

use std::sync::{Arc, Mutex};

/// Identifies one countdown schedule
pub type Generation = u64;

/// Owned handle to a running schedule
pub trait TimerHandle: Send {
    /// Stop delivering ticks. Calling it twice is harmless.
    fn cancel(&mut self);
}

/// Creates recurring one-second schedules
pub trait Scheduler: Send {
    fn start_countdown(&mut self, generation: Generation) -> Box<dyn TimerHandle>;
}

#[derive(Debug, Default)]
struct ManualState {
    active: Option<Generation>,
    started: usize,
    cancelled: usize,
}

/// Scheduler that never fires on its own; the caller drives ticks.
///
/// Clones share state, so a test can keep one clone while the engine owns
/// another and ask which generation is currently scheduled.
#[derive(Debug, Default, Clone)]
pub struct ManualScheduler {
    inner: Arc<Mutex<ManualState>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    fn with<R>(&self, f: impl FnOnce(&mut ManualState) -> R) -> R {
        let mut state = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        f(&mut state)
    }

    /// Generation of the schedule that is still running, if any
    pub fn active(&self) -> Option<Generation> {
        self.with(|s| s.active)
    }

    /// Schedules started so far
    pub fn started(&self) -> usize {
        self.with(|s| s.started)
    }

    /// Schedules cancelled so far
    pub fn cancelled(&self) -> usize {
        self.with(|s| s.cancelled)
    }
}

impl Scheduler for ManualScheduler {
    fn start_countdown(&mut self, generation: Generation) -> Box<dyn TimerHandle> {
        self.with(|s| {
            s.active = Some(generation);
            s.started += 1;
        });
        Box::new(ManualHandle {
            generation,
            live: true,
            scheduler: self.clone(),
        })
    }
}

struct ManualHandle {
    generation: Generation,
    live: bool,
    scheduler: ManualScheduler,
}

impl TimerHandle for ManualHandle {
    fn cancel(&mut self) {
        if !self.live {
            return;
        }
        self.live = false;
        let generation = self.generation;
        self.scheduler.with(|s| {
            s.cancelled += 1;
            if s.active == Some(generation) {
                s.active = None;
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_and_cancel_are_counted() {
        let mut scheduler = ManualScheduler::new();
        let mut handle = scheduler.start_countdown(1);
        assert_eq!(scheduler.active(), Some(1));

        handle.cancel();
        handle.cancel();
        assert_eq!(scheduler.active(), None);
        assert_eq!(scheduler.started(), 1);
        assert_eq!(scheduler.cancelled(), 1);
    }

    #[test]
    fn cancelling_stale_handle_keeps_newer_schedule() {
        let mut scheduler = ManualScheduler::new();
        let mut old = scheduler.start_countdown(1);
        let _new = scheduler.start_countdown(2);

        old.cancel();
        assert_eq!(scheduler.active(), Some(2));
    }
}

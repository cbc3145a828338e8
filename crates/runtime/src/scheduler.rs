//! tokio-backed countdown scheduler.
//!
//! Each countdown is a spawned task ticking a `tokio::time::interval`. Ticks
//! are not applied by the task itself: they go back into the engine's request
//! channel, so they queue up behind commands like any other request.

use std::time::Duration;

use tokio::sync::mpsc::WeakUnboundedSender;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant};

use codebreaker_core::{Generation, Scheduler, TimerHandle};

use crate::runtime::Request;

/// Scheduler used by the engine task.
///
/// Holds only a weak sender so a running countdown never keeps the engine
/// task alive once every handle is gone.
pub struct TokioScheduler {
    tx: WeakUnboundedSender<Request>,
    period: Duration,
}

impl TokioScheduler {
    pub(crate) fn new(tx: WeakUnboundedSender<Request>, period: Duration) -> Self {
        Self { tx, period }
    }
}

impl Scheduler for TokioScheduler {
    fn start_countdown(&mut self, generation: Generation) -> Box<dyn TimerHandle> {
        let tx = self.tx.clone();
        let period = self.period;

        let task = tokio::spawn(async move {
            let mut interval = interval_at(Instant::now() + period, period);
            loop {
                interval.tick().await;
                let Some(tx) = tx.upgrade() else {
                    break;
                };
                if tx.send(Request::Tick(generation)).is_err() {
                    break;
                }
            }
        });

        Box::new(TaskHandle(task))
    }
}

struct TaskHandle(JoinHandle<()>);

impl TimerHandle for TaskHandle {
    fn cancel(&mut self) {
        self.0.abort();
    }
}

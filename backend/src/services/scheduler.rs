//! Background interval tasks with explicit cancellation
//!
//! A [`ScheduledTask`] runs a callback on a fixed period until the callback
//! asks to stop or the task is cancelled. Dropping the task also cancels it.
//! [`TaskRegistry`] keeps at most one task per [`TaskKind`], so starting a
//! new countdown replaces the previous one.

use std::collections::HashMap;
use std::future::Future;
use std::time::Duration;
use tokio::sync::{oneshot, Mutex};
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::debug;

/// What the interval loop should do after a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Continue,
    Stop,
}

/// Named slots for the backend's recurring tasks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskKind {
    StepTicker,
    RestTimer,
}

pub struct ScheduledTask {
    cancel: Option<oneshot::Sender<()>>,
    handle: JoinHandle<()>,
}

impl ScheduledTask {
    /// Run `on_tick` every `period`, first after one full period
    pub fn spawn_interval<F, Fut>(period: Duration, mut on_tick: F) -> Self
    where
        F: FnMut() -> Fut + Send + 'static,
        Fut: Future<Output = TickOutcome> + Send + 'static,
    {
        let (cancel_tx, mut cancel_rx) = oneshot::channel::<()>();
        let handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            // The first tick completes immediately
            interval.tick().await;

            loop {
                // Cancellation wins over a tick that is due at the same time
                tokio::select! {
                    biased;
                    _ = &mut cancel_rx => break,
                    _ = interval.tick() => {
                        if on_tick().await == TickOutcome::Stop {
                            break;
                        }
                    }
                }
            }
        });

        Self {
            cancel: Some(cancel_tx),
            handle,
        }
    }

    /// Stop the loop and wait until it has exited
    ///
    /// Once this returns the callback will not run again, so the caller can
    /// safely install fresh state for a replacement task.
    pub async fn cancel(mut self) {
        self.signal_stop();
        // Aborted or already finished; either way the loop is gone
        let _ = (&mut self.handle).await;
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    fn signal_stop(&mut self) {
        if let Some(tx) = self.cancel.take() {
            // The loop may already have stopped on its own
            let _ = tx.send(());
        }
        self.handle.abort();
    }
}

impl Drop for ScheduledTask {
    fn drop(&mut self) {
        self.signal_stop();
    }
}

/// At most one live task per [`TaskKind`]
#[derive(Default)]
pub struct TaskRegistry {
    tasks: Mutex<HashMap<TaskKind, ScheduledTask>>,
}

impl TaskRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install `task` under `kind`, cancelling whatever ran there before
    pub async fn replace(&self, kind: TaskKind, task: ScheduledTask) {
        if let Some(previous) = self.tasks.lock().await.insert(kind, task) {
            debug!(?kind, "Replacing scheduled task");
            previous.cancel().await;
        }
    }

    /// Cancel the task under `kind`; returns false if none was registered
    pub async fn cancel(&self, kind: TaskKind) -> bool {
        match self.tasks.lock().await.remove(&kind) {
            Some(task) => {
                debug!(?kind, "Cancelling scheduled task");
                task.cancel().await;
                true
            }
            None => false,
        }
    }

    /// True if a task is registered under `kind` and still running
    pub async fn is_running(&self, kind: TaskKind) -> bool {
        self.tasks
            .lock()
            .await
            .get(&kind)
            .map(|task| !task.is_finished())
            .unwrap_or(false)
    }

    /// Cancel every task
    pub async fn shutdown(&self) {
        let tasks: Vec<_> = self.tasks.lock().await.drain().collect();
        for (kind, task) in tasks {
            debug!(?kind, "Stopping scheduled task");
            task.cancel().await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Arc;

    fn counting_task(period: Duration, counter: Arc<AtomicU32>, stop_after: u32) -> ScheduledTask {
        ScheduledTask::spawn_interval(period, move || {
            let counter = counter.clone();
            async move {
                let n = counter.fetch_add(1, Ordering::SeqCst) + 1;
                if n >= stop_after {
                    TickOutcome::Stop
                } else {
                    TickOutcome::Continue
                }
            }
        })
    }

    #[tokio::test(start_paused = true)]
    async fn test_interval_ticks_after_each_period() {
        let counter = Arc::new(AtomicU32::new(0));
        let _task = counting_task(Duration::from_secs(1), counter.clone(), u32::MAX);

        tokio::time::sleep(Duration::from_millis(3500)).await;
        assert_eq!(counter.load(Ordering::SeqCst), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_stops_ticks() {
        let counter = Arc::new(AtomicU32::new(0));
        let task = counting_task(Duration::from_secs(1), counter.clone(), u32::MAX);

        tokio::time::sleep(Duration::from_millis(1500)).await;
        task.cancel().await;
        tokio::time::sleep(Duration::from_secs(5)).await;
        assert_eq!(counter.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_on_due_tick_skips_callback() {
        let counter = Arc::new(AtomicU32::new(0));
        let task = counting_task(Duration::from_secs(1), counter.clone(), u32::MAX);

        // Land exactly on the first tick deadline, then cancel before yielding
        tokio::time::advance(Duration::from_secs(1)).await;
        task.cancel().await;
        tokio::time::sleep(Duration::from_secs(3)).await;

        assert!(counter.load(Ordering::SeqCst) <= 1);
        let settled = counter.load(Ordering::SeqCst);
        tokio::time::sleep(Duration::from_secs(3)).await;
        assert_eq!(counter.load(Ordering::SeqCst), settled);
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropped_task_stops_ticking() {
        let counter = Arc::new(AtomicU32::new(0));
        drop(counting_task(Duration::from_secs(1), counter.clone(), u32::MAX));

        tokio::time::sleep(Duration::from_secs(3)).await;
        assert_eq!(counter.load(Ordering::SeqCst), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_stop_outcome_ends_task() {
        let counter = Arc::new(AtomicU32::new(0));
        let task = counting_task(Duration::from_secs(1), counter.clone(), 2);

        tokio::time::sleep(Duration::from_secs(5)).await;
        assert_eq!(counter.load(Ordering::SeqCst), 2);
        assert!(task.is_finished());
    }

    #[tokio::test(start_paused = true)]
    async fn test_registry_replace_cancels_previous() {
        let registry = TaskRegistry::new();
        let first = Arc::new(AtomicU32::new(0));
        let second = Arc::new(AtomicU32::new(0));

        let task = counting_task(Duration::from_secs(1), first.clone(), u32::MAX);
        registry.replace(TaskKind::RestTimer, task).await;
        tokio::time::sleep(Duration::from_millis(1500)).await;
        let task = counting_task(Duration::from_secs(1), second.clone(), u32::MAX);
        registry.replace(TaskKind::RestTimer, task).await;
        tokio::time::sleep(Duration::from_millis(2200)).await;

        assert_eq!(first.load(Ordering::SeqCst), 1);
        assert_eq!(second.load(Ordering::SeqCst), 2);
        assert!(registry.is_running(TaskKind::RestTimer).await);

        assert!(registry.cancel(TaskKind::RestTimer).await);
        assert!(!registry.cancel(TaskKind::RestTimer).await);
    }
}

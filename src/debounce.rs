/// Cancellable delay timer for quote refreshes
///
/// User edits arrive faster than quotes should be fetched. Each edit
/// schedules the fetch after a fixed delay and cancels whatever was pending,
/// so only the last edit inside the window runs. Cancellation aborts the
/// spawned task outright - a superseded fetch never reports a result, which
/// makes last-write-wins an explicit policy rather than a side effect.
use crate::config::QUOTE_DEBOUNCE_MS;
use std::future::Future;
use std::time::Duration;
use tokio::task::JoinHandle;

pub struct QuoteDebouncer {
    delay: Duration,
    pending: Option<JoinHandle<()>>,
}

impl QuoteDebouncer {
    pub fn new() -> Self {
        Self::with_delay(Duration::from_millis(QUOTE_DEBOUNCE_MS))
    }

    pub fn with_delay(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    /// Schedule `task` to run after the delay, cancelling any pending task
    pub fn schedule<F>(&mut self, task: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        self.cancel();

        let delay = self.delay;
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            task.await;
        }));
    }

    /// Cancel the pending task, if any
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }

    /// Whether a task is still waiting out its delay (or running)
    pub fn is_pending(&self) -> bool {
        self.pending
            .as_ref()
            .map(|handle| !handle.is_finished())
            .unwrap_or(false)
    }
}

impl Drop for QuoteDebouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[tokio::test]
    async fn only_last_scheduled_task_runs() {
        let ran = Arc::new(AtomicUsize::new(0));
        let last = Arc::new(AtomicUsize::new(0));

        let mut debouncer = QuoteDebouncer::with_delay(Duration::from_millis(30));
        for i in 1..=3 {
            let ran = Arc::clone(&ran);
            let last = Arc::clone(&last);
            debouncer.schedule(async move {
                ran.fetch_add(1, Ordering::SeqCst);
                last.store(i, Ordering::SeqCst);
            });
            tokio::time::sleep(Duration::from_millis(5)).await;
        }

        tokio::time::sleep(Duration::from_millis(100)).await;
        assert_eq!(ran.load(Ordering::SeqCst), 1);
        assert_eq!(last.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn cancel_prevents_execution() {
        let ran = Arc::new(AtomicUsize::new(0));

        let mut debouncer = QuoteDebouncer::with_delay(Duration::from_millis(20));
        {
            let ran = Arc::clone(&ran);
            debouncer.schedule(async move {
                ran.fetch_add(1, Ordering::SeqCst);
            });
        }
        debouncer.cancel();
        assert!(!debouncer.is_pending());

        tokio::time::sleep(Duration::from_millis(60)).await;
        assert_eq!(ran.load(Ordering::SeqCst), 0);
    }
}

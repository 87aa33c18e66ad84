//! Delayed dispatch: store actions that fire after a timer.
//!
//! Tasks run on a tokio runtime and hand their action back over a channel;
//! the UI thread applies it on its next poll. Every task hangs off one root
//! [`CancellationToken`], so [`DelayedDispatcher::cancel_all`] at teardown
//! guarantees nothing mutates the store afterwards.

use std::sync::mpsc;
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use tabdeck_common::StoreAction;

pub struct DelayedDispatcher {
    handle: Handle,
    root: CancellationToken,
    tx: mpsc::Sender<StoreAction>,
}

/// Handle to one scheduled action.
pub struct ScheduledTask {
    token: CancellationToken,
    join: JoinHandle<bool>,
}

impl ScheduledTask {
    /// Cancel this task only. A task that already fired is unaffected.
    pub fn cancel(&self) {
        self.token.cancel();
    }

    pub fn is_finished(&self) -> bool {
        self.join.is_finished()
    }

    /// Wait for the task; `true` if its action was delivered.
    pub async fn wait(self) -> bool {
        self.join.await.unwrap_or(false)
    }
}

impl DelayedDispatcher {
    pub fn new(handle: Handle, tx: mpsc::Sender<StoreAction>) -> Self {
        Self {
            handle,
            root: CancellationToken::new(),
            tx,
        }
    }

    /// Deliver `action` after `delay` unless cancelled first.
    pub fn schedule(&self, action: StoreAction, delay: Duration) -> ScheduledTask {
        let token = self.root.child_token();
        let task_token = token.clone();
        let tx = self.tx.clone();
        let name = action.name();

        let join = self.handle.spawn(async move {
            tokio::select! {
                _ = task_token.cancelled() => {
                    debug!(action = name, "delayed action cancelled");
                    false
                }
                _ = tokio::time::sleep(delay) => {
                    if task_token.is_cancelled() {
                        return false;
                    }
                    // The receiver is gone once the UI has shut down.
                    tx.send(action).is_ok()
                }
            }
        });

        debug!(action = name, delay_ms = delay.as_millis() as u64, "scheduled delayed action");
        ScheduledTask { token, join }
    }

    /// Schedule `IncrementByAmount(amount)` after `delay`.
    pub fn increment_async(&self, amount: i64, delay: Duration) -> ScheduledTask {
        self.schedule(StoreAction::IncrementByAmount(amount), delay)
    }

    /// Cancel every outstanding task. Tasks scheduled afterwards are
    /// cancelled immediately.
    pub fn cancel_all(&self) {
        if !self.root.is_cancelled() {
            debug!("cancelling all delayed actions");
        }
        self.root.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.root.is_cancelled()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dispatcher() -> (DelayedDispatcher, mpsc::Receiver<StoreAction>) {
        let (tx, rx) = mpsc::channel();
        (DelayedDispatcher::new(Handle::current(), tx), rx)
    }

    #[tokio::test]
    async fn delivers_after_delay() {
        let (d, rx) = dispatcher();
        let task = d.increment_async(5, Duration::from_millis(10));
        assert!(rx.try_recv().is_err());
        assert!(task.wait().await);
        assert_eq!(rx.try_recv().unwrap(), StoreAction::IncrementByAmount(5));
    }

    #[tokio::test]
    async fn cancelled_task_delivers_nothing() {
        let (d, rx) = dispatcher();
        let task = d.increment_async(1, Duration::from_millis(50));
        task.cancel();
        assert!(!task.wait().await);
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn cancel_all_stops_every_task() {
        let (d, rx) = dispatcher();
        let a = d.increment_async(1, Duration::from_millis(50));
        let b = d.schedule(StoreAction::Decrement, Duration::from_millis(50));
        d.cancel_all();
        assert!(d.is_cancelled());
        assert!(!a.wait().await);
        assert!(!b.wait().await);
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn schedule_after_cancel_all_is_inert() {
        let (d, rx) = dispatcher();
        d.cancel_all();
        let task = d.increment_async(3, Duration::from_millis(1));
        assert!(!task.wait().await);
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn dropped_receiver_is_not_an_error() {
        let (d, rx) = dispatcher();
        drop(rx);
        let task = d.increment_async(2, Duration::from_millis(1));
        assert!(!task.wait().await);
    }

    #[tokio::test]
    async fn tasks_deliver_in_timer_order() {
        let (d, rx) = dispatcher();
        let late = d.increment_async(2, Duration::from_millis(40));
        let early = d.increment_async(1, Duration::from_millis(5));
        assert!(early.wait().await);
        assert!(late.wait().await);
        assert_eq!(rx.try_recv().unwrap(), StoreAction::IncrementByAmount(1));
        assert_eq!(rx.try_recv().unwrap(), StoreAction::IncrementByAmount(2));
    }
}

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::sync::Notify;

/// Owns the shutdown flag for the whole app.
///
/// The runtime signals it once on quit; the input thread polls the flag
/// and the update pump awaits the notification, so both the tick timer
/// and any outstanding scheduled commit are cancelled before the store
/// is dropped.
pub struct ShutdownCoordinator {
    shutdown: Arc<AtomicBool>,
    notify: Arc<Notify>,
}

impl ShutdownCoordinator {
    pub fn new() -> Self {
        Self {
            shutdown: Arc::new(AtomicBool::new(false)),
            notify: Arc::new(Notify::new()),
        }
    }

    pub fn signal(&self) {
        if !self.shutdown.swap(true, Ordering::SeqCst) {
            tracing::info!("shutdown initiated");
            self.notify.notify_waiters();
        }
    }

    pub fn handle(&self) -> ShutdownHandle {
        ShutdownHandle {
            shutdown: Arc::clone(&self.shutdown),
            notify: Arc::clone(&self.notify),
        }
    }
}

impl Default for ShutdownCoordinator {
    fn default() -> Self {
        Self::new()
    }
}

/// Lightweight cloneable handle for checking or awaiting shutdown.
#[derive(Clone)]
pub struct ShutdownHandle {
    shutdown: Arc<AtomicBool>,
    notify: Arc<Notify>,
}

impl ShutdownHandle {
    pub fn is_shutting_down(&self) -> bool {
        self.shutdown.load(Ordering::SeqCst)
    }

    pub async fn wait(&self) {
        // Subscribe to Notify BEFORE checking the flag: signal() firing
        // between the check and the await would otherwise have no
        // subscriber and the notification would be lost.
        let notified = self.notify.notified();
        tokio::pin!(notified);
        notified.as_mut().enable();
        if self.is_shutting_down() {
            return;
        }
        notified.await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signal_is_visible_through_handles() {
        let coordinator = ShutdownCoordinator::new();
        let handle = coordinator.handle();
        assert!(!handle.is_shutting_down());

        coordinator.signal();
        assert!(handle.is_shutting_down());
        assert!(coordinator.handle().is_shutting_down());
    }

    #[tokio::test]
    async fn wait_returns_immediately_after_signal() {
        let coordinator = ShutdownCoordinator::new();
        let handle = coordinator.handle();
        coordinator.signal();
        handle.wait().await;
    }
}

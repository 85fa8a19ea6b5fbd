//! The update-badge lifecycle.
//!
//! Simulates out-of-band "content updated" notifications: on every tick
//! one random queued item gets a pending badge, and the delayed commit
//! resolves all pending badges by bubbling their items to the front of
//! the queue. The [`UpdatePump`] emits both actions as timed events onto
//! the UI event loop; the actual mutation runs there, on the single
//! writer thread, through [`mark_random_pending`] and [`commit_pending`].

use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use rand::Rng;

use crate::catalog::TutorialId;
use crate::queue::store::QueueStore;
use crate::shutdown::ShutdownHandle;
use crate::ui::events::AppEvent;

/// Badge counter value stamped on a freshly selected item.
pub const PENDING_SENTINEL: u32 = 3;

/// Commit is a no-op below this queue length; pending badges persist.
const MIN_COMMIT_LEN: usize = 3;

/// Tick and commit timing for the update simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpdateCadence {
    /// Time between ticks.
    pub interval: Duration,
    /// Delay between a tick and its commit. Must be shorter than
    /// `interval`; config validation enforces this.
    pub commit_delay: Duration,
}

impl Default for UpdateCadence {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(2),
            commit_delay: Duration::from_millis(750),
        }
    }
}

/// Tick: badge one item picked uniformly at random from the displayed
/// queue. Returns the badged id, or `None` on an empty queue.
///
/// Ticks can outpace commits, so several items may carry badges at once.
pub fn mark_random_pending<R: Rng>(store: &mut QueueStore, rng: &mut R) -> Option<TutorialId> {
    let snapshot = store.snapshot();
    if snapshot.is_empty() {
        return None;
    }

    let index = rng.random_range(0..snapshot.len());
    let id = snapshot.items()[index].id;
    store.set_update_count(id, PENDING_SENTINEL);
    tracing::debug!(%id, "pending update badge set");
    Some(id)
}

/// Commit: promote every badged item to the front, in display order,
/// and clear its badge. Returns the promoted ids.
///
/// Promotions insert before the item that was first when the commit
/// started, so multiple promoted items keep their relative display
/// order. If the first item itself carries a badge it is the promotion
/// anchor: it stays put and keeps its badge. Items badged by a tick but
/// deleted before the commit fires are simply absent from the snapshot
/// and skipped.
pub fn commit_pending(store: &mut QueueStore) -> Vec<TutorialId> {
    let snapshot = store.snapshot();
    if snapshot.len() < MIN_COMMIT_LEN {
        return Vec::new();
    }

    let boundary = snapshot.items()[0].id;
    let mut promoted = Vec::new();

    for item in snapshot.items() {
        if !item.has_pending_update() || item.id == boundary {
            continue;
        }
        store.move_before(item.id, boundary);
        store.set_update_count(item.id, 0);
        promoted.push(item.id);
    }

    if !promoted.is_empty() {
        tracing::debug!(count = promoted.len(), "pending updates committed");
    }
    promoted
}

/// Background task emitting `UpdateTick` / `ApplyUpdates` events on a
/// fixed cadence.
///
/// Runs a current-thread tokio runtime on its own thread so both delayed
/// actions are plain timers that the shutdown handle can cancel; the
/// pump never touches the store.
pub struct UpdatePump {
    thread: Option<thread::JoinHandle<()>>,
}

impl UpdatePump {
    pub fn spawn(
        cadence: UpdateCadence,
        events: mpsc::Sender<AppEvent>,
        shutdown: ShutdownHandle,
    ) -> Self {
        let thread = thread::spawn(move || pump_loop(cadence, events, shutdown));
        Self {
            thread: Some(thread),
        }
    }

    /// Waits for the pump thread to exit. Call after signaling shutdown.
    pub fn join(mut self) {
        if let Some(handle) = self.thread.take() {
            let _ = handle.join();
        }
    }
}

fn pump_loop(cadence: UpdateCadence, events: mpsc::Sender<AppEvent>, shutdown: ShutdownHandle) {
    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
    {
        Ok(runtime) => runtime,
        Err(err) => {
            tracing::error!("update pump runtime failed to start: {err}");
            return;
        }
    };

    runtime.block_on(async move {
        let first = tokio::time::Instant::now() + cadence.interval;
        let mut ticker = tokio::time::interval_at(first, cadence.interval);

        loop {
            tokio::select! {
                _ = shutdown.wait() => break,
                _ = ticker.tick() => {
                    if events.send(AppEvent::UpdateTick).is_err() {
                        break;
                    }
                    // The commit is a second, cancellable timer chained
                    // after each tick.
                    tokio::select! {
                        _ = shutdown.wait() => break,
                        _ = tokio::time::sleep(cadence.commit_delay) => {
                            if events.send(AppEvent::ApplyUpdates).is_err() {
                                break;
                            }
                        }
                    }
                }
            }
        }
    });
}

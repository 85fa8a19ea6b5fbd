use std::sync::mpsc::{self, Receiver};
use std::thread;
use std::time::{Duration, Instant};

use crossterm::event::{Event, KeyEvent};

use crate::shutdown::ShutdownHandle;

/// Everything the main loop reacts to, from all sources: the input
/// thread (keys, resize, redraw ticks) and the update pump (badge
/// ticks, commits).
pub enum AppEvent {
    Key(KeyEvent),
    Resize(u16, u16),
    /// Periodic redraw tick from the input thread.
    Tick,
    /// The update simulation selected this moment to badge an item.
    UpdateTick,
    /// The delayed commit for a previous tick.
    ApplyUpdates,
}

/// Owns the event channel and the input-polling thread.
///
/// The thread polls crossterm with a short timeout so it notices the
/// shutdown flag promptly, and emits `Tick` on the redraw cadence.
pub struct EventHandler {
    rx: Receiver<AppEvent>,
    tx: mpsc::Sender<AppEvent>,
}

impl EventHandler {
    pub fn new(tick_rate: Duration, shutdown: ShutdownHandle) -> Self {
        let (tx, rx) = mpsc::channel();
        let event_tx = tx.clone();

        thread::spawn(move || {
            let mut last_tick = Instant::now();
            loop {
                if shutdown.is_shutting_down() {
                    break;
                }

                let timeout = tick_rate
                    .saturating_sub(last_tick.elapsed())
                    .min(Duration::from_millis(50));

                match crossterm::event::poll(timeout) {
                    Ok(true) => match crossterm::event::read() {
                        Ok(Event::Key(key)) => {
                            let _ = event_tx.send(AppEvent::Key(key));
                        }
                        Ok(Event::Resize(cols, rows)) => {
                            let _ = event_tx.send(AppEvent::Resize(cols, rows));
                        }
                        Ok(_) => {}
                        Err(err) => {
                            tracing::error!("input read failed: {err}");
                            break;
                        }
                    },
                    Ok(false) => {}
                    Err(err) => {
                        tracing::error!("input poll failed: {err}");
                        break;
                    }
                }

                if last_tick.elapsed() >= tick_rate {
                    if event_tx.send(AppEvent::Tick).is_err() {
                        break;
                    }
                    last_tick = Instant::now();
                }
            }
        });

        Self { rx, tx }
    }

    pub fn next(&self, timeout: Duration) -> Result<AppEvent, mpsc::RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }

    /// A sender for other event sources (the update pump).
    pub fn sender(&self) -> mpsc::Sender<AppEvent> {
        self.tx.clone()
    }
}

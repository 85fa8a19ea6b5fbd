use std::io;
use std::sync::mpsc;
use std::time::Duration;

use crate::queue::{QueueStore, UpdateCadence, UpdatePump};
use crate::shutdown::ShutdownCoordinator;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;

/// Everything `main` resolved from config and CLI flags.
pub struct RunSettings {
    pub cadence: UpdateCadence,
    pub auto_updates: bool,
}

pub fn run(store: QueueStore, settings: RunSettings) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let shutdown = ShutdownCoordinator::new();
    let tick_rate = Duration::from_millis(250);

    let events = EventHandler::new(tick_rate, shutdown.handle());
    let mut app = App::new(store);
    let pump = settings
        .auto_updates
        .then(|| UpdatePump::spawn(settings.cadence, events.sender(), shutdown.handle()));

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Tick) => app.on_tick(),
            Ok(AppEvent::Resize(_, _)) => {}
            Ok(AppEvent::UpdateTick) => app.on_update_tick(),
            Ok(AppEvent::ApplyUpdates) => app.on_apply_updates(),
            Err(mpsc::RecvTimeoutError::Timeout) => {}
            Err(mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    // Cancel the tick timer and any scheduled commit before the store
    // is dropped.
    shutdown.signal();
    if let Some(pump) = pump {
        pump.join();
    }
    drop(guard);
    Ok(())
}

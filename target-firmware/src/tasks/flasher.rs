// Hintergrund-Flasher - wiederholtes Blinken aller Targets
//
// Läuft als eigener Task für länger anhaltende Anzeige-Zustände.
// Es darf höchstens ein Flasher gleichzeitig laufen, da alle Instanzen
// in dieselben Strip-Buffer schreiben würden. Ein Neustart beendet den
// laufenden Flasher kooperativ (Stop-Signal zwischen zwei Frames) und
// wartet auf dessen sauberes Ende, bevor der neue startet.

use core::sync::atomic::{AtomicBool, Ordering};

use defmt::{info, warn};
use embassy_executor::Spawner;
use embassy_futures::select::{Either, select};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;
use embassy_time::Timer;

use target_core::ColorCommand;

use crate::TargetMutex;
use crate::config::FLASHER_FRAME_MS;
use crate::leds;

/// Globaler Handle: es gibt genau einen Flasher-Slot
pub static FLASHER: FlasherHandle = FlasherHandle::new();

/// Steuerung des Hintergrund-Flashers
///
/// `stop` wird vom Starter signalisiert, der Task prüft es zwischen
/// zwei Frames. `done` signalisiert der Task als letzte Aktion, damit
/// der Starter weiß, wann die Strips wieder frei sind.
pub struct FlasherHandle {
    stop: Signal<CriticalSectionRawMutex, ()>,
    done: Signal<CriticalSectionRawMutex, ()>,
    active: AtomicBool,
}

impl FlasherHandle {
    pub const fn new() -> Self {
        Self {
            stop: Signal::new(),
            done: Signal::new(),
            active: AtomicBool::new(false),
        }
    }

    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::Acquire)
    }

    /// Startet den Flasher mit einer Kommando-Farbe
    ///
    /// Läuft bereits einer, wird er zuerst beendet (cancel-then-start,
    /// niemals beide).
    pub async fn start(
        &'static self,
        spawner: Spawner,
        targets: &'static TargetMutex,
        cmd: ColorCommand,
    ) {
        self.stop_and_wait().await;

        self.stop.reset();
        self.done.reset();
        self.active.store(true, Ordering::Release);
        if spawner.spawn(flasher_task(self, targets, cmd)).is_err() {
            self.active.store(false, Ordering::Release);
            warn!("Flasher: spawn failed");
        }
    }

    /// Beendet einen laufenden Flasher und wartet auf sein Ende
    ///
    /// Ohne aktiven Flasher sofort fertig.
    pub async fn stop_and_wait(&self) {
        if self.active.load(Ordering::Acquire) {
            self.stop.signal(());
            self.done.wait().await;
        }
    }
}

#[embassy_executor::task(pool_size = 2)]
async fn flasher_task(
    handle: &'static FlasherHandle,
    targets: &'static TargetMutex,
    cmd: ColorCommand,
) {
    info!("Flasher: running with {}", cmd);

    'run: loop {
        for color in [cmd, ColorCommand::Off] {
            {
                let mut targets = targets.lock().await;
                if let Err(e) = leds::set_all(&mut targets, color) {
                    warn!("Flasher: strip write failed: {}", e);
                }
            }
            match select(handle.stop.wait(), Timer::after_millis(FLASHER_FRAME_MS)).await {
                Either::First(()) => break 'run,
                Either::Second(()) => {}
            }
        }
    }

    // Strips dunkel hinterlassen, erst dann den Slot freigeben
    {
        let mut targets = targets.lock().await;
        let _ = leds::all_off(&mut targets);
    }
    handle.active.store(false, Ordering::Release);
    handle.done.signal(());
    info!("Flasher: stopped");
}

// GPIO-Datenleitung für den Strip-Protokoll-Treiber
//
// Implementiert `StripLine` auf einem esp-hal Push-Pull-Output.
// Die Puls-Breiten kommen aus einem Busy-Wait-Delay in Nanosekunden;
// der kritische Abschnitt deaktiviert Interrupts auf dem Core, damit
// kein Scheduling-Ereignis das Bit-Timing zerreißt.

use embedded_hal::delay::DelayNs;
use esp_hal::delay::Delay;
use esp_hal::gpio::Output;

use target_core::StripLine;

/// Datenleitung eines Strips: GPIO-Output plus Delay-Provider
pub struct GpioStripLine {
    pin: Output<'static>,
    delay: Delay,
}

impl GpioStripLine {
    /// Erstellt die Leitung auf einem bereits konfigurierten Output
    ///
    /// Der Pin muss als Push-Pull-Output mit Pegel Low initialisiert
    /// sein (Idle-Pegel des Protokolls).
    pub fn new(pin: Output<'static>) -> Self {
        Self {
            pin,
            delay: Delay::new(),
        }
    }
}

impl StripLine for GpioStripLine {
    fn set_high(&mut self) {
        self.pin.set_high();
    }

    fn set_low(&mut self) {
        self.pin.set_low();
    }

    fn delay_ns(&mut self, ns: u32) {
        self.delay.delay_ns(ns);
    }

    fn with_lock<R>(&mut self, f: impl FnOnce(&mut Self) -> R) -> R {
        // Interrupts aus für die Dauer des Frames; die Freigabe ist
        // durch den Closure-Scope auf jedem Pfad garantiert
        critical_section::with(|_| f(self))
    }
}

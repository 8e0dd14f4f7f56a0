//! Hardware Abstraction Traits
//!
//! Diese Traits definieren Schnittstellen für Hardware-Zugriff
//! ohne konkrete Implementierung.

/// Trait für das Auslesen der Piezo-Sensoren
///
/// Abstrahiert den ADC-Zugriff auf einen Sensor-Kanal.
///
/// # Implementierungen
/// - **Production:** PiezoAdc (ESP32 ADC1 Oneshot)
/// - **Testing:** Mock mit injizierten Messwerten
///
/// # Fehlerbehandlung
/// Ein fehlgeschlagener Lesevorgang wird von der Implementierung
/// absorbiert (letzter bekannter Wert). Die Sampling-Schleife sieht
/// niemals einen Fehler.
pub trait SensorReader {
    /// Liest den Rohwert eines Sensor-Kanals (12-bit ADC)
    fn read_raw(&mut self, channel: u8) -> u16;
}

/// Trait für die Datenleitung eines LED-Strips
///
/// Abstrahiert Pin-Pegel und Nanosekunden-Delays, damit der
/// Protokoll-Treiber auf dem Host gegen eine Mock-Leitung testbar ist.
///
/// # Implementierungen
/// - **Production:** GpioStripLine (esp-hal Output + Delay)
/// - **Testing:** Mock, der Pegel-Wechsel aufzeichnet
pub trait StripLine {
    /// Setzt die Datenleitung auf High
    fn set_high(&mut self);

    /// Setzt die Datenleitung auf Low
    fn set_low(&mut self);

    /// Blockiert für die angegebene Anzahl Nanosekunden
    fn delay_ns(&mut self, ns: u32);

    /// Führt `f` in einem kritischen Abschnitt aus
    ///
    /// Die Production-Implementierung deaktiviert Interrupts für die
    /// Dauer von `f`, damit das Bit-Timing nicht unterbrochen wird.
    /// Die Freigabe ist durch den Closure-Scope auf jedem Pfad
    /// garantiert. Default: direkter Aufruf ohne Sperre (Mocks).
    fn with_lock<R>(&mut self, f: impl FnOnce(&mut Self) -> R) -> R
    where
        Self: Sized,
    {
        f(self)
    }
}

// Projekt-Konfiguration: Konstanten und Hardware-Zuordnungen
#![allow(dead_code)]

// ============================================================================
// Sensor-Konfiguration (Piezo-Kanäle)
// ============================================================================

/// Anzahl der Piezo-Sensoren (= Anzahl der Target-Panels)
pub const NUM_TARGETS: usize = 7;

/// ADC1-Kanal-Kennungen der Piezos, in Target-Reihenfolge
/// Auf dem ESP32-C6 liegen die ADC1-Kanäle 0..6 auf GPIO0..GPIO6
pub const PIEZO_CHANNELS: [u8; NUM_TARGETS] = [0, 1, 2, 3, 4, 5, 6];

/// Trigger-Schwelle für den ADC-Rohwert (12-bit, 0..4095)
/// Ein Messwert >= Schwelle zählt als Einschlag (einschließlich!)
pub const TRIGGER_THRESHOLD: u16 = 1000;

/// Settle-Fenster in Samples (nicht in Wallclock-Zeit!)
/// Nach einem Trigger wird diese Anzahl Iterationen lang nicht neu
/// gelesen, damit das Nachschwingen des Piezos abklingt
pub const SETTLE_WINDOW_SAMPLES: u32 = 20_000;

/// Poll-Abstand der Sampling-Schleife in Mikrosekunden
/// Settle-Zeit = SETTLE_WINDOW_SAMPLES * SAMPLE_INTERVAL_US (~1 s)
pub const SAMPLE_INTERVAL_US: u64 = 50;

/// Startup-Verzögerung vor dem ersten Poll in Millisekunden
/// Gibt den Piezos nach dem Einschalten Zeit zum Einschwingen
pub const STARTUP_DELAY_MS: u64 = 1000;

// ============================================================================
// LED-Strip-Konfiguration
// ============================================================================

/// GPIO-Pins der Strip-Datenleitungen, in Target-Reihenfolge
pub const STRIP_GPIO_PINS: [u8; NUM_TARGETS] = [8, 9, 10, 11, 12, 13, 15];

/// Anzahl LEDs pro Target-Strip
pub const LEDS_PER_TARGET: usize = 4;

/// Helligkeits-Level der Strips (0-255)
pub const LED_BRIGHTNESS: u8 = 255;

// ============================================================================
// Feedback-Konfiguration
// ============================================================================

/// Anzahl der An/Aus-Wechsel beim Treffer-Feedback
pub const HIT_FLASH_COUNT: u8 = 2;

/// Wartezeit zwischen den Feedback-Phasen in Millisekunden
pub const HIT_PHASE_DELAY_MS: u32 = 35;

/// Anzahl der Blitze beim Sieger-Muster
pub const WINNER_FLASH_COUNT: u8 = 4;

/// Wartezeit zwischen den Sieger-Blitzen in Millisekunden
pub const WINNER_FLASH_DELAY_MS: u64 = 50;

/// Frame-Zeit des Hintergrund-Flashers in Millisekunden
/// (Farbe an, warten, aus, warten)
pub const FLASHER_FRAME_MS: u64 = 50;

//! Protokoll-Treiber: Bit-Banging für adressierbare Single-Wire LEDs
//!
//! Überträgt einen kompletten Strip-Buffer über die Datenleitung.
//! Jedes Bit besteht aus einer High- und einer Low-Phase mit explizit
//! spezifizierten Nanosekunden-Breiten. Die gesamte Übertragung läuft
//! in einem kritischen Abschnitt: eine Unterbrechung zwischen zwei
//! Pegel-Wechseln würde den Frame korrumpieren (das Protokoll hat
//! keinerlei Framing außer dem Timing).

use rgb::RGB8;

use crate::strip::{Strip, StripError};
use crate::traits::StripLine;

/// Puls-Breiten eines Single-Wire-Protokolls
///
/// Alle Angaben in Nanosekunden pro Bit-Phase, Reset in Mikrosekunden.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PulseTiming {
    /// High-Phase eines 1-Bits
    pub t1h_ns: u32,
    /// Low-Phase eines 1-Bits
    pub t1l_ns: u32,
    /// High-Phase eines 0-Bits
    pub t0h_ns: u32,
    /// Low-Phase eines 0-Bits
    pub t0l_ns: u32,
    /// Idle-Zeit nach dem Frame, die die LEDs als Latch interpretieren
    pub reset_us: u32,
}

/// WS2812B-Timing laut Datenblatt (±150 ns Toleranz pro Phase)
pub const WS2812B_TIMING: PulseTiming = PulseTiming {
    t1h_ns: 800,
    t1l_ns: 450,
    t0h_ns: 400,
    t0l_ns: 850,
    reset_us: 200,
};

/// Treiber für genau eine Datenleitung
///
/// Liest den Pixel-Buffer eines `Strip` und überträgt ihn bit-genau.
/// Mutiert den Buffer niemals.
pub struct StripDriver<L: StripLine> {
    line: L,
    timing: PulseTiming,
}

impl<L: StripLine> StripDriver<L> {
    pub fn new(line: L) -> Self {
        Self::with_timing(line, WS2812B_TIMING)
    }

    pub fn with_timing(line: L, timing: PulseTiming) -> Self {
        Self { line, timing }
    }

    pub const fn timing(&self) -> PulseTiming {
        self.timing
    }

    /// Zugriff auf die Datenleitung (für Tests und Diagnose)
    pub fn line(&self) -> &L {
        &self.line
    }

    /// Überträgt den kompletten Pixel-Buffer in Index-Reihenfolge
    ///
    /// Der gesamte Frame inklusive Reset-Delay läuft in EINEM
    /// `with_lock`-Scope. Die Sperre wird auf jedem Pfad freigegeben;
    /// der einzige Fehlerpfad (unallokierter Buffer) liegt davor.
    pub fn flush(&mut self, strip: &Strip) -> Result<(), StripError> {
        let pixels = strip.pixels().ok_or(StripError::Unallocated)?;
        let timing = self.timing;

        self.line.with_lock(|line| {
            for color in pixels {
                write_pixel(line, *color, &timing);
            }
            line.delay_ns(timing.reset_us.saturating_mul(1000));
        });
        Ok(())
    }
}

/// Kodiert eine Farbe in die 24-bit Sende-Reihenfolge des Protokolls
///
/// Grün-Byte, Rot-Byte, Blau-Byte, MSB zuerst. Die Reihenfolge ist
/// ein Protokoll-Detail der WS2812-Familie, kein Fehler.
#[inline]
pub const fn pixel_code(color: RGB8) -> u32 {
    ((color.g as u32) << 16) | ((color.r as u32) << 8) | color.b as u32
}

/// Sendet die 24 Bits eines Pixels
fn write_pixel<L: StripLine>(line: &mut L, color: RGB8, timing: &PulseTiming) {
    let mut code = pixel_code(color);
    for _ in 0..24 {
        if code & 0x80_0000 != 0 {
            line.set_high();
            line.delay_ns(timing.t1h_ns);
            line.set_low();
            line.delay_ns(timing.t1l_ns);
        } else {
            line.set_high();
            line.delay_ns(timing.t0h_ns);
            line.set_low();
            line.delay_ns(timing.t0l_ns);
        }
        code <<= 1;
    }
}

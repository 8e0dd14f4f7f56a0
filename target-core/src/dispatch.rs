//! Treffer-Feedback: Phasen-Plan für das Flicker-Muster
//!
//! Der Plan ist reine Logik (host-testbar); die Firmware iteriert die
//! Phasen und legt zwischen ihnen die Delays ein.

use crate::color::ColorCommand;

/// Eine Phase des Feedback-Musters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FeedbackPhase {
    /// Farbe, mit der der ganze Strip gefüllt wird
    pub color: ColorCommand,
    /// Wartezeit nach dem Flush, 0 bei der letzten Phase
    pub delay_ms: u32,
}

/// Beschreibung des Treffer-Feedbacks
///
/// `flash_count` Wechsel Treffer-Farbe/Aus, abschließend bleibt die
/// Treffer-Farbe stehen. Zwischen allen Phasen liegt dieselbe feste
/// Wartezeit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct HitFeedback {
    pub color: ColorCommand,
    pub flash_count: u8,
    pub phase_delay_ms: u32,
}

impl HitFeedback {
    pub const fn new(color: ColorCommand, flash_count: u8, phase_delay_ms: u32) -> Self {
        Self {
            color,
            flash_count,
            phase_delay_ms,
        }
    }

    /// Anzahl der Phasen: pro Flash an+aus, plus die Schluss-Phase
    pub const fn phase_count(&self) -> usize {
        self.flash_count as usize * 2 + 1
    }

    /// Liefert die Phasen in Ausführungs-Reihenfolge
    pub fn phases(&self) -> impl Iterator<Item = FeedbackPhase> + '_ {
        let count = self.phase_count();
        (0..count).map(move |i| FeedbackPhase {
            color: if i % 2 == 0 { self.color } else { ColorCommand::Off },
            delay_ms: if i + 1 == count { 0 } else { self.phase_delay_ms },
        })
    }
}

//! Sampling-Controller: Sensor-Polling und Trigger-State-Machine
//!
//! Entprellt einen verrauschten Piezo-Impuls ohne Events zu verlieren:
//! der erste Kanal über der Schwelle sperrt die Erkennung (Lock), ein
//! Settle-Fenster in Samples lässt das Nachschwingen abklingen, danach
//! wird der Treffer genau einmal gemeldet und der Zustand zurückgesetzt.

use crate::traits::SensorReader;

/// Ein Piezo-Sensor-Kanal mit seinem letzten Rohwert
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SensorChannel {
    /// ADC-Kanal-Kennung
    pub channel: u8,
    /// Letzter Rohwert, wird bei jedem Idle-Scan aktualisiert
    pub raw: u16,
}

/// Zustand der Trigger-State-Machine
///
/// Genau eine Instanz, exklusiv im Besitz des `SampleController`.
/// `target` ist nur im `Locked`-Zustand gültig; `elapsed` wächst
/// monoton und ist durch das Settle-Fenster begrenzt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TriggerState {
    Idle,
    Locked { target: usize, elapsed: u32 },
}

/// Ergebnis einer einzelnen Poll-Iteration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PollOutcome {
    /// Kein Kanal über der Schwelle
    Quiet,
    /// Ein Kanal hat soeben getriggert, Scan abgebrochen
    Locked(usize),
    /// Settle-Fenster läuft, Sensoren werden nicht gelesen
    Settling,
    /// Settle-Fenster abgelaufen: Treffer melden, Zustand ist wieder Idle
    Hit(usize),
}

/// Sampling-Controller
///
/// Hält Kanal-Array, Schwelle, Settle-Fenster und den Trigger-Zustand
/// als eigenen Wert (keine globalen Variablen). Der Sensor-Zugriff
/// kommt über `SensorReader` herein, damit die State-Machine auf dem
/// Host mit injizierten Messwerten testbar ist.
pub struct SampleController<const N: usize> {
    channels: [SensorChannel; N],
    threshold: u16,
    settle_window: u32,
    state: TriggerState,
}

impl<const N: usize> SampleController<N> {
    pub const fn new(channel_ids: [u8; N], threshold: u16, settle_window: u32) -> Self {
        let mut channels = [SensorChannel { channel: 0, raw: 0 }; N];
        let mut i = 0;
        while i < N {
            channels[i].channel = channel_ids[i];
            i += 1;
        }
        Self {
            channels,
            threshold,
            settle_window,
            state: TriggerState::Idle,
        }
    }

    pub const fn state(&self) -> TriggerState {
        self.state
    }

    pub fn channels(&self) -> &[SensorChannel; N] {
        &self.channels
    }

    /// Führt genau eine Iteration der Sampling-Schleife aus
    ///
    /// Idle: liest alle Kanäle in fester Reihenfolge (Index 0..N). Der
    /// erste Kanal mit Rohwert >= Schwelle (einschließlich) sperrt die
    /// Erkennung und beendet den Scan; der niedrigste Index gewinnt
    /// damit jeden Gleichstand.
    ///
    /// Locked: die Sensoren werden NICHT gelesen (kein Retriggern durch
    /// das Nachschwingen desselben Einschlags). Wenn der Sample-Zähler
    /// das Settle-Fenster erreicht, wird der Treffer genau einmal als
    /// `Hit` gemeldet und der Zustand auf Idle zurückgesetzt.
    pub fn poll<R: SensorReader>(&mut self, reader: &mut R) -> PollOutcome {
        match self.state {
            TriggerState::Idle => {
                for i in 0..N {
                    let raw = reader.read_raw(self.channels[i].channel);
                    self.channels[i].raw = raw;
                    if raw >= self.threshold {
                        self.state = TriggerState::Locked { target: i, elapsed: 0 };
                        return PollOutcome::Locked(i);
                    }
                }
                PollOutcome::Quiet
            }
            TriggerState::Locked { target, elapsed } => {
                let elapsed = elapsed + 1;
                if elapsed >= self.settle_window {
                    self.state = TriggerState::Idle;
                    PollOutcome::Hit(target)
                } else {
                    self.state = TriggerState::Locked { target, elapsed };
                    PollOutcome::Settling
                }
            }
        }
    }
}

//! Target-Map: validierte Zuordnung Target-Index -> Strip
//!
//! Jedes Target-Panel hat genau einen Strip samt Treiber. Die Map wird
//! einmal beim Start gebaut und validiert; unmappte Indizes werden dort
//! abgewiesen statt beim Dispatch einen ungültigen Zugriff zu riskieren.

use crate::color::ColorCommand;
use crate::driver::StripDriver;
use crate::strip::{Strip, StripError};
use crate::traits::StripLine;

/// Fehler bei der Konfigurations-Validierung (fatal beim Start)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Strip eines Targets ist nicht nutzbar (z.B. Buffer nicht allokiert)
    InvalidStrip { target: usize, cause: StripError },
}

/// Ein Target-Panel: Strip-Buffer plus Protokoll-Treiber
pub struct TargetStrip<L: StripLine> {
    pub strip: Strip,
    pub driver: StripDriver<L>,
}

impl<L: StripLine> TargetStrip<L> {
    pub fn new(strip: Strip, driver: StripDriver<L>) -> Self {
        Self { strip, driver }
    }

    /// Füllt den ganzen Strip mit einer Kommando-Farbe
    pub fn fill_all(&mut self, cmd: ColorCommand) -> Result<(), StripError> {
        let len = self.strip.len();
        self.strip.fill(0, len, cmd.color())
    }

    /// Füllt den ganzen Strip und überträgt ihn sofort
    pub fn show(&mut self, cmd: ColorCommand) -> Result<(), StripError> {
        self.fill_all(cmd)?;
        self.driver.flush(&self.strip)
    }
}

/// Geordnete Zuordnung Target-Index 0..N -> TargetStrip
pub struct TargetMap<L: StripLine, const N: usize> {
    targets: [TargetStrip<L>; N],
}

impl<L: StripLine, const N: usize> TargetMap<L, N> {
    pub fn new(targets: [TargetStrip<L>; N]) -> Self {
        Self { targets }
    }

    /// Prüft, dass jedes Target einen nutzbaren Strip hat
    ///
    /// Muss nach dem Aufbau einmal aufgerufen werden; ein Fehler hier
    /// ist nicht behebbar und bricht den Start ab.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (i, t) in self.targets.iter().enumerate() {
            if t.strip.is_empty() {
                return Err(ConfigError::InvalidStrip {
                    target: i,
                    cause: StripError::InvalidLength,
                });
            }
            if t.strip.pixels().is_none() {
                return Err(ConfigError::InvalidStrip {
                    target: i,
                    cause: StripError::Unallocated,
                });
            }
        }
        Ok(())
    }

    pub const fn len(&self) -> usize {
        N
    }

    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// Checked Lookup eines Targets
    pub fn get_mut(&mut self, target: usize) -> Result<&mut TargetStrip<L>, StripError> {
        self.targets.get_mut(target).ok_or(StripError::OutOfBounds)
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut TargetStrip<L>> {
        self.targets.iter_mut()
    }
}

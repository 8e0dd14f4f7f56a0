// Library-Root: Wiederverwendbare Logik und Module
// Keine Standard-Bibliothek (Embedded System)
#![no_std]

// Module
pub mod config;
pub mod hal;
pub mod leds;
pub mod tasks;

// Re-exports von target-core
pub use target_core::{
    ColorCommand, ConfigError, HitFeedback, PollOutcome, SampleController, SensorReader, Strip,
    StripDriver, StripError, StripLine, TargetMap, TargetStrip,
};

// Embassy Sync-Typen
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::mutex::Mutex;

use crate::config::NUM_TARGETS;
use crate::hal::GpioStripLine;

// ============================================================================
// Type-Aliase
// ============================================================================
//
// Diese Type-Aliase vereinfachen die Lesbarkeit der Funktionssignaturen.
// Statt:  TargetMap<GpioStripLine, { config::NUM_TARGETS }>
// Nutze:  Targets

/// Die konkrete Target-Map der Firmware: ein Strip pro Target-Panel
pub type Targets = TargetMap<GpioStripLine, NUM_TARGETS>;

/// Geteilter Zugriff auf die Target-Map (Sampling-Task + Flasher)
///
/// Das Design garantiert höchstens einen Schreiber pro Strip (der
/// Dispatch blockiert die Sampling-Schleife, es läuft maximal ein
/// Flasher). Der Mutex existiert für die Aliasing-Regeln von Rust,
/// nicht als Timing-Schutz; das Bit-Timing schützt der kritische
/// Abschnitt im Protokoll-Treiber.
pub type TargetMutex = Mutex<CriticalSectionRawMutex, Targets>;

/// Der konkrete Sampling-Controller der Firmware
pub type Sampler = SampleController<NUM_TARGETS>;

// ============================================================================
// Testing-Strategie
// ============================================================================
//
// Diese Crate kompiliert nur für riscv32imac-unknown-none-elf und hat
// deshalb keine Host-Tests. Die komplette Logik (State-Machine,
// Strip-Buffer, Bit-Encoding, Feedback-Plan) liegt in target-core und
// wird dort plus in target-tests auf dem Host gegen Mocks getestet.
// Hier verbleiben nur die Hardware-Implementierungen der Core-Traits
// und die Embassy-Tasks.

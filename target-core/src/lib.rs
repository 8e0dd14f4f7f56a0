//! Target Core - Platform-agnostic Logik und Traits
//!
//! Diese Crate enthält KEINE Hardware-Dependencies.
//! Sie definiert das Datenmodell des Smart Targets (Farb-Kommandos,
//! Strip-Buffer, Trigger-State-Machine) und die Traits, über die die
//! Firmware Hardware-Zugriff einspeist.

#![no_std]

pub mod color;
pub mod dispatch;
pub mod driver;
pub mod sampler;
pub mod strip;
pub mod targets;
pub mod traits;

// Re-exports für einfachen Zugriff
pub use color::{ColorCommand, scale8_video};
pub use dispatch::{FeedbackPhase, HitFeedback};
pub use driver::{PulseTiming, StripDriver, WS2812B_TIMING};
pub use sampler::{PollOutcome, SampleController, SensorChannel, TriggerState};
pub use strip::{MAX_STRIP_LEN, Strip, StripError};
pub use targets::{ConfigError, TargetMap, TargetStrip};
pub use traits::{SensorReader, StripLine};

// Task-Modul: Enthält alle Embassy Tasks
//
// Der Sampling-Task ist die Hauptschleife; der Flasher läuft optional
// daneben. Beide teilen sich die Target-Map über den TargetMutex.

pub mod flasher;
pub mod sampling;

// Re-export Tasks für einfachen Import
pub use flasher::{FLASHER, FlasherHandle};
pub use sampling::{dispatch_hit, init_targets, sampling_task};

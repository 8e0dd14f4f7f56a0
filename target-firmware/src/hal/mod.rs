// Hardware Abstraction Layer (HAL) Module
//
// Dieses Modul kapselt Hardware-Zugriffe hinter den Core-Traits,
// um Testbarkeit und Wartbarkeit zu verbessern.

pub mod piezo_adc;
pub mod strip_line;

pub use piezo_adc::PiezoAdc;
pub use strip_line::GpioStripLine;

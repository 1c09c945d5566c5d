// Hardware Abstraction Layer (HAL) Module
//
// Dieses Modul implementiert die Traits aus strip-core für echte Hardware,
// um Controller-Logik und Peripherie sauber zu trennen.

pub mod led_writer;
pub mod serial;

pub use led_writer::RmtStripWriter;
pub use serial::UartLink;

// UART Link
//
// Verbindet einen blockierenden esp-hal UART mit dem SerialLink Trait.
// Gelesen wird nur, was schon im RX-FIFO liegt.

use defmt::warn;
use embedded_io::{Read, ReadReady, Write};

use crate::{LinkError, SerialLink};

/// Serielle Verbindung über einen UART (Host oder Bluetooth-Modul)
pub struct UartLink<T> {
    uart: T,
    name: &'static str,
}

impl<T> UartLink<T> {
    /// # Parameter
    /// - `uart`: konfigurierter UART (z.B. `esp_hal::uart::Uart<Blocking>`)
    /// - `name`: Name für Log-Ausgaben
    pub fn new(uart: T, name: &'static str) -> Self {
        Self { uart, name }
    }
}

impl<T> SerialLink for UartLink<T>
where
    T: Read + ReadReady + Write,
{
    fn read_byte(&mut self) -> Option<u8> {
        // Nicht blockieren: nur lesen wenn Daten bereitliegen
        match self.uart.read_ready() {
            Ok(true) => {}
            Ok(false) => return None,
            Err(_) => {
                warn!("{}: RX status error", self.name);
                return None;
            }
        }

        let mut byte = [0u8; 1];
        match self.uart.read(&mut byte) {
            Ok(1) => Some(byte[0]),
            Ok(_) => None,
            Err(_) => {
                warn!("{}: RX error, byte dropped", self.name);
                None
            }
        }
    }

    fn write_all(&mut self, bytes: &[u8]) -> Result<(), LinkError> {
        Write::write_all(&mut self.uart, bytes).map_err(|_| LinkError::WriteFailed)
    }
}

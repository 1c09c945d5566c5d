//! Hardware Abstraction Traits
//!
//! Diese Traits definieren Schnittstellen für Hardware-Zugriff
//! ohne konkrete Implementierung.

use rgb::RGB8;

/// Fehler-Typ für LED-Operationen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LedError {
    WriteFailed,
}

/// Fehler-Typ für serielle Verbindungen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LinkError {
    WriteFailed,
}

/// Trait für SmartLED Strip-Zugriff
///
/// Abstrahiert einen adressierbaren LED-Strip (WS2812/Neopixel) mit
/// fester Länge. Farben werden gepuffert und erst mit `show()` ausgegeben.
///
/// # Implementierungen
/// - **Production:** RmtStripWriter (ESP32 RMT Peripheral)
/// - **Testing:** MockLedWriter (in-memory Mock)
pub trait SmartLedWriter {
    /// Anzahl der LEDs im Strip (fest ab Start)
    fn pixel_count(&self) -> usize;

    /// Setzt die Farbe einer LED im Puffer
    ///
    /// Indizes außerhalb des Strips werden ignoriert.
    fn set_pixel(&mut self, index: usize, color: RGB8);

    /// Setzt die globale Helligkeit (0-255) für die nächste Ausgabe
    fn set_brightness(&mut self, level: u8);

    /// Schreibt den Puffer auf den Strip
    ///
    /// # Fehlerbehandlung
    /// Gibt `LedError::WriteFailed` zurück wenn Hardware-Zugriff fehlschlägt
    fn show(&mut self) -> Result<(), LedError>;
}

/// Trait für eine serielle Text-Verbindung (Kabel oder Bluetooth)
pub trait SerialLink {
    /// Liest ein Byte, falls sofort verfügbar (blockiert nie)
    fn read_byte(&mut self) -> Option<u8>;

    /// Schreibt alle Bytes auf die Verbindung
    fn write_all(&mut self, bytes: &[u8]) -> Result<(), LinkError>;
}

// SmartLED Strip Writer
//
// Implementiert den SmartLedWriter Trait aus strip-core für einen
// WS2812 Strip am RMT Peripheral.

use esp_hal::Blocking;
use esp_hal::rmt::Rmt;
use esp_hal::time::Rate;
use esp_hal_smartled::SmartLedsAdapter;
use rgb::RGB8;
use smart_leds::brightness;
use smart_leds_trait::SmartLedsWrite;

use crate::config::LED_COUNT;
use crate::{LedError, SmartLedWriter};

/// Buffer-Größe für den ganzen Strip (3 Farben * 8 Bits pro LED + 1 Reset)
pub const LED_BUFFER_SIZE: usize = LED_COUNT * 24 + 1;

/// Real Hardware Strip Writer
///
/// Hält eine Kopie aller Pixel-Farben; erst `show()` skaliert mit der
/// Helligkeit und schreibt über RMT auf den Strip.
///
/// Hinweis: Der RMT-Buffer muss den Writer überleben, daher wird er im Task
/// erstellt und als Parameter übergeben statt im Constructor allokiert.
pub struct RmtStripWriter<'a> {
    led: SmartLedsAdapter<'a, LED_BUFFER_SIZE>,
    pixels: [RGB8; LED_COUNT],
    brightness: u8,
}

impl<'a> RmtStripWriter<'a> {
    /// Erstellt einen neuen RmtStripWriter
    ///
    /// # Parameter
    /// - `gpio8`: GPIO8 Peripheral für die Datenleitung
    /// - `rmt_peripheral`: RMT Peripheral
    /// - `rmt_clock_mhz`: RMT Clock Frequenz in MHz (z.B. 80)
    /// - `buffer`: Buffer für LED-Daten (erstellt mit smart_led_buffer!(LED_COUNT))
    pub fn new(
        gpio8: esp_hal::peripherals::GPIO8<'a>,
        rmt_peripheral: esp_hal::peripherals::RMT<'a>,
        rmt_clock_mhz: u32,
        buffer: &'a mut [esp_hal::rmt::PulseCode; LED_BUFFER_SIZE],
    ) -> Self {
        // RMT initialisieren
        let rmt: Rmt<'a, Blocking> = Rmt::new(rmt_peripheral, Rate::from_mhz(rmt_clock_mhz))
            .expect("Failed to initialize RMT");

        let led = SmartLedsAdapter::new(rmt.channel0, gpio8, buffer);

        Self {
            led,
            pixels: [RGB8::default(); LED_COUNT],
            brightness: 0,
        }
    }
}

impl SmartLedWriter for RmtStripWriter<'_> {
    fn pixel_count(&self) -> usize {
        LED_COUNT
    }

    fn set_pixel(&mut self, index: usize, color: RGB8) {
        if let Some(pixel) = self.pixels.get_mut(index) {
            *pixel = color;
        }
    }

    fn set_brightness(&mut self, level: u8) {
        self.brightness = level;
    }

    fn show(&mut self) -> Result<(), LedError> {
        self.led
            .write(brightness(self.pixels.iter().copied(), self.brightness))
            .map_err(|_| LedError::WriteFailed)
    }
}

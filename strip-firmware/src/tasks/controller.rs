// Controller Task - Kommandos von Host/Bluetooth, Rendering über RMT
use defmt::{info, warn};
use embassy_futures::yield_now;
use embassy_time::Instant;
use esp_hal::Blocking;
use esp_hal::uart::Uart;
use esp_hal_smartled::smart_led_buffer;

use crate::config::{LED_COUNT, RMT_CLOCK_MHZ};
use crate::hal::{RmtStripWriter, UartLink};
use crate::{Controller, DisplayState, SerialLink, SmartLedWriter};

/// Controller Logic - Testbare Hauptschleife ohne Hardware-Abhängigkeit
///
/// Jeder Durchlauf: Bluetooth pollen, Host pollen, Animations-Tick.
/// Danach wird die CPU kurz an den Executor zurückgegeben; kein Schritt
/// blockiert, ein Durchlauf rendert höchstens einen Frame.
///
/// # Trait-basierte Abstraktion
/// Die generischen Parameter ermöglichen:
/// - Real Hardware (RmtStripWriter, UartLink) im Production-Code
/// - Mock Implementationen in Tests
///
/// # Parameter
/// - `strip`: LED Writer (Hardware oder Mock)
/// - `host`: Host-Verbindung (Antworten + Diagnose)
/// - `wireless`: Bluetooth-Verbindung
pub async fn controller_logic<W, H, B>(strip: W, host: H, wireless: B) -> !
where
    W: SmartLedWriter,
    H: SerialLink,
    B: SerialLink,
{
    let mut controller = Controller::new(strip, host, wireless);

    if let Err(e) = controller.start() {
        warn!("Startup sequence incomplete: {}", e);
    }
    info!(
        "Controller ready: {} LEDs, {}",
        controller.strip().pixel_count(),
        controller.state()
    );

    loop {
        let before = *controller.state();

        if let Err(e) = controller.run_once(Instant::now().as_millis()) {
            warn!("Loop error: {}", e);
        }

        // Nur Kommando-Änderungen loggen, nicht jeden Rainbow-Frame
        if changed_by_command(&before, controller.state()) {
            info!("State changed: {}", controller.state());
        }

        // Gibt CPU an andere Tasks zurück
        yield_now().await;
    }
}

fn changed_by_command(before: &DisplayState, after: &DisplayState) -> bool {
    before.brightness != after.brightness
        || before.is_rainbow() != after.is_rainbow()
        || before.static_color() != after.static_color()
}

/// Controller Task - Embassy Task für die Hauptschleife
///
/// Dieser Task übernimmt die Hardware-Initialisierung und ruft dann
/// die testbare `controller_logic()` Funktion auf.
///
/// # Parameter
/// - `gpio8`: GPIO8 Peripheral für die Strip-Datenleitung
/// - `rmt_peripheral`: RMT Peripheral für präzises Timing
/// - `host_uart`: UART0 zum Host
/// - `bluetooth_uart`: UART1 zum Bluetooth-Modul
#[embassy_executor::task]
pub async fn controller_task(
    gpio8: esp_hal::peripherals::GPIO8<'static>,
    rmt_peripheral: esp_hal::peripherals::RMT<'static>,
    host_uart: Uart<'static, Blocking>,
    bluetooth_uart: Uart<'static, Blocking>,
) {
    // Buffer für SmartLED Daten erstellen (ganzer Strip)
    // Macro allokiert Speicher im richtigen Format für RMT
    let mut rmt_buffer = smart_led_buffer!(LED_COUNT);

    // Hardware initialisieren: RmtStripWriter kapselt RMT + SmartLED
    let strip = RmtStripWriter::new(gpio8, rmt_peripheral, RMT_CLOCK_MHZ, &mut rmt_buffer);

    let host = UartLink::new(host_uart, "Host");
    let wireless = UartLink::new(bluetooth_uart, "Bluetooth");

    controller_logic(strip, host, wireless).await
}

// Keine Standard-Bibliothek verwenden (Embedded System)
#![no_std]
// Kein normaler main() Einstiegspunkt (wird von esp_rtos bereitgestellt)
#![no_main]
// Verbiete mem::forget - gefährlich bei ESP HAL Types mit DMA-Buffern
#![deny(
    clippy::mem_forget,
    reason = "mem::forget is generally not safe to do with esp_hal types, especially those \
    holding buffers for the duration of a data transfer."
)]
// Verbiete große Stack-Frames (Stack ist auf Embedded Systemen begrenzt)
#![deny(clippy::large_stack_frames)]

// Embassy Async Runtime
use embassy_executor::Spawner;
use embassy_time::{Duration, Timer};

// ESP32-C6 HAL
use esp_hal::clock::CpuClock;
use esp_hal::timer::timg::TimerGroup;
use esp_hal::uart::{Config as UartConfig, Uart};

// Backtrace bei Panic und println!() Support
use {esp_backtrace as _, esp_println as _};

use defmt::info;

// Projekt-Module und Konfiguration
use esp_led_strip::config::{BLUETOOTH_BAUD, HOST_BAUD, LED_COUNT};
use esp_led_strip::tasks::controller_task;

// ESP-IDF App Descriptor - erforderlich für den Bootloader!
// Ohne diesen schlägt das Flashen mit "ESP-IDF App Descriptor missing" fehl
esp_bootloader_esp_idf::esp_app_desc!();

/// Main Entry Point
///
/// Initialisiert Hardware, startet Embassy Runtime und spawnt den
/// Controller Task. Danach schläft main() - alle Arbeit läuft im Task.
#[esp_rtos::main]
async fn main(spawner: Spawner) -> ! {
    // ESP32-C6 Konfiguration: CPU auf maximale Taktfrequenz (160 MHz)
    let config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    let peripherals = esp_hal::init(config);

    // Embassy Runtime initialisieren (Timer + Software Interrupt)
    let timg0 = TimerGroup::new(peripherals.TIMG0);
    let sw_interrupt =
        esp_hal::interrupt::software::SoftwareInterruptControl::new(peripherals.SW_INTERRUPT);
    esp_rtos::start(timg0.timer0, sw_interrupt.software_interrupt0);

    // Host-Verbindung (UART0): Kommandos, Antworten und Diagnose-Ausgaben
    // Pins bei Änderung auch in den info!-Ausgaben anpassen
    let host_uart = Uart::new(
        peripherals.UART0,
        UartConfig::default().with_baudrate(HOST_BAUD),
    )
    .expect("Failed to initialize host UART")
    .with_tx(peripherals.GPIO16)
    .with_rx(peripherals.GPIO17);
    info!("Host UART0: TX=GPIO16 RX=GPIO17 @ {} baud", HOST_BAUD);

    // Bluetooth-Modul (UART1)
    // RX des Moduls braucht einen Spannungsteiler, falls es 5V-Pegel erwartet
    let bluetooth_uart = Uart::new(
        peripherals.UART1,
        UartConfig::default().with_baudrate(BLUETOOTH_BAUD),
    )
    .expect("Failed to initialize Bluetooth UART")
    .with_tx(peripherals.GPIO4)
    .with_rx(peripherals.GPIO5);
    info!("Bluetooth UART1: TX=GPIO4 RX=GPIO5 @ {} baud", BLUETOOTH_BAUD);

    info!("LED strip: {} LEDs on GPIO8", LED_COUNT);

    // Spawn Controller Task (Strip + beide Verbindungen)
    spawner
        .spawn(controller_task(
            peripherals.GPIO8,
            peripherals.RMT,
            host_uart,
            bluetooth_uart,
        ))
        .unwrap();

    // Main-Loop: schläft (alle Arbeit läuft im Task)
    loop {
        Timer::after(Duration::from_secs(3600)).await;
    }
}

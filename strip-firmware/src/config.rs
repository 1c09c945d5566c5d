// Projekt-Konfiguration: Konstanten und Hardware-Zuordnungen

// ============================================================================
// LED Strip Konfiguration
// ============================================================================

// Pin-Zuordnung (LED DIN = GPIO8, UART-Pins) steht nur in bin/main.rs,
// da esp-hal die Pins als typisierte Peripherals verlangt.

/// Anzahl der LEDs im Strip
/// Wird zur Build-Zeit aus der Environment Variable LED_COUNT geladen
/// (siehe .env.example, Default 30)
pub const LED_COUNT: usize = parse_count(env!("LED_COUNT"));

/// RMT Taktfrequenz in MHz
/// 80 MHz ist optimal für WS2812 LED-Timing
pub const RMT_CLOCK_MHZ: u32 = 80;

// ============================================================================
// Serielle Verbindungen
// ============================================================================

/// Baudrate der Host-Verbindung (UART0)
pub const HOST_BAUD: u32 = 115_200;

/// Baudrate des Bluetooth-Moduls (UART1, HC-05 Default)
pub const BLUETOOTH_BAUD: u32 = 9_600;

// ============================================================================
// Helpers
// ============================================================================

/// Parst eine Dezimalzahl zur Compile-Zeit
///
/// build.rs hat den Wert bereits validiert.
const fn parse_count(value: &str) -> usize {
    let bytes = value.as_bytes();
    let mut count = 0;
    let mut i = 0;
    while i < bytes.len() {
        let digit = bytes[i];
        assert!(digit.is_ascii_digit(), "LED_COUNT ist keine Zahl");
        count = count * 10 + (digit - b'0') as usize;
        i += 1;
    }
    assert!(count > 0, "LED_COUNT muss größer 0 sein");
    count
}

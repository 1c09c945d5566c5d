//! Pure Business Logic Functions
//!
//! Funktionen ohne Hardware-Dependencies (testbar!)

use rgb::RGB8;

/// Farbrad: bildet eine Position (0-255) auf einen Farbton ab
///
/// Die Position wird invertiert und in drei 85er-Segmente geteilt:
/// Rot → Blau, Blau → Grün, Grün → Rot.
///
/// # Beispiele
///
/// ```
/// # use rgb::RGB8;
/// # use strip_core::wheel;
/// assert_eq!(wheel(255), RGB8 { r: 255, g: 0, b: 0 });
/// assert_eq!(wheel(170), RGB8 { r: 0, g: 0, b: 255 });
/// ```
pub fn wheel(position: u8) -> RGB8 {
    let mut position = 255 - position;
    if position < 85 {
        return RGB8::new(255 - position * 3, 0, position * 3);
    }
    if position < 170 {
        position -= 85;
        return RGB8::new(0, position * 3, 255 - position * 3);
    }
    position -= 170;
    RGB8::new(position * 3, 255 - position * 3, 0)
}

/// Begrenzt einen beliebigen Integer auf einen Farb-/Helligkeitswert
pub fn clamp_u8(value: i64) -> u8 {
    value.clamp(0, 255) as u8
}

/// Parst einen Dezimal-Integer mit optionalem Vorzeichen
///
/// Zu große Werte sättigen bei `i64::MAX`/`i64::MIN`, damit auch
/// riesige Eingaben korrekt auf 0-255 begrenzt werden.
pub fn parse_int(token: &str) -> Option<i64> {
    let bytes = token.as_bytes();
    let (negative, digits) = match bytes.first()? {
        b'-' => (true, &bytes[1..]),
        b'+' => (false, &bytes[1..]),
        _ => (false, bytes),
    };
    if digits.is_empty() {
        return None;
    }

    let mut value: i64 = 0;
    for &byte in digits {
        if !byte.is_ascii_digit() {
            return None;
        }
        let digit = i64::from(byte - b'0');
        value = if negative {
            value.saturating_mul(10).saturating_sub(digit)
        } else {
            value.saturating_mul(10).saturating_add(digit)
        };
    }
    Some(value)
}

/// Wandelt sechs Hex-Ziffern (`RRGGBB`) in eine Farbe um
///
/// Gelesen wird bis zum ersten Nicht-Hex-Zeichen, der Rest wird ignoriert
/// (`"12G456"` → `0x000012`, `"zzzzzz"` → `0`).
/// Gibt `None` zurück wenn nicht genau sechs Bytes übergeben werden.
pub fn parse_hex_color(digits: &str) -> Option<RGB8> {
    let bytes = digits.as_bytes();
    if bytes.len() != 6 {
        return None;
    }

    let value = bytes
        .iter()
        .map_while(|&byte| (byte as char).to_digit(16))
        .fold(0u32, |acc, nibble| (acc << 4) | nibble);

    Some(RGB8::new(
        ((value >> 16) & 0xFF) as u8,
        ((value >> 8) & 0xFF) as u8,
        (value & 0xFF) as u8,
    ))
}

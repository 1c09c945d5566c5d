//! Zeilen-Framing für serielle Kanäle
//!
//! Sammelt Bytes pro Kanal bis zum Zeilenende. `\r` wird ignoriert,
//! Bytes über die Kapazität hinaus werden still verworfen.

use heapless::Vec;

use crate::traits::SerialLink;

/// Maximale Zeilenlänge in Bytes
pub const LINE_CAPACITY: usize = 48;

/// Eine vollständige Kommandozeile (ohne `\n`)
pub type Line = Vec<u8, LINE_CAPACITY>;

/// Zeilenpuffer für genau einen Kanal
#[derive(Debug, Default)]
pub struct LineFramer {
    buffer: Line,
}

impl LineFramer {
    pub const fn new() -> Self {
        Self { buffer: Vec::new() }
    }

    /// Verarbeitet ein Byte und liefert bei `\n` die fertige Zeile
    ///
    /// Auch leere Zeilen werden geliefert; der Puffer ist danach leer.
    pub fn feed(&mut self, byte: u8) -> Option<Line> {
        match byte {
            b'\n' => Some(core::mem::take(&mut self.buffer)),
            b'\r' => None,
            _ => {
                // Voll → Byte verwerfen, kein Fehler
                let _ = self.buffer.push(byte);
                None
            }
        }
    }

    /// Liest sofort verfügbare Bytes bis eine Zeile fertig ist
    ///
    /// Liefert höchstens eine Zeile pro Aufruf und kehrt zurück sobald
    /// `read_byte()` nichts mehr liefert.
    pub fn poll<L: SerialLink + ?Sized>(&mut self, link: &mut L) -> Option<Line> {
        while let Some(byte) = link.read_byte() {
            if let Some(line) = self.feed(byte) {
                return Some(line);
            }
        }
        None
    }

    /// Aktuell gepufferte (unvollständige) Bytes
    pub fn pending(&self) -> &[u8] {
        &self.buffer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed_all(framer: &mut LineFramer, bytes: &[u8]) -> Option<Line> {
        let mut last = None;
        for &byte in bytes {
            if let Some(line) = framer.feed(byte) {
                last = Some(line);
            }
        }
        last
    }

    #[test]
    fn test_line_completed_on_newline() {
        let mut framer = LineFramer::new();
        let line = feed_all(&mut framer, b"OFF\n").unwrap();
        assert_eq!(&line[..], b"OFF");
        assert!(framer.pending().is_empty());
    }

    #[test]
    fn test_carriage_return_ignored() {
        let mut framer = LineFramer::new();
        let line = feed_all(&mut framer, b"RAIN\rBOW\r\n").unwrap();
        assert_eq!(&line[..], b"RAINBOW");
    }

    #[test]
    fn test_empty_line_is_emitted() {
        let mut framer = LineFramer::new();
        let line = framer.feed(b'\n').unwrap();
        assert!(line.is_empty());
    }

    #[test]
    fn test_overflow_truncates_silently() {
        let mut framer = LineFramer::new();
        for _ in 0..60 {
            assert!(framer.feed(b'A').is_none());
        }
        assert_eq!(framer.pending().len(), LINE_CAPACITY);

        let line = framer.feed(b'\n').unwrap();
        assert_eq!(line.len(), LINE_CAPACITY);

        // Puffer ist nach der Zeile wieder frei
        let next = feed_all(&mut framer, b"OK\n").unwrap();
        assert_eq!(&next[..], b"OK");
    }
}

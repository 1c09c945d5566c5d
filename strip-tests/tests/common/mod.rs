//! Gemeinsame Mocks für die Host-Tests

#![allow(dead_code)]

use std::collections::VecDeque;

use rgb::RGB8;
use strip_core::{Controller, LedError, LinkError, SerialLink, SmartLedWriter};

// ============================================================================
// Mock LED Writer
// ============================================================================

/// In-memory Strip: merkt sich Puffer, Helligkeit und jeden gezeigten Frame
pub struct MockLedWriter {
    pub pixels: Vec<RGB8>,
    pub brightness: u8,
    pub show_count: usize,
    /// Kopie des Puffers bei jedem `show()`
    pub frames: Vec<Vec<RGB8>>,
    pub fail_next_show: bool,
}

impl MockLedWriter {
    pub fn new(count: usize) -> Self {
        Self {
            pixels: vec![RGB8::default(); count],
            brightness: 0,
            show_count: 0,
            frames: Vec::new(),
            fail_next_show: false,
        }
    }

    pub fn last_frame(&self) -> Option<&[RGB8]> {
        self.frames.last().map(Vec::as_slice)
    }
}

impl SmartLedWriter for MockLedWriter {
    fn pixel_count(&self) -> usize {
        self.pixels.len()
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
        if self.fail_next_show {
            self.fail_next_show = false;
            return Err(LedError::WriteFailed);
        }

        self.frames.push(self.pixels.clone());
        self.show_count += 1;
        Ok(())
    }
}

// ============================================================================
// Mock Serial Link
// ============================================================================

/// In-memory Verbindung: Eingabe-Queue und gesammelte Ausgabe
#[derive(Default)]
pub struct MockLink {
    pub input: VecDeque<u8>,
    pub output: Vec<u8>,
    pub fail_writes: bool,
}

impl MockLink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stellt Bytes zum Lesen bereit
    pub fn send(&mut self, text: &str) {
        self.input.extend(text.bytes());
    }

    /// Ausgabe als Zeilen (ohne `\n`)
    pub fn lines(&self) -> Vec<String> {
        String::from_utf8_lossy(&self.output)
            .lines()
            .map(str::to_owned)
            .collect()
    }

    pub fn clear_output(&mut self) {
        self.output.clear();
    }
}

impl SerialLink for MockLink {
    fn read_byte(&mut self) -> Option<u8> {
        self.input.pop_front()
    }

    fn write_all(&mut self, bytes: &[u8]) -> Result<(), LinkError> {
        if self.fail_writes {
            return Err(LinkError::WriteFailed);
        }
        self.output.extend_from_slice(bytes);
        Ok(())
    }
}

// ============================================================================
// Helpers
// ============================================================================

pub type TestController = Controller<MockLedWriter, MockLink, MockLink>;

pub const TEST_LED_COUNT: usize = 8;

/// Controller nach der Startsequenz, Ausgaben bereits geleert
pub fn started_controller() -> TestController {
    let mut controller = Controller::new(
        MockLedWriter::new(TEST_LED_COUNT),
        MockLink::new(),
        MockLink::new(),
    );
    controller.start().unwrap();
    controller.host_mut().clear_output();
    controller.wireless_mut().clear_output();
    controller
}

/// Sendet eine Zeile auf dem Host-Kanal und führt einen Loop-Durchlauf aus
pub fn host_command(controller: &mut TestController, line: &str, now_ms: u64) {
    controller.host_mut().send(line);
    controller.host_mut().send("\n");
    controller.run_once(now_ms).unwrap();
}

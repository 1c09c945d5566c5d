//! Rendering und Animations-Scheduler
//!
//! `tick()` wird einmal pro Loop-Durchlauf aufgerufen und rendert im
//! Rainbow-Modus höchstens einen Frame, frühestens alle 40 ms.

use rgb::RGB8;

use crate::logic::wheel;
use crate::traits::{LedError, SmartLedWriter};
use crate::types::{DisplayState, Mode};

/// Mindestabstand zwischen zwei Rainbow-Frames in Millisekunden
pub const RAINBOW_INTERVAL_MS: u64 = 40;

/// Füllt den ganzen Strip mit einer Farbe und zeigt ihn an
pub fn render_static<W>(strip: &mut W, color: RGB8, brightness: u8) -> Result<(), LedError>
where
    W: SmartLedWriter + ?Sized,
{
    for index in 0..strip.pixel_count() {
        strip.set_pixel(index, color);
    }
    strip.set_brightness(brightness);
    strip.show()
}

/// Rendert einen Regenbogen-Frame für die gegebene Phase
///
/// Pixel `i` bekommt `wheel((i * 256 / N + phase) mod 256)`.
pub fn render_rainbow<W>(strip: &mut W, phase: u8, brightness: u8) -> Result<(), LedError>
where
    W: SmartLedWriter + ?Sized,
{
    let count = strip.pixel_count();
    for index in 0..count {
        // index < count → Quotient < 256
        let offset = (index * 256 / count) as u8;
        strip.set_pixel(index, wheel(offset.wrapping_add(phase)));
    }
    strip.set_brightness(brightness);
    strip.show()
}

/// Animations-Tick
///
/// Gibt `Ok(true)` zurück wenn ein Frame gerendert wurde. Auch bei einem
/// Schreibfehler gilt der Frame als verbraucht (Phase und Zeitstempel
/// laufen weiter), damit kein Nachholen entsteht.
///
/// # Parameter
/// - `state`: Anzeige-Zustand (nur im Rainbow-Modus aktiv)
/// - `strip`: LED Writer (Hardware oder Mock)
/// - `now_ms`: monotone Zeit in Millisekunden
pub fn tick<W>(state: &mut DisplayState, strip: &mut W, now_ms: u64) -> Result<bool, LedError>
where
    W: SmartLedWriter + ?Sized,
{
    let Mode::Rainbow { phase, last_frame } = &mut state.mode else {
        return Ok(false);
    };

    if let Some(last) = *last_frame {
        if now_ms.wrapping_sub(last) < RAINBOW_INTERVAL_MS {
            return Ok(false);
        }
    }

    let result = render_rainbow(strip, *phase, state.brightness);

    *phase = phase.wrapping_add(1);
    *last_frame = Some(now_ms);

    result.map(|()| true)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Minimaler Strip für Unit Tests (no_std, feste Länge)
    struct ArrayStrip {
        pixels: [RGB8; 4],
        brightness: u8,
        shows: usize,
    }

    impl ArrayStrip {
        fn new() -> Self {
            Self {
                pixels: [RGB8::default(); 4],
                brightness: 0,
                shows: 0,
            }
        }
    }

    impl SmartLedWriter for ArrayStrip {
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
            self.shows += 1;
            Ok(())
        }
    }

    fn rainbow_state() -> DisplayState {
        DisplayState {
            mode: Mode::Rainbow {
                phase: 0,
                last_frame: None,
            },
            brightness: 50,
        }
    }

    #[test]
    fn test_tick_static_does_nothing() {
        let mut state = DisplayState::new();
        let mut strip = ArrayStrip::new();
        assert_eq!(tick(&mut state, &mut strip, 1000), Ok(false));
        assert_eq!(strip.shows, 0);
    }

    #[test]
    fn test_tick_first_frame_immediate() {
        let mut state = rainbow_state();
        let mut strip = ArrayStrip::new();
        assert_eq!(tick(&mut state, &mut strip, 0), Ok(true));
        assert_eq!(strip.shows, 1);
        assert_eq!(strip.brightness, 50);
        assert_eq!(strip.pixels[0], wheel(0));
        assert_eq!(strip.pixels[1], wheel(64));
        assert_eq!(strip.pixels[3], wheel(192));
    }

    #[test]
    fn test_tick_respects_interval() {
        let mut state = rainbow_state();
        let mut strip = ArrayStrip::new();
        tick(&mut state, &mut strip, 100).unwrap();
        assert_eq!(tick(&mut state, &mut strip, 139), Ok(false));
        assert_eq!(tick(&mut state, &mut strip, 140), Ok(true));
        assert_eq!(strip.shows, 2);
        assert_eq!(strip.pixels[0], wheel(1));
    }

    #[test]
    fn test_tick_no_catch_up() {
        let mut state = rainbow_state();
        let mut strip = ArrayStrip::new();
        tick(&mut state, &mut strip, 0).unwrap();
        // Lange Pause: trotzdem nur ein Frame
        assert_eq!(tick(&mut state, &mut strip, 10_000), Ok(true));
        assert_eq!(tick(&mut state, &mut strip, 10_001), Ok(false));
        assert_eq!(
            state.mode,
            Mode::Rainbow {
                phase: 2,
                last_frame: Some(10_000)
            }
        );
    }

    #[test]
    fn test_phase_wraps() {
        let mut state = rainbow_state();
        state.mode = Mode::Rainbow {
            phase: 255,
            last_frame: None,
        };
        let mut strip = ArrayStrip::new();
        tick(&mut state, &mut strip, 0).unwrap();
        assert_eq!(
            state.mode,
            Mode::Rainbow {
                phase: 0,
                last_frame: Some(0)
            }
        );
    }

    #[test]
    fn test_render_static_fills_strip() {
        let mut strip = ArrayStrip::new();
        render_static(&mut strip, RGB8::new(1, 2, 3), 77).unwrap();
        assert!(strip.pixels.iter().all(|p| *p == RGB8::new(1, 2, 3)));
        assert_eq!(strip.brightness, 77);
        assert_eq!(strip.shows, 1);
    }
}

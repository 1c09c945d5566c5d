//! Property Tests für Kommando-Parsing und Animation

mod common;

use common::{host_command, started_controller};
use proptest::prelude::*;
use rgb::RGB8;
use strip_core::{Command, LINE_CAPACITY, LineFramer, RAINBOW_INTERVAL_MS, parse_command, wheel};

fn clamp(value: i64) -> u8 {
    value.clamp(0, 255) as u8
}

proptest! {
    #[test]
    fn bright_is_clamped(level in any::<i64>()) {
        let mut controller = started_controller();
        host_command(&mut controller, &format!("BRIGHT {}", level), 0);
        prop_assert_eq!(controller.state().brightness, clamp(level));
    }

    #[test]
    fn color_is_clamped(r in any::<i64>(), g in any::<i64>(), b in any::<i64>()) {
        let mut controller = started_controller();
        host_command(&mut controller, &format!("COLOR {} {} {}", r, g, b), 0);
        prop_assert_eq!(
            controller.state().static_color(),
            Some(RGB8::new(clamp(r), clamp(g), clamp(b)))
        );
    }

    #[test]
    fn hex_matches_rgb(r in any::<u8>(), g in any::<u8>(), b in any::<u8>()) {
        let line = format!("#{:02x}{:02X}{:02x}", r, g, b);
        prop_assert_eq!(parse_command(&line), Some(Command::SetColor(RGB8::new(r, g, b))));
    }

    #[test]
    fn framer_never_exceeds_capacity(bytes in proptest::collection::vec(any::<u8>(), 0..200)) {
        let mut framer = LineFramer::new();
        for byte in bytes {
            if let Some(line) = framer.feed(byte) {
                prop_assert!(line.len() <= LINE_CAPACITY);
                prop_assert!(!line.contains(&b'\r'));
            }
            prop_assert!(framer.pending().len() <= LINE_CAPACITY);
        }
    }

    #[test]
    fn rainbow_frames_are_paced(gaps in proptest::collection::vec(0u64..120, 1..40)) {
        let mut controller = started_controller();
        host_command(&mut controller, "RAINBOW", 0);

        let mut now = 0;
        let mut last_frame_at = 0;
        let mut expected_phase: u8 = 1;
        for gap in gaps {
            now += gap;
            let before = controller.strip().show_count;
            let rendered = controller.tick(now).unwrap();
            let after = controller.strip().show_count;

            prop_assert!(after - before <= 1);
            prop_assert_eq!(rendered, after == before + 1);
            if rendered {
                prop_assert!(now - last_frame_at >= RAINBOW_INTERVAL_MS);
                let frame = controller.strip().last_frame().unwrap();
                prop_assert_eq!(frame[0], wheel(expected_phase));
                expected_phase = expected_phase.wrapping_add(1);
                last_frame_at = now;
            }
        }
    }
}

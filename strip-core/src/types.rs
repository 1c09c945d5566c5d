//! Core Types für LED-Steuerung
//!
//! Datenstrukturen ohne Hardware-Dependencies

use rgb::RGB8;

/// Start-Helligkeit nach dem Einschalten
pub const DEFAULT_BRIGHTNESS: u8 = 128;

/// Herkunft einer Kommandozeile
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Link {
    /// Kabelgebundene Host-Verbindung (auch Diagnose-Kanal)
    Host,
    /// Bluetooth-Modul
    Wireless,
}

/// Antwort auf ein Kommando
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Status {
    Ok,
    Err,
}

impl Status {
    /// Text der Antwortzeile (ohne Zeilenende)
    pub fn as_str(self) -> &'static str {
        match self {
            Status::Ok => "OK",
            Status::Err => "ERR",
        }
    }
}

/// Geparstes Text-Kommando
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Strip ausschalten (statisch schwarz)
    Off,
    /// Regenbogen-Animation starten
    Rainbow,
    /// Statische Farbe setzen
    SetColor(RGB8),
    /// Globale Helligkeit setzen
    SetBrightness(u8),
    /// Nicht erkanntes oder fehlerhaftes Kommando
    Unknown,
}

/// Grund für eine `ERR`-Antwort
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Rejection {
    /// Bekanntes Kommando, aber fehlerhafte Argumente (kein Diagnose-Log)
    BadArgument,
    /// Unbekanntes Kommando (Diagnose `Unknown command.`)
    UnknownKeyword,
}

/// Aktueller Anzeige-Modus
///
/// Nur die Felder des aktiven Modus existieren.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Static {
        color: RGB8,
    },
    Rainbow {
        phase: u8,
        /// Zeitpunkt (ms) des letzten Frames, `None` = sofort rendern
        last_frame: Option<u64>,
    },
}

/// Gesamter Anzeige-Zustand
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayState {
    pub mode: Mode,
    pub brightness: u8,
}

impl DisplayState {
    /// Zustand nach dem Einschalten: statisch schwarz, Helligkeit 128
    pub const fn new() -> Self {
        Self {
            mode: Mode::Static {
                color: RGB8 { r: 0, g: 0, b: 0 },
            },
            brightness: DEFAULT_BRIGHTNESS,
        }
    }

    /// Statische Farbe, falls der Static-Modus aktiv ist
    pub fn static_color(&self) -> Option<RGB8> {
        match self.mode {
            Mode::Static { color } => Some(color),
            Mode::Rainbow { .. } => None,
        }
    }

    pub fn is_rainbow(&self) -> bool {
        matches!(self.mode, Mode::Rainbow { .. })
    }
}

impl Default for DisplayState {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// defmt::Format Implementations (optional feature)
// ============================================================================

#[cfg(feature = "defmt")]
impl defmt::Format for Command {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Command::Off => defmt::write!(fmt, "Off"),
            Command::Rainbow => defmt::write!(fmt, "Rainbow"),
            Command::SetColor(color) => {
                defmt::write!(
                    fmt,
                    "SetColor {{ rgb: ({}, {}, {}) }}",
                    color.r,
                    color.g,
                    color.b
                )
            }
            Command::SetBrightness(level) => defmt::write!(fmt, "SetBrightness({})", level),
            Command::Unknown => defmt::write!(fmt, "Unknown"),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Mode {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Mode::Static { color } => {
                defmt::write!(fmt, "Static {{ rgb: ({}, {}, {}) }}", color.r, color.g, color.b)
            }
            Mode::Rainbow { phase, .. } => defmt::write!(fmt, "Rainbow {{ phase: {} }}", phase),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for DisplayState {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(
            fmt,
            "DisplayState {{ mode: {}, brightness: {} }}",
            self.mode,
            self.brightness
        )
    }
}

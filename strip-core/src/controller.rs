//! Top-Level Controller
//!
//! Besitzt Anzeige-Zustand, beide Zeilenpuffer, beide seriellen
//! Verbindungen und den LED Writer. Ein Aufruf von [`Controller::run_once`]
//! entspricht einem Durchlauf der Hauptschleife:
//! Bluetooth pollen → Host pollen → Animations-Tick.

use rgb::RGB8;

use crate::framer::{Line, LineFramer};
use crate::interpreter::{Interpretation, interpret};
use crate::scheduler::{self, render_static};
use crate::traits::{LedError, LinkError, SerialLink, SmartLedWriter};
use crate::types::{Command, DisplayState, Link, Rejection, Status};

/// Begrüßung auf der Host-Verbindung
pub const HOST_BANNER: &str = "Bluetooth LED strip controller ready.";

/// Begrüßung auf der Bluetooth-Verbindung
pub const WIRELESS_BANNER: &str = "READY";

/// Präfix der Diagnose-Ausgabe für jedes empfangene Kommando
pub const DIAG_RECEIVED: &str = "Received command: ";

/// Diagnose-Ausgabe für unbekannte Kommandos
pub const DIAG_UNKNOWN: &str = "Unknown command.";

/// Fehler während eines Loop-Durchlaufs (nie fatal)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ControllerError {
    Led(LedError),
    Link(Link, LinkError),
}

impl From<LedError> for ControllerError {
    fn from(error: LedError) -> Self {
        ControllerError::Led(error)
    }
}

/// Steuerungs-Kern: verbindet Kanäle, Interpreter und Scheduler
///
/// # Trait-basierte Abstraktion
/// - `W`: LED Writer (RmtStripWriter oder Mock)
/// - `H`: Host-Verbindung, zugleich Diagnose-Kanal
/// - `B`: Bluetooth-Verbindung
pub struct Controller<W, H, B> {
    strip: W,
    host: H,
    wireless: B,
    host_framer: LineFramer,
    wireless_framer: LineFramer,
    state: DisplayState,
}

impl<W, H, B> Controller<W, H, B>
where
    W: SmartLedWriter,
    H: SerialLink,
    B: SerialLink,
{
    pub fn new(strip: W, host: H, wireless: B) -> Self {
        Self {
            strip,
            host,
            wireless,
            host_framer: LineFramer::new(),
            wireless_framer: LineFramer::new(),
            state: DisplayState::new(),
        }
    }

    /// Startsequenz: Strip löschen und Begrüßungen senden
    pub fn start(&mut self) -> Result<(), ControllerError> {
        let mut result = render_static(&mut self.strip, RGB8::default(), self.state.brightness)
            .map_err(ControllerError::from);

        keep_last_error(&mut result, self.write_line(Link::Host, HOST_BANNER.as_bytes()));
        keep_last_error(
            &mut result,
            self.write_line(Link::Wireless, WIRELESS_BANNER.as_bytes()),
        );
        result
    }

    /// Ein Durchlauf der Hauptschleife
    ///
    /// Fehler brechen den Durchlauf nicht ab; der letzte Fehler wird
    /// zurückgegeben.
    pub fn run_once(&mut self, now_ms: u64) -> Result<(), ControllerError> {
        let mut result = self.poll_link(Link::Wireless);
        keep_last_error(&mut result, self.poll_link(Link::Host));
        keep_last_error(&mut result, self.tick(now_ms).map(|_| ()));
        result
    }

    /// Verarbeitet alle sofort verfügbaren Zeilen einer Verbindung
    pub fn poll_link(&mut self, link: Link) -> Result<(), ControllerError> {
        let mut result = Ok(());
        loop {
            let line = match link {
                Link::Host => self.host_framer.poll(&mut self.host),
                Link::Wireless => self.wireless_framer.poll(&mut self.wireless),
            };
            let Some(line) = line else {
                break;
            };
            keep_last_error(&mut result, self.handle_line(link, &line).map(|_| ()));
        }
        result
    }

    /// Interpretiert eine fertige Zeile und antwortet auf dem Ursprungskanal
    ///
    /// Gibt `Ok(None)` für leere Zeilen zurück (keine Antwort).
    pub fn handle_line(
        &mut self,
        origin: Link,
        line: &Line,
    ) -> Result<Option<Status>, ControllerError> {
        let raw = line.trim_ascii();
        if raw.is_empty() {
            return Ok(None);
        }

        // Nicht-UTF-8 (z.B. abgeschnittene Multibyte-Zeichen) → unbekannt
        let outcome = match core::str::from_utf8(raw) {
            Ok(text) => interpret(text, &mut self.state, &mut self.strip),
            Err(_) => None,
        }
        .unwrap_or(Interpretation {
            command: Command::Unknown,
            status: Status::Err,
            rejection: Some(Rejection::UnknownKeyword),
            render: Ok(()),
        });

        let mut result = outcome.render.map_err(ControllerError::from);

        // Diagnose-Echo immer auf dem Host-Kanal
        keep_last_error(&mut result, self.write_diag(raw));
        // Nur unbekannte Kommandos, nicht fehlerhafte Argumente
        if outcome.rejection == Some(Rejection::UnknownKeyword) {
            keep_last_error(
                &mut result,
                self.write_line(Link::Host, DIAG_UNKNOWN.as_bytes()),
            );
        }

        keep_last_error(
            &mut result,
            self.write_line(origin, outcome.status.as_str().as_bytes()),
        );

        result.map(|()| Some(outcome.status))
    }

    /// Animations-Tick, gibt `true` zurück wenn ein Frame gerendert wurde
    pub fn tick(&mut self, now_ms: u64) -> Result<bool, ControllerError> {
        scheduler::tick(&mut self.state, &mut self.strip, now_ms).map_err(ControllerError::from)
    }

    pub fn state(&self) -> &DisplayState {
        &self.state
    }

    pub fn strip(&self) -> &W {
        &self.strip
    }

    pub fn strip_mut(&mut self) -> &mut W {
        &mut self.strip
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn wireless(&self) -> &B {
        &self.wireless
    }

    pub fn wireless_mut(&mut self) -> &mut B {
        &mut self.wireless
    }

    fn write_diag(&mut self, raw: &[u8]) -> Result<(), ControllerError> {
        self.write(Link::Host, DIAG_RECEIVED.as_bytes())?;
        self.write_line(Link::Host, raw)
    }

    fn write_line(&mut self, link: Link, text: &[u8]) -> Result<(), ControllerError> {
        self.write(link, text)?;
        self.write(link, b"\n")
    }

    fn write(&mut self, link: Link, bytes: &[u8]) -> Result<(), ControllerError> {
        let result = match link {
            Link::Host => self.host.write_all(bytes),
            Link::Wireless => self.wireless.write_all(bytes),
        };
        result.map_err(|error| ControllerError::Link(link, error))
    }
}

/// Merkt sich den letzten Fehler, ohne die Verarbeitung abzubrechen
fn keep_last_error(result: &mut Result<(), ControllerError>, next: Result<(), ControllerError>) {
    if next.is_err() {
        *result = next;
    }
}

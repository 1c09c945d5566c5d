//! Kommando-Interpreter
//!
//! Parst eine Textzeile in ein [`Command`] und wendet es auf den
//! [`DisplayState`] an. Schlüsselwörter sind case-insensitive.
//!
//! Grammatik: `OFF` | `RAINBOW` | `#RRGGBB` | `COLOR <r> <g> <b>` | `BRIGHT <n>`

use rgb::RGB8;

use crate::logic::{clamp_u8, parse_hex_color, parse_int};
use crate::scheduler::render_static;
use crate::traits::{LedError, SmartLedWriter};
use crate::types::{Command, DisplayState, Mode, Rejection, Status};

/// Ergebnis einer interpretierten Zeile
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interpretation {
    pub command: Command,
    pub status: Status,
    /// Grund der Ablehnung bei `Status::Err`
    pub rejection: Option<Rejection>,
    /// Ergebnis des sofortigen Renderns (nur im Static-Modus relevant)
    pub render: Result<(), LedError>,
}

/// Parst eine Kommandozeile
///
/// Gibt `None` für leere Zeilen zurück (kein Kommando, keine Antwort).
/// Abgelehnte Zeilen werden zu [`Command::Unknown`].
pub fn parse_command(raw: &str) -> Option<Command> {
    classify_command(raw).map(|parsed| parsed.unwrap_or(Command::Unknown))
}

/// Parst eine Kommandozeile und unterscheidet Ablehnungsgründe
///
/// Ein bekanntes Schlüsselwort mit fehlerhaften Argumenten ergibt
/// [`Rejection::BadArgument`], alles andere [`Rejection::UnknownKeyword`].
pub fn classify_command(raw: &str) -> Option<Result<Command, Rejection>> {
    let line = raw.trim_ascii();
    if line.is_empty() {
        return None;
    }

    if line.eq_ignore_ascii_case("OFF") {
        return Some(Ok(Command::Off));
    }
    if line.eq_ignore_ascii_case("RAINBOW") {
        return Some(Ok(Command::Rainbow));
    }
    if line.len() == 7 && line.starts_with('#') {
        return Some(
            parse_hex_color(&line[1..])
                .map(Command::SetColor)
                .ok_or(Rejection::BadArgument),
        );
    }
    if let Some(args) = strip_keyword(line, "COLOR ") {
        return Some(parse_color_args(args).ok_or(Rejection::BadArgument));
    }
    if let Some(args) = strip_keyword(line, "BRIGHT ") {
        return Some(parse_brightness_arg(args).ok_or(Rejection::BadArgument));
    }

    Some(Err(Rejection::UnknownKeyword))
}

/// Wendet ein Kommando auf den Zustand an (ohne Rendering)
pub fn apply_command(command: Command, state: &mut DisplayState) -> Status {
    match command {
        Command::Off => {
            state.mode = Mode::Static {
                color: RGB8::new(0, 0, 0),
            };
        }
        Command::Rainbow => {
            // Laufende Animation behält ihre Phase, nur der Timer wird gelöscht
            let phase = match state.mode {
                Mode::Rainbow { phase, .. } => phase,
                Mode::Static { .. } => 0,
            };
            state.mode = Mode::Rainbow {
                phase,
                last_frame: None,
            };
        }
        Command::SetColor(color) => {
            state.mode = Mode::Static { color };
        }
        Command::SetBrightness(level) => {
            state.brightness = level;
        }
        Command::Unknown => return Status::Err,
    }
    Status::Ok
}

/// Interpretiert eine Zeile: parsen, anwenden, ggf. sofort rendern
///
/// Im Static-Modus wird nach jeder erfolgreichen Änderung neu gerendert;
/// im Rainbow-Modus übernimmt der nächste Animations-Frame.
pub fn interpret<W>(raw: &str, state: &mut DisplayState, strip: &mut W) -> Option<Interpretation>
where
    W: SmartLedWriter + ?Sized,
{
    let (command, rejection) = match classify_command(raw)? {
        Ok(command) => (command, None),
        Err(rejection) => (Command::Unknown, Some(rejection)),
    };
    let status = apply_command(command, state);

    let render = match (status, state.mode) {
        (Status::Ok, Mode::Static { color }) => render_static(strip, color, state.brightness),
        _ => Ok(()),
    };

    Some(Interpretation {
        command,
        status,
        rejection,
        render,
    })
}

/// Entfernt ein Schlüsselwort (case-insensitive) vom Zeilenanfang
fn strip_keyword<'a>(line: &'a str, keyword: &str) -> Option<&'a str> {
    let head = line.get(..keyword.len())?;
    head.eq_ignore_ascii_case(keyword)
        .then(|| &line[keyword.len()..])
}

/// `<r> <g> <b>`: genau drei Integer, jeweils auf 0-255 begrenzt
fn parse_color_args(args: &str) -> Option<Command> {
    let mut parts = args.split_ascii_whitespace().map(parse_int);
    match (parts.next(), parts.next(), parts.next(), parts.next()) {
        (Some(Some(r)), Some(Some(g)), Some(Some(b)), None) => {
            Some(Command::SetColor(RGB8::new(clamp_u8(r), clamp_u8(g), clamp_u8(b))))
        }
        _ => None,
    }
}

/// `<n>`: genau ein Integer, auf 0-255 begrenzt
fn parse_brightness_arg(args: &str) -> Option<Command> {
    let mut parts = args.split_ascii_whitespace().map(parse_int);
    match (parts.next(), parts.next()) {
        (Some(Some(level)), None) => Some(Command::SetBrightness(clamp_u8(level))),
        _ => None,
    }
}

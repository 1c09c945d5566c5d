//! Strip Core - Platform-agnostic Logic and Traits
//!
//! Diese Crate enthält KEINE Hardware-Dependencies.
//! Sie definiert Traits, den Kommando-Interpreter, die Animation
//! und den Controller der Hauptschleife.

#![no_std]

pub mod controller;
pub mod framer;
pub mod interpreter;
pub mod logic;
pub mod scheduler;
pub mod traits;
pub mod types;

// Re-exports für einfachen Zugriff
pub use controller::{Controller, ControllerError};
pub use framer::{LINE_CAPACITY, Line, LineFramer};
pub use interpreter::{apply_command, classify_command, interpret, parse_command};
pub use logic::wheel;
pub use scheduler::RAINBOW_INTERVAL_MS;
pub use traits::{LedError, LinkError, SerialLink, SmartLedWriter};
pub use types::{Command, DEFAULT_BRIGHTNESS, DisplayState, Link, Mode, Rejection, Status};

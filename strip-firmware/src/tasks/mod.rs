// Task-Modul: Enthält alle Embassy Tasks
//
// Die gesamte Steuerung läuft kooperativ in einem einzigen Task.

pub mod controller;

// Re-export Tasks für einfachen Import
pub use controller::controller_task;

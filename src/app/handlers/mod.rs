//! Feature-Handler für AppCommand-Verarbeitung.
//!
//! Jeder Handler gruppiert die Command-Ausführung eines Feature-Bereichs.
//! Der Controller dispatcht an die passende Handler-Funktion.

pub mod bridge;
pub mod identification;
pub mod map;
pub mod mode;
pub mod network_ops;
pub mod options;
pub mod pointer;
pub mod selection;
pub mod trace;

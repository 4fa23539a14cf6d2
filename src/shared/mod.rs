//! Geteilte Typen für modulübergreifende Verträge.
//!
//! Enthält die Laufzeit-Optionen, die von `app`, `bridge` und dem
//! Headless-Runner gemeinsam gelesen werden.

pub mod options;

pub use options::MapOptions;
pub use options::{HIT_BOX_PX, TRACE_TIMEOUT_SECS};

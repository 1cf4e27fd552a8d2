//! Geteilte Typen und Konstanten fuer alle Layer.
//!
//! Enthaelt die Laufzeit-Optionen und die festen Schwellwerte, die sowohl
//! von den Rechnern in `precision` als auch vom Zyklus-Treiber in `app`
//! gelesen werden.
pub mod options;

pub use options::{AngleDisplayMode, PrecisionOptions};
